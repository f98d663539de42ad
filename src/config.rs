//! Server configuration, read from command-line flags with environment
//! variable fallbacks.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::db::Database;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5555;

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ServerConfig {
    /// Address to bind the HTTP API to
    #[arg(long, global = true, env = "SUPERHERO_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port for HTTP API
    #[arg(short, long, global = true, env = "SUPERHERO_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to the SQLite database file. Defaults to the platform data directory.
    #[arg(long, global = true, env = "SUPERHERO_DATABASE")]
    pub database: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Open the configured database and bring its schema up to date.
    pub fn open_database(&self) -> Result<Database> {
        let db = match &self.database {
            Some(path) => Database::open(path.clone())?,
            None => Database::open_default()?,
        };
        db.migrate()?;
        Ok(db)
    }
}
