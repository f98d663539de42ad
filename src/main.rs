use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use superhero_api::{api, config::ServerConfig, seed};

#[derive(Parser)]
#[command(name = "superhero")]
#[command(about = "Heroes, their powers, and how strong they are in each")]
struct Cli {
    #[command(flatten)]
    config: ServerConfig,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve,
    /// Create or upgrade the database schema, then exit
    Migrate,
    /// Fill an empty database with sample heroes and powers
    Seed,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "superhero_api=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let db = config.open_database()?;
    let app = api::create_router(db);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Superhero API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&cli.config).await?,
        Commands::Migrate => {
            cli.config.open_database()?;
            tracing::info!("Database schema is up to date");
        }
        Commands::Seed => {
            let db = cli.config.open_database()?;
            seed::seed(&db)?;
        }
    }

    Ok(())
}
