mod error;
mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row};

pub use error::StoreError;

use crate::models::*;
use crate::validation::{
    validate_hero_power_strength, validate_power_description, ValidationError,
};

const HERO_COLUMNS: &str = "id, name, super_name, created_at, updated_at";
const POWER_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Handle to the SQLite store. Clones share one connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::from_connection(conn)
    }

    pub fn open_default() -> Result<Self> {
        Self::open(default_path()?)
    }

    pub fn open_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.lock()?;
        schema::run_migrations(&conn)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    // ============================================================
    // Hero operations
    // ============================================================

    pub fn get_all_heroes(&self) -> Result<Vec<Hero>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("SELECT {HERO_COLUMNS} FROM heroes ORDER BY id"))?;

        let heroes = stmt
            .query_map([], hero_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(heroes)
    }

    pub fn get_hero(&self, id: i64) -> Result<Option<Hero>, StoreError> {
        let conn = self.lock()?;
        Ok(find_hero(&conn, id)?)
    }

    /// Powers linked to a hero, each listed once, in the order they were
    /// first linked.
    pub fn get_hero_powers(&self, hero_id: i64) -> Result<Vec<Power>, StoreError> {
        let conn = self.lock()?;
        Ok(powers_for_hero(&conn, hero_id)?)
    }

    pub fn get_hero_with_powers(&self, id: i64) -> Result<Option<HeroDetail>, StoreError> {
        let conn = self.lock()?;
        let Some(hero) = find_hero(&conn, id)? else {
            return Ok(None);
        };
        let powers = powers_for_hero(&conn, id)?;
        Ok(Some(HeroDetail::new(hero, powers)))
    }

    pub fn create_hero(&self, input: CreateHeroInput) -> Result<Hero, StoreError> {
        let conn = self.lock()?;
        let now = Utc::now();

        conn.execute(
            "INSERT INTO heroes (name, super_name, created_at, updated_at) VALUES (?, ?, ?, ?)",
            (
                &input.name,
                &input.super_name,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ),
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(hero_id = id, "Created hero");

        Ok(Hero {
            id,
            name: input.name,
            super_name: input.super_name,
            created_at: now,
            updated_at: now,
        })
    }

    // ============================================================
    // Power operations
    // ============================================================

    pub fn get_all_powers(&self) -> Result<Vec<Power>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("SELECT {POWER_COLUMNS} FROM powers ORDER BY id"))?;

        let powers = stmt
            .query_map([], power_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(powers)
    }

    pub fn get_power(&self, id: i64) -> Result<Option<Power>, StoreError> {
        let conn = self.lock()?;
        Ok(find_power(&conn, id)?)
    }

    pub fn create_power(&self, input: CreatePowerInput) -> Result<Power, StoreError> {
        validate_power_description(&input.description)?;

        let conn = self.lock()?;
        let now = Utc::now();

        conn.execute(
            "INSERT INTO powers (name, description, created_at, updated_at) VALUES (?, ?, ?, ?)",
            (
                &input.name,
                &input.description,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ),
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(power_id = id, "Created power");

        Ok(Power {
            id,
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace a power's description.
    ///
    /// Returns `Ok(None)` when the power does not exist. Without a description
    /// nothing is written and the stored power is returned as-is.
    pub fn update_power(
        &self,
        id: i64,
        input: UpdatePowerInput,
    ) -> Result<Option<Power>, StoreError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let Some(existing) = find_power(&tx, id)? else {
            return Ok(None);
        };

        let Some(description) = input.description else {
            return Ok(Some(existing));
        };
        validate_power_description(&description)?;

        let now = Utc::now();
        tx.execute(
            "UPDATE powers SET description = ?, updated_at = ? WHERE id = ?",
            (&description, now.to_rfc3339(), id),
        )?;
        tx.commit()?;
        tracing::debug!(power_id = id, "Updated power description");

        Ok(Some(Power {
            description,
            updated_at: now,
            ..existing
        }))
    }

    // ============================================================
    // HeroPower operations
    // ============================================================

    /// Link a hero to a power.
    ///
    /// Both parents are looked up inside the same transaction as the insert.
    /// A missing or unknown id is [`StoreError::NotFound`]; the existence
    /// check runs before the strength is validated. The hero is re-read in the
    /// same transaction, so the returned detail includes the new power.
    pub fn create_hero_power(
        &self,
        input: CreateHeroPowerInput,
    ) -> Result<LinkedHeroPower, StoreError> {
        const NOT_FOUND: StoreError = StoreError::NotFound("Hero or Power not found");

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let (Some(hero_id), Some(power_id)) = (input.hero_id, input.power_id) else {
            return Err(NOT_FOUND);
        };
        let Some(hero) = find_hero(&tx, hero_id)? else {
            return Err(NOT_FOUND);
        };
        if find_power(&tx, power_id)?.is_none() {
            return Err(NOT_FOUND);
        }

        let strength = input
            .strength
            .as_deref()
            .ok_or(ValidationError::MissingStrength)
            .and_then(validate_hero_power_strength)?;

        let now = Utc::now();
        tx.execute(
            "INSERT INTO hero_powers (strength, hero_id, power_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            (
                strength.as_str(),
                hero_id,
                power_id,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ),
        )?;
        let id = tx.last_insert_rowid();
        let powers = powers_for_hero(&tx, hero_id)?;
        tx.commit()?;
        tracing::debug!(hero_power_id = id, hero_id, power_id, "Linked hero to power");

        Ok(LinkedHeroPower {
            hero_power: HeroPower {
                id,
                strength,
                hero_id,
                power_id,
                created_at: now,
                updated_at: now,
            },
            hero: HeroDetail::new(hero, powers),
        })
    }

    pub fn counts(&self) -> Result<StoreCounts, StoreError> {
        let conn = self.lock()?;
        let count = |table: &str| -> rusqlite::Result<i64> {
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        };

        Ok(StoreCounts {
            heroes: count("heroes")?,
            powers: count("powers")?,
            hero_powers: count("hero_powers")?,
        })
    }
}

fn default_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "superhero-api")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().join("superhero.db"))
}

fn find_hero(conn: &Connection, id: i64) -> rusqlite::Result<Option<Hero>> {
    conn.query_row(
        &format!("SELECT {HERO_COLUMNS} FROM heroes WHERE id = ?"),
        [id],
        hero_from_row,
    )
    .optional()
}

fn find_power(conn: &Connection, id: i64) -> rusqlite::Result<Option<Power>> {
    conn.query_row(
        &format!("SELECT {POWER_COLUMNS} FROM powers WHERE id = ?"),
        [id],
        power_from_row,
    )
    .optional()
}

fn powers_for_hero(conn: &Connection, hero_id: i64) -> rusqlite::Result<Vec<Power>> {
    let mut stmt = conn.prepare(
        "SELECT p.id, p.name, p.description, p.created_at, p.updated_at
         FROM powers p
         JOIN hero_powers hp ON hp.power_id = p.id
         WHERE hp.hero_id = ?
         GROUP BY p.id
         ORDER BY MIN(hp.id)",
    )?;

    let powers = stmt
        .query_map([hero_id], power_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(powers)
}

fn hero_from_row(row: &Row<'_>) -> rusqlite::Result<Hero> {
    Ok(Hero {
        id: row.get(0)?,
        name: row.get(1)?,
        super_name: row.get(2)?,
        created_at: parse_datetime(row.get::<_, String>(3)?),
        updated_at: parse_datetime(row.get::<_, String>(4)?),
    })
}

fn power_from_row(row: &Row<'_>) -> rusqlite::Result<Power> {
    Ok(Power {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: parse_datetime(row.get::<_, String>(3)?),
        updated_at: parse_datetime(row.get::<_, String>(4)?),
    })
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
