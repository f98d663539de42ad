//! Sample data for a fresh database.

use crate::db::{Database, StoreError};
use crate::models::*;

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    (
        "elasticity",
        "can stretch the human body to extreme lengths",
    ),
];

/// Insert the sample heroes and powers and link each hero to one or two
/// powers. Does nothing if the store already has heroes.
pub fn seed(db: &Database) -> Result<StoreCounts, StoreError> {
    if db.counts()?.heroes > 0 {
        tracing::info!("Database already has heroes, skipping seed");
        return db.counts();
    }

    let powers = POWERS
        .iter()
        .map(|(name, description)| {
            db.create_power(CreatePowerInput {
                name: name.to_string(),
                description: description.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (i, (name, super_name)) in HEROES.iter().enumerate() {
        let hero = db.create_hero(CreateHeroInput {
            name: name.to_string(),
            super_name: super_name.to_string(),
        })?;

        // Every other hero gets a second power
        let links = if i % 2 == 0 { 2 } else { 1 };
        for offset in 0..links {
            let power = &powers[(i + offset) % powers.len()];
            let strength = Strength::ALL[(i + offset) % Strength::ALL.len()];
            db.create_hero_power(CreateHeroPowerInput::new(
                strength.as_str(),
                hero.id,
                power.id,
            ))?;
        }
    }

    let counts = db.counts()?;
    tracing::info!(
        "Seeded {} heroes, {} powers, {} hero powers",
        counts.heroes,
        counts.powers,
        counts.hero_powers
    );
    Ok(counts)
}
