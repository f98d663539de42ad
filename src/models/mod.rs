//! Domain models for the superhero API.
//!
//! # Entities
//!
//! - [`Hero`]: a person with a public alias.
//! - [`Power`]: an ability with a description of at least 20 characters.
//! - [`HeroPower`]: the many-to-many link between the two, with a [`Strength`].
//!
//! # Transfer representations
//!
//! The hero/power graph is cyclic in storage (a hero reaches powers, which
//! reach heroes), but responses are projected at most one level deep:
//!
//! - [`HeroSummary`]: `{id, name, super_name}` for hero lists.
//! - [`HeroDetail`]: a summary plus its powers as [`PowerSummary`] entries.
//! - [`PowerSummary`]: `{id, name, description}`, with no heroes embedded.

mod hero;
mod hero_power;
mod power;

pub use hero::*;
pub use hero_power::*;
pub use power::*;

/// Row counts for each table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub heroes: i64,
    pub powers: i64,
    pub hero_powers: i64,
}
