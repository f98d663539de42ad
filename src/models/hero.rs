use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PowerSummary;

/// A hero as stored.
///
/// Heroes are linked to powers through [`HeroPower`](super::HeroPower) rows;
/// the link is never held on the struct itself. Use
/// [`HeroDetail`] when the linked powers are needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    /// The hero's public alias, e.g. "Ms. Marvel".
    pub super_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new hero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHeroInput {
    pub name: String,
    pub super_name: String,
}

/// A hero as returned in list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSummary {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

impl From<Hero> for HeroSummary {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
        }
    }
}

/// A hero with the powers linked to it, used for detail responses.
///
/// The `hero` fields are flattened into the JSON response, with an additional
/// `powers` array. Each entry is a [`PowerSummary`], which carries no heroes,
/// so the projection stops one level deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroDetail {
    #[serde(flatten)]
    pub hero: HeroSummary,
    pub powers: Vec<PowerSummary>,
}

impl HeroDetail {
    pub fn new(hero: Hero, powers: Vec<super::Power>) -> Self {
        Self {
            hero: hero.into(),
            powers: powers.into_iter().map(Into::into).collect(),
        }
    }
}
