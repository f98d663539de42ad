use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::HeroDetail;

/// The link between a hero and a power, carrying how strong the hero is in it.
///
/// Never returned on its own; creating one answers with the hero's
/// [`HeroDetail`](super::HeroDetail).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroPower {
    pub id: i64,
    pub strength: Strength,
    pub hero_id: i64,
    pub power_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// How strong a hero is in a given power.
///
/// - `Strong`
/// - `Weak`
/// - `Average`
///
/// Stored and transferred by its exact, capitalized name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Self::Strong, Self::Weak, Self::Average];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Weak => "Weak",
            Self::Average => "Average",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Strong" => Some(Self::Strong),
            "Weak" => Some(Self::Weak),
            "Average" => Some(Self::Average),
            _ => None,
        }
    }
}

/// Input for linking a hero to a power.
///
/// Every field is optional at the wire level so a missing id can be answered
/// as "not found" and a missing strength as a validation failure, instead of
/// a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateHeroPowerInput {
    #[serde(default)]
    pub strength: Option<String>,
    #[serde(default)]
    pub hero_id: Option<i64>,
    #[serde(default)]
    pub power_id: Option<i64>,
}

impl CreateHeroPowerInput {
    pub fn new(strength: impl Into<String>, hero_id: i64, power_id: i64) -> Self {
        Self {
            strength: Some(strength.into()),
            hero_id: Some(hero_id),
            power_id: Some(power_id),
        }
    }
}

/// The outcome of linking a hero to a power: the new row, and the hero as it
/// reads once the link is in place.
#[derive(Debug, Clone)]
pub struct LinkedHeroPower {
    pub hero_power: HeroPower,
    pub hero: HeroDetail,
}
