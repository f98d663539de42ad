use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A power a hero can have.
///
/// `description` is always at least
/// [`MIN_DESCRIPTION_LEN`](crate::validation::MIN_DESCRIPTION_LEN) characters
/// once persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Power {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new power.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePowerInput {
    pub name: String,
    pub description: String,
}

/// Input for updating a power. Only the description can change; leaving it
/// out makes the update a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePowerInput {
    #[serde(default)]
    pub description: Option<String>,
}

/// A power as returned over the wire, both standalone and nested in a hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<Power> for PowerSummary {
    fn from(power: Power) -> Self {
        Self {
            id: power.id,
            name: power.name,
            description: power.description,
        }
    }
}
