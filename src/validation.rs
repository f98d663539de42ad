//! Field-level rules checked before a write reaches the database.
//!
//! These are plain functions: the store calls them explicitly while building
//! a row, and a rejection aborts the write before anything is executed.

use crate::models::Strength;

/// Minimum number of characters a power description must have.
pub const MIN_DESCRIPTION_LEN: usize = 20;

/// A field value that may not be persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("description must be at least {min} characters, got {0}", min = MIN_DESCRIPTION_LEN)]
    DescriptionTooShort(usize),

    #[error("strength must be one of 'Strong', 'Weak', 'Average', got {0:?}")]
    InvalidStrength(String),

    #[error("strength is required")]
    MissingStrength,
}

/// Accepts a power description of at least [`MIN_DESCRIPTION_LEN`] characters.
pub fn validate_power_description(description: &str) -> Result<&str, ValidationError> {
    let len = description.chars().count();
    if len < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooShort(len));
    }
    Ok(description)
}

/// Accepts exactly `Strong`, `Weak` or `Average`. No case folding, no trimming.
pub fn validate_hero_power_strength(value: &str) -> Result<Strength, ValidationError> {
    Strength::from_str(value).ok_or_else(|| ValidationError::InvalidStrength(value.to_string()))
}
