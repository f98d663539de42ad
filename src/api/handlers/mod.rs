use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Html,
    Json,
};

use super::error::{ApiError, HERO_NOT_FOUND, POWER_NOT_FOUND};
use crate::db::Database;
use crate::models::*;

/// Parse a path id. Anything that is not an integer names no row.
fn parse_id(raw: &str, not_found: &'static str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(not_found))
}

// ============================================================
// Home
// ============================================================

pub async fn home() -> Html<&'static str> {
    Html("<h2>Welcome To Superhero API</h2>")
}

// ============================================================
// Heroes
// ============================================================

pub async fn list_heroes(State(db): State<Database>) -> Result<Json<Vec<HeroSummary>>, ApiError> {
    let heroes = db.get_all_heroes()?;
    Ok(Json(heroes.into_iter().map(Into::into).collect()))
}

pub async fn get_hero(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<HeroDetail>, ApiError> {
    let id = parse_id(&id, HERO_NOT_FOUND)?;
    db.get_hero_with_powers(id)?
        .map(Json)
        .ok_or(ApiError::NotFound(HERO_NOT_FOUND))
}

// ============================================================
// Powers
// ============================================================

pub async fn list_powers(State(db): State<Database>) -> Result<Json<Vec<PowerSummary>>, ApiError> {
    let powers = db.get_all_powers()?;
    Ok(Json(powers.into_iter().map(Into::into).collect()))
}

pub async fn get_power(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<PowerSummary>, ApiError> {
    let id = parse_id(&id, POWER_NOT_FOUND)?;
    db.get_power(id)?
        .map(|p| Json(p.into()))
        .ok_or(ApiError::NotFound(POWER_NOT_FOUND))
}

pub async fn update_power(
    State(db): State<Database>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePowerInput>, JsonRejection>,
) -> Result<Json<PowerSummary>, ApiError> {
    let id = parse_id(&id, POWER_NOT_FOUND)?;
    let Json(input) = payload?;

    db.update_power(id, input)?
        .map(|p| Json(p.into()))
        .ok_or(ApiError::NotFound(POWER_NOT_FOUND))
}

// ============================================================
// Hero powers
// ============================================================

/// Link a hero to a power and answer with the hero's updated detail.
pub async fn create_hero_power(
    State(db): State<Database>,
    payload: Result<Json<CreateHeroPowerInput>, JsonRejection>,
) -> Result<(StatusCode, Json<HeroDetail>), ApiError> {
    let Json(input) = payload?;
    let linked = db.create_hero_power(input)?;

    tracing::info!(
        "Linked hero {} to power {} ({})",
        linked.hero_power.hero_id,
        linked.hero_power.power_id,
        linked.hero_power.strength.as_str()
    );

    Ok((StatusCode::CREATED, Json(linked.hero)))
}
