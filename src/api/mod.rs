mod error;
mod handlers;

pub use error::ApiError;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::Database;

pub fn create_router(db: Database) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        // Heroes
        .route("/heroes", get(handlers::list_heroes))
        .route("/heroes/{id}", get(handlers::get_hero))
        // Powers
        .route("/powers", get(handlers::list_powers))
        .route(
            "/powers/{id}",
            get(handlers::get_power).patch(handlers::update_power),
        )
        // Hero powers
        .route("/hero_powers", post(handlers::create_hero_power))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
