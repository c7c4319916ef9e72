use axum::{Router, routing::get};

use crate::state::AppState;

pub mod health;
pub mod params;
pub mod produits;

// Construit le routeur sans lier l'état; il est fourni au niveau racine.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(produits::router())
        .route("/health", get(health::health_check))
}
