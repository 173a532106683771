//! JSON API routes.

pub mod preferences;
pub mod records;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the `/api` router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/preferences/dark-mode", post(preferences::toggle_dark_mode))
        .route("/products", get(records::products))
        .route("/orders", get(records::orders))
}
