//! Route definitions for venue listing.
//!
//! Mounted at `/yards` in the API route tree.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::yards;
use crate::state::AppState;

/// Yard routes mounted at `/yards`.
///
/// ```text
/// GET    /             -> list_yards
/// POST   /search       -> search_yards
/// GET    /{id}         -> get_yard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(yards::list_yards))
        .route("/search", post(yards::search_yards))
        .route("/{id}", get(yards::get_yard))
}
