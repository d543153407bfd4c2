pub mod favorites;
pub mod health;
pub mod yards;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /yards                 listing (GET)
/// /yards/search          listing with JSON body (POST)
/// /yards/{id}            venue detail (GET)
///
/// /favorites             list (GET), toggle (POST); auth required
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/yards", yards::router())
        .nest("/favorites", favorites::router())
}
