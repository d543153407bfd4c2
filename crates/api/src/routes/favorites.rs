//! Route definitions for favorites.
//!
//! Mounted at `/favorites` in the API route tree.

use axum::routing::get;
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Favorites routes mounted at `/favorites`.
///
/// ```text
/// GET    /             -> list_favorites
/// POST   /             -> toggle_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(favorites::list_favorites).post(favorites::toggle_favorite),
    )
}
