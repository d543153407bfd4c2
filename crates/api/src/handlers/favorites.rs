//! Handlers for per-user favorites. Both endpoints require authentication.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use yardly_core::favorites::{FavoritesList, ToggleFavorite, ToggleOutcome};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/favorites
///
/// The caller's favorite ids and the matching venue records.
pub async fn list_favorites(auth: AuthUser, State(state): State<AppState>) -> Json<FavoritesList> {
    Json(state.favorites.resolve(&state.catalog, auth.user_id).await)
}

/// POST /api/v1/favorites
///
/// Toggle a venue in the caller's favorites and return the updated list.
pub async fn toggle_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    body: Result<Json<ToggleFavorite>, JsonRejection>,
) -> AppResult<Json<ToggleOutcome>> {
    let Json(input) = body?;
    let outcome = state
        .favorites
        .toggle(&state.catalog, auth.user_id, input.yard_id)
        .await?;

    tracing::info!(
        user_id = auth.user_id,
        yard_id = input.yard_id,
        favorited = outcome.favorited,
        "Favorite toggled",
    );

    Ok(Json(outcome))
}
