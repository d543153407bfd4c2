//! Handlers for venue listing, search and detail.
//!
//! All endpoints are public. Listing never fails on malformed filter input:
//! unparseable values are skipped by the query engine.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use yardly_core::error::CoreError;
use yardly_core::listing::{self, ListingQuery, ListingResponse, SearchRequest};
use yardly_core::types::VenueId;
use yardly_core::venue::Venue;

use crate::error::AppResult;
use crate::state::AppState;

/// Run a query and log its outcome.
fn run_listing(state: &AppState, query: &ListingQuery) -> ListingResponse {
    let response = listing::search(&state.catalog, query);

    tracing::debug!(
        city = ?query.city,
        guests = ?query.guests,
        amenities = ?query.amenities,
        total = response.total,
        "Listing query executed",
    );

    response
}

/// GET /api/v1/yards?city=&guests=&amenities=
///
/// Filtered venue listing with an echo of the applied filters. A repeated
/// key uses its first value.
pub async fn list_yards(
    State(state): State<AppState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<ListingResponse>> {
    let Query(pairs) = params?;
    let query = ListingQuery::from_pairs(pairs);
    Ok(Json(run_listing(&state, &query)))
}

/// POST /api/v1/yards/search
///
/// Same as [`list_yards`], with the filters in a JSON body. Fields of the
/// wrong type are ignored; only a body that is not a JSON object is
/// rejected.
pub async fn search_yards(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<ListingResponse>> {
    let Json(input) = body?;
    let query = ListingQuery::from(input);
    Ok(Json(run_listing(&state, &query)))
}

/// GET /api/v1/yards/{id}
pub async fn get_yard(
    State(state): State<AppState>,
    id: Result<Path<VenueId>, PathRejection>,
) -> AppResult<Json<Venue>> {
    let Path(id) = id?;
    let venue = state
        .catalog
        .get(id)
        .cloned()
        .ok_or(CoreError::NotFound { entity: "Yard", id })?;

    Ok(Json(venue))
}
