//! Liveness check, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use yardly_core::catalog::Catalog;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    /// Serving, but with nothing to list.
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub venue_count: usize,
}

impl HealthResponse {
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let status = if catalog.is_empty() {
            HealthStatus::Degraded
        } else {
            HealthStatus::Ok
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            venue_count: catalog.len(),
        }
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::for_catalog(&state.catalog))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
