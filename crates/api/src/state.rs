use std::sync::Arc;

use yardly_core::catalog::Catalog;
use yardly_core::favorites::FavoritesStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: every field is an `Arc` handle.
#[derive(Clone)]
pub struct AppState {
    /// Read-only venue catalog.
    pub catalog: Catalog,
    /// Per-user favorites.
    pub favorites: Arc<FavoritesStore>,
    /// Server configuration (CORS, timeouts, JWT).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State over the seeded catalog with an empty favorites store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            catalog: Catalog::seeded(),
            favorites: Arc::new(FavoritesStore::new()),
            config: Arc::new(config),
        }
    }
}
