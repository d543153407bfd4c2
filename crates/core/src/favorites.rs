//! Per-user favorite venues.
//!
//! Favorites are held in memory for the lifetime of the process. Each user's
//! set keeps insertion order so the saved page lists venues in the order they
//! were favorited.

use std::collections::HashMap;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::types::{UserId, VenueId};
use crate::venue::Venue;

/// Body of a favorite toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavorite {
    pub yard_id: VenueId,
}

/// A user's favorites: the id list plus the resolved venue records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritesList {
    pub favorites: Vec<VenueId>,
    pub yards: Vec<Venue>,
}

/// Result of toggling a venue's favorite status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOutcome {
    /// Whether the venue is a favorite after the toggle.
    pub favorited: bool,
    /// The user's full favorite list after the toggle.
    pub favorites: Vec<VenueId>,
}

/// Thread-safe favorites registry, designed to be wrapped in `Arc`.
#[derive(Default)]
pub struct FavoritesStore {
    entries: RwLock<HashMap<UserId, IndexSet<VenueId>>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user's favorite venue ids, oldest first.
    pub async fn list(&self, user_id: UserId) -> Vec<VenueId> {
        self.entries
            .read()
            .await
            .get(&user_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// The user's favorites resolved against `catalog`.
    ///
    /// Ids no longer present in the catalog are skipped in `yards` but kept
    /// in `favorites`.
    pub async fn resolve(&self, catalog: &Catalog, user_id: UserId) -> FavoritesList {
        let favorites = self.list(user_id).await;
        let yards = favorites
            .iter()
            .filter_map(|id| catalog.get(*id).cloned())
            .collect();
        FavoritesList { favorites, yards }
    }

    /// Add the venue to the user's favorites, or remove it if already present.
    ///
    /// Fails with [`CoreError::Validation`] for non-positive ids and
    /// [`CoreError::NotFound`] when the venue is not in `catalog`.
    pub async fn toggle(
        &self,
        catalog: &Catalog,
        user_id: UserId,
        venue_id: VenueId,
    ) -> Result<ToggleOutcome, CoreError> {
        if venue_id <= 0 {
            return Err(CoreError::Validation(format!(
                "yardId must be a positive integer, got {venue_id}"
            )));
        }
        if !catalog.contains(venue_id) {
            return Err(CoreError::NotFound {
                entity: "Yard",
                id: venue_id,
            });
        }

        let mut entries = self.entries.write().await;
        let set = entries.entry(user_id).or_default();

        let favorited = if set.shift_remove(&venue_id) {
            false
        } else {
            set.insert(venue_id);
            true
        };

        Ok(ToggleOutcome {
            favorited,
            favorites: set.iter().copied().collect(),
        })
    }
}
