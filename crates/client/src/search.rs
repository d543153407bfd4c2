//! Coordinator for the listing / search page.
//!
//! Collects filter inputs and keeps exactly one of three states: loading,
//! error, or loaded (possibly empty). City text only triggers a query on
//! blur; guest and amenity selections query immediately.
//!
//! Every request is stamped with a generation number. A response is applied
//! only if no newer request has been issued since, so a slow early response
//! can never overwrite a later one.

use std::time::Duration;

use yardly_core::listing::{ListingQuery, ListingResponse};
use yardly_core::venue::Venue;

use crate::api::{YardlyApi, YardlyApiError};

/// Shown when an unfiltered listing fetch fails.
pub const FETCH_ERROR: &str = "Failed to fetch yards. Please try again later.";

/// Shown when a filtered listing fetch fails.
pub const FILTER_ERROR: &str = "Failed to filter yards. Please try again later.";

/// Shown when a query succeeds with zero rows.
pub const NO_RESULTS: &str = "No yards found. Try adjusting your search filters.";

/// Mutually exclusive listing states.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingState {
    Loading,
    Error(String),
    Loaded(Vec<Venue>),
}

/// What the page should render for the current state.
#[derive(Debug, PartialEq)]
pub enum ListingView<'a> {
    Loading,
    Error(&'a str),
    NoResults(&'static str),
    Results(&'a [Venue]),
}

/// A request that has been issued but not yet applied.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub generation: u64,
    pub query: ListingQuery,
}

pub struct SearchCoordinator {
    api: YardlyApi,
    retry_delay: Duration,
    city: String,
    selected_guests: Vec<String>,
    selected_amenities: Vec<String>,
    state: ListingState,
    latest_generation: u64,
}

impl SearchCoordinator {
    pub fn new(api: YardlyApi, retry_delay: Duration) -> Self {
        Self {
            api,
            retry_delay,
            city: String::new(),
            selected_guests: Vec::new(),
            selected_amenities: Vec::new(),
            state: ListingState::Loading,
            latest_generation: 0,
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    pub fn view(&self) -> ListingView<'_> {
        match &self.state {
            ListingState::Loading => ListingView::Loading,
            ListingState::Error(msg) => ListingView::Error(msg),
            ListingState::Loaded(yards) if yards.is_empty() => ListingView::NoResults(NO_RESULTS),
            ListingState::Loaded(yards) => ListingView::Results(yards),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// The query the current inputs describe.
    ///
    /// Only the first selected guest option is sent; amenities are joined
    /// with commas.
    pub fn current_query(&self) -> ListingQuery {
        ListingQuery {
            city: Some(self.city.clone()).filter(|c| !c.is_empty()),
            guests: self.selected_guests.first().cloned(),
            amenities: Some(self.selected_amenities.join(","))
                .filter(|_| !self.selected_amenities.is_empty()),
        }
    }

    // ---------------------------------------------------------------------
    // Page events
    // ---------------------------------------------------------------------

    /// Initial load: fetch the unfiltered listing, retrying once after the
    /// configured delay before giving up.
    pub async fn mount(&mut self) {
        let pending = self.issue(ListingQuery::default());

        let result = match self.api.list_yards(&pending.query).await {
            Ok(response) => Ok(response),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    delay_ms = self.retry_delay.as_millis() as u64,
                    "Initial listing fetch failed, retrying once",
                );
                tokio::time::sleep(self.retry_delay).await;
                self.api.list_yards(&pending.query).await
            }
        };

        self.finish(pending, result);
    }

    /// Record a city keystroke. Does not query.
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// The city field lost focus: query with the current inputs.
    pub async fn blur_city(&mut self) {
        self.refresh().await;
    }

    /// Guest selection changed: query immediately.
    pub async fn select_guests(&mut self, selected: Vec<String>) {
        self.selected_guests = selected;
        self.refresh().await;
    }

    /// Amenity selection changed: query immediately.
    pub async fn select_amenities(&mut self, selected: Vec<String>) {
        self.selected_amenities = selected;
        self.refresh().await;
    }

    /// Query with the current inputs and apply the response.
    pub async fn refresh(&mut self) {
        let pending = self.begin_request();
        let result = self.api.list_yards(&pending.query).await;
        self.finish(pending, result);
    }

    // ---------------------------------------------------------------------
    // Request lifecycle
    // ---------------------------------------------------------------------

    /// Issue a request for the current inputs and enter the loading state.
    ///
    /// Callers running the fetch themselves pass the returned value back to
    /// [`SearchCoordinator::finish`].
    pub fn begin_request(&mut self) -> PendingRequest {
        self.issue(self.current_query())
    }

    /// Apply a response. Returns `false` when a newer request has been issued
    /// since `pending`, in which case the response is dropped.
    pub fn finish(
        &mut self,
        pending: PendingRequest,
        result: Result<ListingResponse, YardlyApiError>,
    ) -> bool {
        if pending.generation != self.latest_generation {
            tracing::debug!(
                generation = pending.generation,
                latest = self.latest_generation,
                "Dropping stale listing response",
            );
            return false;
        }

        self.state = match result {
            Ok(response) => ListingState::Loaded(response.yards),
            Err(err) => {
                let message = if pending.query.is_unfiltered() {
                    FETCH_ERROR
                } else {
                    FILTER_ERROR
                };
                tracing::warn!(error = %err, "Listing fetch failed");
                ListingState::Error(message.to_string())
            }
        };
        true
    }

    fn issue(&mut self, query: ListingQuery) -> PendingRequest {
        self.latest_generation += 1;
        self.state = ListingState::Loading;
        PendingRequest {
            generation: self.latest_generation,
            query,
        }
    }
}
