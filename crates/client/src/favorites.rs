//! Favorites coordination for the listing page and the saved-yards page.
//!
//! Favorites belong to a signed-in session. Anonymous users who try to
//! favorite a venue are sent to the sign-in flow instead of hitting the API.

use futures::future::try_join_all;
use yardly_core::types::VenueId;
use yardly_core::venue::Venue;

use crate::api::YardlyApi;

/// Where anonymous users are sent when an action needs a session.
pub const SIGN_IN_PATH: &str = "/auth/signin";

/// Shown when the saved page cannot resolve the user's favorites.
pub const SAVED_ERROR: &str = "Failed to load saved yards";

/// Authentication state as reported by the session provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// The provider has not resolved the session yet.
    Loading,
    Anonymous,
    Authenticated { token: String },
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token } => Some(token),
            _ => None,
        }
    }
}

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleAction {
    /// No session: navigate to [`SIGN_IN_PATH`]. No request was made.
    RedirectToSignIn(&'static str),
    /// The API accepted the toggle.
    Updated { favorited: bool },
    /// The request failed; favorites are unchanged.
    Failed,
}

/// Tracks the favorite ids shown as hearts on the listing page.
pub struct FavoritesCoordinator {
    api: YardlyApi,
    session: Session,
    favorites: Vec<VenueId>,
    loading: bool,
}

impl FavoritesCoordinator {
    pub fn new(api: YardlyApi) -> Self {
        Self {
            api,
            session: Session::Loading,
            favorites: Vec::new(),
            loading: true,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn favorites(&self) -> &[VenueId] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: VenueId) -> bool {
        self.favorites.contains(&id)
    }

    /// Whether the favorites list is still being loaded.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mount or session change. Loads favorites for authenticated sessions;
    /// otherwise clears them.
    ///
    /// Load failures are logged and leave the previous list in place.
    pub async fn set_session(&mut self, session: Session) {
        self.session = session;

        let Some(token) = self.session.token() else {
            self.favorites.clear();
            self.loading = false;
            return;
        };

        self.loading = true;
        match self.api.list_favorites(token).await {
            Ok(list) => self.favorites = list.favorites,
            Err(err) => tracing::warn!(error = %err, "Failed to load favorites"),
        }
        self.loading = false;
    }

    /// Toggle a venue's favorite status.
    pub async fn toggle(&mut self, yard_id: VenueId) -> ToggleAction {
        let Some(token) = self.session.token() else {
            return ToggleAction::RedirectToSignIn(SIGN_IN_PATH);
        };

        match self.api.toggle_favorite(token, yard_id).await {
            Ok(outcome) => {
                self.favorites = outcome.favorites;
                ToggleAction::Updated {
                    favorited: outcome.favorited,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, yard_id, "Failed to toggle favorite");
                ToggleAction::Failed
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Saved page
// ---------------------------------------------------------------------------

/// What the saved-yards page should render.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedView {
    Loading,
    /// No session: show a sign-in prompt linking to [`SIGN_IN_PATH`].
    SignInRequired,
    Error(String),
    Empty,
    Loaded(Vec<Venue>),
}

/// Resolve the session's favorites into full venue records.
///
/// Fetches the id list, then one detail record per id. An empty list skips
/// the detail calls. Any failure is terminal for this load.
pub async fn load_saved(api: &YardlyApi, session: &Session) -> SavedView {
    let token = match session {
        Session::Loading => return SavedView::Loading,
        Session::Anonymous => return SavedView::SignInRequired,
        Session::Authenticated { token } => token,
    };

    let ids = match api.list_favorites(token).await {
        Ok(list) => list.favorites,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch favorites");
            return SavedView::Error(SAVED_ERROR.to_string());
        }
    };

    if ids.is_empty() {
        return SavedView::Empty;
    }

    match try_join_all(ids.iter().map(|id| api.get_yard(*id))).await {
        Ok(yards) => SavedView::Loaded(yards),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch saved yard details");
            SavedView::Error(SAVED_ERROR.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_only_for_authenticated_sessions() {
        assert_eq!(Session::Loading.token(), None);
        assert_eq!(Session::Anonymous.token(), None);
        assert_eq!(
            Session::Authenticated {
                token: "abc".into()
            }
            .token(),
            Some("abc")
        );
    }

    #[tokio::test]
    async fn anonymous_toggle_redirects_without_request() {
        // Unroutable address: any request would fail rather than redirect.
        let mut c = FavoritesCoordinator::new(YardlyApi::new("http://127.0.0.1:9"));
        c.set_session(Session::Anonymous).await;

        assert!(!c.is_loading());
        assert_eq!(
            c.toggle(1).await,
            ToggleAction::RedirectToSignIn(SIGN_IN_PATH)
        );
    }

    #[tokio::test]
    async fn saved_page_short_circuits_without_session() {
        let api = YardlyApi::new("http://127.0.0.1:9");
        assert_eq!(load_saved(&api, &Session::Loading).await, SavedView::Loading);
        assert_eq!(
            load_saved(&api, &Session::Anonymous).await,
            SavedView::SignInRequired
        );
    }
}
