//! REST client for the Yardly API.
//!
//! Wraps the listing, detail and favorites endpoints using [`reqwest`].

use serde::de::DeserializeOwned;
use yardly_core::favorites::{FavoritesList, ToggleFavorite, ToggleOutcome};
use yardly_core::listing::{ListingQuery, ListingResponse};
use yardly_core::types::VenueId;
use yardly_core::venue::Venue;

use crate::config::ClientConfig;

/// HTTP client for a Yardly API server. Cheap to clone.
#[derive(Debug, Clone)]
pub struct YardlyApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the Yardly REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum YardlyApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("Yardly API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl YardlyApiError {
    /// Whether the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, YardlyApiError::ApiError { status: 404, .. })
    }
}

impl YardlyApi {
    /// Create a client for the API at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/v1/yards` with the given filters as query parameters.
    pub async fn list_yards(&self, query: &ListingQuery) -> Result<ListingResponse, YardlyApiError> {
        let response = self
            .client
            .get(self.url("/api/v1/yards"))
            .query(query)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /api/v1/yards/{id}`.
    pub async fn get_yard(&self, id: VenueId) -> Result<Venue, YardlyApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/v1/yards/{id}")))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `GET /api/v1/favorites` for the bearer of `token`.
    pub async fn list_favorites(&self, token: &str) -> Result<FavoritesList, YardlyApiError> {
        let response = self
            .client
            .get(self.url("/api/v1/favorites"))
            .bearer_auth(token)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// `POST /api/v1/favorites`, toggling `yard_id` for the bearer of `token`.
    pub async fn toggle_favorite(
        &self,
        token: &str,
        yard_id: VenueId,
    ) -> Result<ToggleOutcome, YardlyApiError> {
        let response = self
            .client
            .post(self.url("/api/v1/favorites"))
            .bearer_auth(token)
            .json(&ToggleFavorite { yard_id })
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ensure the response has a success status code, or return a
    /// [`YardlyApiError::ApiError`] with the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, YardlyApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(YardlyApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, YardlyApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = YardlyApi::new("http://localhost:3000/");
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.url("/api/v1/yards"), "http://localhost:3000/api/v1/yards");
    }

    #[test]
    fn not_found_detection() {
        let err = YardlyApiError::ApiError {
            status: 404,
            body: String::new(),
        };
        assert!(err.is_not_found());

        let err = YardlyApiError::ApiError {
            status: 500,
            body: String::new(),
        };
        assert!(!err.is_not_found());
    }
}
