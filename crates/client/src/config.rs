use std::time::Duration;

/// Default delay before the single retry of the initial listing fetch.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 2000;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Yardly API, without trailing slash.
    pub base_url: String,
    /// Delay before retrying a failed initial listing fetch.
    pub retry_delay: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `YARDLY_API_URL`        | `http://localhost:3000` |
    /// | `YARDLY_RETRY_DELAY_MS` | `2000`                  |
    pub fn from_env() -> Self {
        let base_url = std::env::var("YARDLY_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let retry_delay_ms: u64 = std::env::var("YARDLY_RETRY_DELAY_MS")
            .unwrap_or_else(|_| DEFAULT_RETRY_DELAY_MS.to_string())
            .parse()
            .expect("YARDLY_RETRY_DELAY_MS must be a valid u64");

        Self {
            base_url,
            retry_delay: Duration::from_millis(retry_delay_ms),
        }
    }
}
