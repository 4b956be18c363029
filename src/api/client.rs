//! HTTP client for the Sleeper roster endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::models::Dataset;

use super::{FetchError, RosterSource};

/// Sleeper endpoint serving the complete NFL player map.
const ROSTER_URL: &str = "https://api.sleeper.app/v1/players/nfl";

/// HTTP request timeout in seconds.
/// The full player map is a few megabytes; 30s tolerates slow links while
/// still failing in bounded time.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Sleeper API.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    url: String,
}

impl SleeperClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            url: ROSTER_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint (test servers, mirrors).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl RosterSource for SleeperClient {
    /// Fetch the full player map. Exactly one request per call; retry
    /// policy, if any, belongs to the caller.
    async fn fetch_players(&self) -> Result<Dataset, FetchError> {
        debug!(url = %self.url, "Fetching roster");

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::from_status(status, &body));
        }

        let players: Dataset = response.json().await?;
        debug!(count = players.len(), "Roster fetched");
        Ok(players)
    }
}
