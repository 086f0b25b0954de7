//! Single read of a game-state snapshot over HTTP.

use catan_board::GameState;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    Status { url: String, status: StatusCode },
}

/// Unauthenticated client for the backend's snapshot endpoint
pub struct GameClient {
    client: Client,
}

impl GameClient {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// GET `url` and decode the body as a `GameState`
    pub async fn fetch_game(&self, url: &str) -> Result<GameState, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!(%url, %status, "Snapshot response");

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.json::<GameState>().await?)
    }
}
