//! Trello card description writer.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::{AppError, TrelloConfig};
use crate::ports::CardBoard;

const TIMEOUT_SECS: u64 = 30;

/// Posts the report into the description of a single Trello card.
pub struct HttpTrelloBoard {
    key: String,
    token: String,
    card_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpTrelloBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTrelloBoard")
            .field("card_url", &self.card_url)
            .field("key", &"[REDACTED]")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpTrelloBoard {
    pub fn new(config: &TrelloConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let mut card_url = config.api_url.clone();
        card_url
            .path_segments_mut()
            .map_err(|_| {
                AppError::InvalidConfig(format!("trello.api_url cannot be a base: {}", config.api_url))
            })?
            .pop_if_empty()
            .extend(["cards", config.card_id.as_str()]);

        Ok(Self { key: config.key.clone(), token: config.token.clone(), card_url, client })
    }
}

impl CardBoard for HttpTrelloBoard {
    fn post_description(&self, text: &str) -> Result<(), AppError> {
        let mut url = self.card_url.clone();
        url.query_pairs_mut()
            .append_pair("desc", text)
            .append_pair("key", &self.key)
            .append_pair("token", &self.token);
        log::debug!("PUT {}", url.path());

        let response = self
            .client
            .put(url)
            .send()
            .map_err(|e| AppError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().unwrap_or_default();
        Err(AppError::Api { status: status.as_u16(), message: body.trim().to_string() })
    }
}
