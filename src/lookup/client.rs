//! HTTP client for the remote dictionary API.
//!
//! Requests go to `{base}/{language}/{word}`. The base URL is configurable so
//! tests can point the client at a mock server.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use super::{Dictionary, Query};
use crate::models::{Entry, LookupOutcome, DEFAULT_NOT_FOUND_MESSAGE};

/// Public dictionary endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries";
/// Entries are always requested in English.
pub const LANGUAGE: &str = "en";

#[derive(Debug, Clone)]
pub struct DictionaryClient {
    base_url: String,
    client: Client,
}

impl DictionaryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base}/{language}/{word}`, percent-encoding the word as a single
    /// path segment.
    pub fn entry_url(&self, query: &Query) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push(LANGUAGE)
            .push(query.as_str());
        Some(url)
    }

    async fn fetch(&self, query: &Query) -> LookupOutcome {
        let Some(url) = self.entry_url(query) else {
            tracing::error!("Invalid dictionary base URL: {}", self.base_url);
            return LookupOutcome::NetworkError;
        };

        tracing::debug!("GET {}", url);
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Dictionary request failed: {}", e);
                return LookupOutcome::NetworkError;
            }
        };

        let status = response.status();
        match response.text().await {
            Ok(body) => classify_response(status, &body),
            Err(e) if status.is_success() => {
                tracing::warn!("Failed to read dictionary response: {}", e);
                LookupOutcome::NetworkError
            }
            // An unreadable error body degrades like an unparsable one.
            Err(_) => classify_response(status, ""),
        }
    }
}

impl Default for DictionaryClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl Dictionary for DictionaryClient {
    async fn lookup(&self, query: &Query) -> LookupOutcome {
        let outcome = self.fetch(query).await;
        tracing::info!("Lookup of {:?} finished: {}", query.as_str(), outcome.as_str());
        outcome
    }
}

/// Classify a received response.
///
/// - non-success status: `NotFound` with the body's non-empty string `message`,
///   or the default message when the body is missing, unparsable or lacks one
/// - success status with a JSON array: `Success` with the parsed entries
/// - success status with any other JSON value: `Success` with no entries
/// - success status with an unparsable body: `NetworkError`
pub fn classify_response(status: StatusCode, body: &str) -> LookupOutcome {
    if !status.is_success() {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|data| match data.get("message") {
                Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
                _ => None,
            })
            .unwrap_or_else(|| DEFAULT_NOT_FOUND_MESSAGE.to_string());
        return LookupOutcome::NotFound(message);
    }

    let data = match serde_json::from_str::<Value>(body) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Dictionary returned malformed JSON: {}", e);
            return LookupOutcome::NetworkError;
        }
    };

    if !data.is_array() {
        return LookupOutcome::Success(Vec::new());
    }

    match serde_json::from_value::<Vec<Entry>>(data) {
        Ok(entries) => LookupOutcome::Success(entries),
        Err(e) => {
            tracing::warn!("Dictionary entries have an unexpected shape: {}", e);
            LookupOutcome::NetworkError
        }
    }
}
