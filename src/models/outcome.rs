use serde::{Deserialize, Serialize};

use super::Entry;

/// Message used when an error response carries no usable `message`.
pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "No definitions found.";
/// Message shown for any transport-level failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// The classified result of one lookup submission.
///
/// `Loading` is the only non-terminal state; every submission moves from
/// `Loading` to exactly one of the other three variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum LookupOutcome {
    Loading,
    NotFound(String),
    NetworkError,
    Success(Vec<Entry>),
}

impl LookupOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::NotFound(_) => "not_found",
            Self::NetworkError => "network_error",
            Self::Success(_) => "success",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Plain-text message for the error variants.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NotFound(message) => Some(message),
            Self::NetworkError => Some(NETWORK_ERROR_MESSAGE),
            Self::Loading | Self::Success(_) => None,
        }
    }
}
