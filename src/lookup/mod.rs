//! Query normalization and the remote dictionary lookup.

mod client;

use std::fmt;

use async_trait::async_trait;

use crate::models::LookupOutcome;

pub use client::{classify_response, DictionaryClient, DEFAULT_BASE_URL, LANGUAGE};

/// A trimmed, non-empty word ready to be looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Normalize raw input. Returns `None` for empty or whitespace-only text.
    pub fn parse(raw: &str) -> Option<Self> {
        let word = raw.trim();
        if word.is_empty() {
            None
        } else {
            Some(Self(word.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that can resolve a query into an outcome.
///
/// Implementations never fail: every error is folded into the outcome.
#[async_trait]
pub trait Dictionary: Send + Sync {
    async fn lookup(&self, query: &Query) -> LookupOutcome;
}
