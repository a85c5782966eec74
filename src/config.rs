//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use crate::lookup::DEFAULT_BASE_URL;

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Dictionary endpoint base (from DICTIONARY_API_URL)
    pub dictionary_url: String,
    /// Directory to serve the page from instead of the built-in assets
    /// (from WORDLOOKUP_STATIC_DIR)
    pub static_dir: Option<PathBuf>,
    /// Interface the server binds to (from WORDLOOKUP_HOST)
    pub host: String,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dictionary_url: std::env::var("DICTIONARY_API_URL")
                .unwrap_or(defaults.dictionary_url),
            static_dir: std::env::var_os("WORDLOOKUP_STATIC_DIR").map(PathBuf::from),
            host: std::env::var("WORDLOOKUP_HOST").unwrap_or(defaults.host),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_url: DEFAULT_BASE_URL.to_string(),
            static_dir: None,
            host: "127.0.0.1".to_string(),
        }
    }
}
