// Configuration type definitions

use serde::Deserialize;

/// Mount point of the elasticbook web service (Martini default port)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/elasticbook/suggest";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "http://localhost:3000/elasticbook/search";
pub const DEFAULT_DELAY_MS: u64 = 300;
pub const DEFAULT_MIN_LENGTH: usize = 2;
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Suggest configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestConfig {
    /// Whether the search input is suggest-enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Idle interval before querying, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Minimum characters before a fetch is triggered
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Highlight the first suggestion when the popup opens
    #[serde(default = "default_auto_focus")]
    pub auto_focus: bool,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_auto_focus() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for SuggestConfig {
    fn default() -> Self {
        SuggestConfig {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            delay_ms: default_delay_ms(),
            min_length: default_min_length(),
            auto_focus: default_auto_focus(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Search results configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Submitting a term opens its results page when set
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_search_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            enabled: default_enabled(),
            endpoint: default_search_endpoint(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub search: SearchConfig,
}
