// Configuration type definitions

use serde::Deserialize;

/// Base URL of the product search service
pub const DEFAULT_BASE_URL: &str = "https://boolean-spec-frontend.vercel.app";

/// Quiet period before a lookup is dispatched
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

pub const DEFAULT_PLACEHOLDER: &str = "Search a product...";

/// Search configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            base_url: default_base_url(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// UI configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            placeholder: default_placeholder(),
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}
