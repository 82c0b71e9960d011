use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the sensor API lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host (+ optional path prefix), e.g. "http://localhost:3001".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection establishment timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// How overlapping loads are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadOrdering {
    /// Apply a response only if no newer load was issued after it.
    #[default]
    LatestIssued,
    /// Apply every response as it settles; the later-settling one wins.
    LastSettled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SyncConfig {
    #[serde(default)]
    pub load_ordering: LoadOrdering,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a notice stays in the footer, in seconds (default: 4).
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notice_seconds() -> u64 {
    4
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notice_seconds: default_notice_seconds(),
        }
    }
}
