//! Client Configuration
//!
//! Values are fixed at build time through `EPITRELLO_*` environment variables,
//! since a browser bundle has no process environment to read at runtime.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const TOKEN_KEY: &str = "token";
pub const THEME_KEY: &str = "theme";
pub const BOARD_CACHE_KEY: &str = "trellomirror-board-columns";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API root, without trailing slash
    pub api_url: String,
    /// Storage key of the auth token
    pub token_key: String,
    pub theme_key: String,
    /// Storage key of the local board columns
    pub board_cache_key: String,
    pub log_level: LevelFilter,
    /// Delay before a member search fires
    pub search_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_key: TOKEN_KEY.to_string(),
            theme_key: THEME_KEY.to_string(),
            board_cache_key: BOARD_CACHE_KEY.to_string(),
            log_level: LevelFilter::Info,
            search_debounce_ms: 300,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `EPITRELLO_API_URL` and `EPITRELLO_LOG` captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("EPITRELLO_API_URL"), option_env!("EPITRELLO_LOG"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            config.log_level = level;
        }
        config
    }
}
