//! API Command Wrappers
//!
//! Frontend bindings to the board API, organized by domain. Each wrapper
//! builds the HTTP client from config and reports failures as display strings.

mod auth;
mod board;
mod card;
mod members;

use epitrello_core::{AppConfig, HttpApi};

/// Build-time configuration
pub fn config() -> AppConfig {
    AppConfig::from_env()
}

pub fn client() -> HttpApi {
    HttpApi::from_config(&config())
}

// Re-export all public items
pub use auth::*;
pub use board::*;
pub use card::*;
pub use members::*;
