//! Epitrello Core
//!
//! Platform-neutral half of the kanban client:
//! - domain: boards, columns, cards and API wire shapes
//! - reorder: drag-and-drop arrangement and fire-and-forget persistence
//! - composer: card creation/editing rules
//! - session: auth token, JWT display claims, theme
//! - api: `BoardApi` seam and the reqwest-backed `HttpApi`
//! - boards, members, templates, cache: board list, sharing and local boards

pub mod api;
pub mod boards;
pub mod cache;
pub mod composer;
pub mod config;
pub mod domain;
pub mod markdown;
pub mod members;
pub mod reorder;
pub mod session;
pub mod templates;

pub use api::{ApiError, ApiResult, BoardApi, HttpApi};
pub use config::AppConfig;
pub use domain::{Board, Card, Column};
