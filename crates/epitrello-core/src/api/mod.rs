//! REST API Layer
//!
//! `BoardApi` is the seam between the client and the backend. `HttpApi` talks
//! to the real server; tests plug in a recording fake.

mod http;
mod requests;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{
    AuthResponse, BoardDetail, BoardMember, BoardSummary, CardComment, CardDetail, CardMember, CardRecord, CardTag,
    User,
};

pub use http::HttpApi;
pub use requests::{CardPatch, NewCard, NewTag};

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// 401 or 403: the token is missing, expired or rejected
    #[error("{0}")]
    Unauthorized(String),
    /// Any other non-success status, with the server's message
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Build an error from a non-success status and its raw body.
    ///
    /// The backend answers either `{"error": "..."}` or a plain text line.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_string());
        if status == 401 || status == 403 {
            ApiError::Unauthorized(message)
        } else {
            ApiError::Status { status, message }
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Server-provided message if there is one, otherwise `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized(m) | ApiError::Status { message: m, .. } if !m.trim().is_empty() => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Backend operations used by the client
#[async_trait(?Send)]
pub trait BoardApi {
    // auth
    async fn register(&self, email: &str, password: &str) -> ApiResult<AuthResponse>;
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse>;
    async fn me(&self, token: &str) -> ApiResult<User>;

    // boards
    async fn list_boards(&self, token: &str) -> ApiResult<Vec<BoardSummary>>;
    async fn create_board(&self, token: &str, title: &str) -> ApiResult<BoardSummary>;
    async fn get_board(&self, token: &str, board_id: i64) -> ApiResult<BoardDetail>;

    // cards
    async fn create_card(&self, token: &str, list_id: i64, card: &NewCard) -> ApiResult<CardRecord>;
    async fn update_card(&self, token: &str, card_id: i64, patch: &CardPatch) -> ApiResult<CardRecord>;
    async fn get_card(&self, token: &str, card_id: i64) -> ApiResult<CardDetail>;
    async fn add_card_tag(&self, token: &str, card_id: i64, tag: &NewTag) -> ApiResult<CardTag>;
    async fn remove_card_tag(&self, token: &str, card_id: i64, tag_id: i64) -> ApiResult<()>;
    async fn list_comments(&self, token: &str, card_id: i64) -> ApiResult<Vec<CardComment>>;
    async fn add_comment(&self, token: &str, card_id: i64, content: &str) -> ApiResult<CardComment>;
    async fn add_card_member(&self, token: &str, card_id: i64, user_id: i64) -> ApiResult<CardMember>;
    async fn remove_card_member(&self, token: &str, card_id: i64, user_id: i64) -> ApiResult<()>;

    // sharing
    async fn list_members(&self, token: &str, board_id: i64) -> ApiResult<Vec<BoardMember>>;
    async fn invite_member(&self, token: &str, board_id: i64, email: &str) -> ApiResult<BoardMember>;
    async fn remove_member(&self, token: &str, board_id: i64, user_id: i64) -> ApiResult<()>;
    async fn search_users(&self, token: &str, query: &str) -> ApiResult<Vec<User>>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_json_message() {
        let err = ApiError::from_response(401, r#"{"error":"Invalid email or password"}"#);
        assert_eq!(err, ApiError::Unauthorized("Invalid email or password".to_string()));
        assert!(err.is_auth_failure());
        assert_eq!(err.message_or("Login failed"), "Invalid email or password");
    }

    #[test]
    fn test_error_body_plain_text() {
        let err = ApiError::from_response(404, "board not found\n");
        assert_eq!(err, ApiError::Status { status: 404, message: "board not found".to_string() });
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn test_forbidden_is_auth_failure() {
        assert!(ApiError::from_response(403, "access denied").is_auth_failure());
    }

    #[test]
    fn test_message_or_falls_back() {
        assert_eq!(ApiError::from_response(500, "").message_or("Failed to create card"), "Failed to create card");
        assert_eq!(ApiError::Network("offline".into()).message_or("Failed to create card"), "Failed to create card");
    }
}
