//! User Entities
//!
//! Accounts, auth responses and board membership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account returned by `/me`, `/login` and `/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of a successful `/login` or `/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Membership row of a shared board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardMember {
    pub id: i64,
    pub board_id: i64,
    pub user_id: i64,
    pub role: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl BoardMember {
    pub fn is_owner(&self) -> bool {
        self.role == "owner"
    }
}
