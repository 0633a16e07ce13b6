//! Member Commands
//!
//! Board sharing: member list, user search, invite and removal.

use epitrello_core::domain::{BoardMember, User};
use epitrello_core::members::{self, ShareStatus};
use epitrello_core::BoardApi;

use super::client;

pub async fn list_members(token: &str, board_id: i64) -> Result<Vec<BoardMember>, String> {
    client()
        .list_members(token, board_id)
        .await
        .map_err(|e| e.message_or("Failed to load members"))
}

pub async fn search_users(token: &str, query: &str, existing: &[BoardMember]) -> Vec<User> {
    members::search(&client(), token, query, existing).await
}

/// `None` when the address is blank and nothing was sent
pub async fn invite_member(token: &str, board_id: i64, email: &str) -> Option<ShareStatus> {
    members::invite(&client(), token, board_id, email).await
}

pub async fn remove_member(token: &str, board_id: i64, member: &BoardMember) -> ShareStatus {
    members::remove(&client(), token, board_id, member).await
}
