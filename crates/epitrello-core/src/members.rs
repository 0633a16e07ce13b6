//! Board Sharing
//!
//! Member search filtering and invite/remove flows for the share dialog.

use std::collections::HashSet;

use crate::api::BoardApi;
use crate::domain::{BoardMember, User};

/// Shortest query that triggers a user search
pub const MIN_SEARCH_LEN: usize = 2;

/// Trimmed query if it is long enough to search for
pub fn search_query(input: &str) -> Option<&str> {
    let query = input.trim();
    (query.chars().count() >= MIN_SEARCH_LEN).then_some(query)
}

/// Search results minus users already on the board
pub fn invite_candidates(users: Vec<User>, members: &[BoardMember]) -> Vec<User> {
    let member_ids: HashSet<i64> = members.iter().map(|m| m.user_id).collect();
    users.into_iter().filter(|u| !member_ids.contains(&u.id)).collect()
}

/// Two upper-case letters from the e-mail local part, `?` when empty
pub fn initials(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    if local.is_empty() {
        return "?".to_string();
    }
    local.chars().take(2).collect::<String>().to_uppercase()
}

/// Outcome line shown in the share dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareStatus {
    Success(String),
    Error(String),
}

pub async fn search<A: BoardApi + ?Sized>(api: &A, token: &str, input: &str, members: &[BoardMember]) -> Vec<User> {
    let Some(query) = search_query(input) else {
        return Vec::new();
    };
    match api.search_users(token, query).await {
        Ok(users) => invite_candidates(users, members),
        Err(e) => {
            log::debug!("[SHARE] user search failed: {}", e);
            Vec::new()
        }
    }
}

/// Invite by e-mail. `None` for a blank address, without calling the API.
pub async fn invite<A: BoardApi + ?Sized>(api: &A, token: &str, board_id: i64, email: &str) -> Option<ShareStatus> {
    let email = email.trim();
    if email.is_empty() {
        return None;
    }
    let status = match api.invite_member(token, board_id, email).await {
        Ok(_) => ShareStatus::Success(format!("{} has been invited!", email)),
        Err(e) => ShareStatus::Error(e.message_or("Failed to invite user")),
    };
    Some(status)
}

pub async fn remove<A: BoardApi + ?Sized>(api: &A, token: &str, board_id: i64, member: &BoardMember) -> ShareStatus {
    match api.remove_member(token, board_id, member.user_id).await {
        Ok(()) => ShareStatus::Success(format!("{} has been removed", member.email)),
        Err(e) => ShareStatus::Error(e.message_or("Failed to remove member")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{user, FakeApi};
    use crate::api::ApiError;

    fn member(user_id: i64, email: &str) -> BoardMember {
        BoardMember {
            id: user_id,
            board_id: 1,
            user_id,
            role: "member".to_string(),
            email: email.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("jane.doe@example.com"), "JA");
        assert_eq!(initials("x@example.com"), "X");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn test_short_query_skipped() {
        assert_eq!(search_query(" a "), None);
        assert_eq!(search_query(" an "), Some("an"));
    }

    #[tokio::test]
    async fn test_search_excludes_existing_members() {
        let api = FakeApi {
            users: vec![user(1, "ann@example.com"), user(2, "bob@example.com")],
            ..Default::default()
        };
        let found = search(&api, "tok", " an ", &[member(1, "ann@example.com")]).await;
        assert_eq!(found, vec![user(2, "bob@example.com")]);
        assert_eq!(api.calls(), vec!["search_users an"]);
    }

    #[tokio::test]
    async fn test_search_short_query_does_not_call() {
        let api = FakeApi::default();
        assert!(search(&api, "tok", "a", &[]).await.is_empty());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invite_and_remove_status() {
        let api = FakeApi::default();
        assert_eq!(
            invite(&api, "tok", 4, " bob@example.com ").await,
            Some(ShareStatus::Success("bob@example.com has been invited!".to_string()))
        );
        assert_eq!(
            remove(&api, "tok", 4, &member(2, "bob@example.com")).await,
            ShareStatus::Success("bob@example.com has been removed".to_string())
        );

        let api = FakeApi::failing(ApiError::from_response(409, r#"{"error":"already a member"}"#));
        assert_eq!(
            invite(&api, "tok", 4, "bob@example.com").await,
            Some(ShareStatus::Error("already a member".to_string()))
        );
    }

    #[tokio::test]
    async fn test_blank_invite_does_not_call() {
        let api = FakeApi::default();
        assert_eq!(invite(&api, "tok", 4, "   ").await, None);
        assert_eq!(invite(&api, "tok", 4, "").await, None);
        assert!(api.calls().is_empty());
    }
}
