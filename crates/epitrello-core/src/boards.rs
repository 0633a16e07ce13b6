//! Board List
//!
//! Listing, creating and opening remote boards.

use crate::api::BoardApi;
use crate::domain::{Board, BoardSummary};

/// Title used when a board is created with an empty name
pub const DEFAULT_BOARD_TITLE: &str = "My Board";

pub fn board_title(input: &str) -> &str {
    match input.trim() {
        "" => DEFAULT_BOARD_TITLE,
        title => title,
    }
}

pub async fn list_boards<A: BoardApi + ?Sized>(api: &A, token: &str) -> Result<Vec<BoardSummary>, String> {
    api.list_boards(token).await.map_err(|e| e.message_or("Failed to load boards"))
}

pub async fn create_board<A: BoardApi + ?Sized>(api: &A, token: &str, input: &str) -> Result<BoardSummary, String> {
    let title = board_title(input);
    let board = api
        .create_board(token, title)
        .await
        .map_err(|e| e.message_or("Failed to create board"))?;
    log::info!("[BOARDS] created board {} '{}'", board.id, board.title);
    Ok(board)
}

/// Fetch a board with its lists and cards, ordered by position
pub async fn open_board<A: BoardApi + ?Sized>(api: &A, token: &str, board_id: i64) -> Result<Board, String> {
    let detail = api
        .get_board(token, board_id)
        .await
        .map_err(|e| e.message_or("Failed to load board"))?;
    let board = Board::from(detail);
    log::debug!("[BOARDS] opened board {} with {} columns", board_id, board.columns.len());
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeApi;
    use crate::api::ApiError;

    #[test]
    fn test_board_title_default() {
        assert_eq!(board_title("   "), "My Board");
        assert_eq!(board_title(" Roadmap "), "Roadmap");
    }

    #[tokio::test]
    async fn test_create_board_uses_default_title() {
        let api = FakeApi::default();
        let board = create_board(&api, "tok", "").await.unwrap();
        assert_eq!(board.title, "My Board");
        assert_eq!(api.calls(), vec!["create_board My Board"]);
    }

    #[tokio::test]
    async fn test_open_board_error_message() {
        let api = FakeApi::failing(ApiError::from_response(404, r#"{"error":"board not found"}"#));
        assert_eq!(open_board(&api, "tok", 9).await.unwrap_err(), "board not found");

        let api = FakeApi::failing(ApiError::Network("offline".into()));
        assert_eq!(list_boards(&api, "tok").await.unwrap_err(), "Failed to load boards");
    }

    #[tokio::test]
    async fn test_open_board_keeps_id_and_title() {
        let api = FakeApi::default();
        let board = open_board(&api, "tok", 3).await.unwrap();
        assert_eq!(board.id, Some(3));
        assert_eq!(board.title, "Board");
        assert!(board.columns.is_empty());
    }
}
