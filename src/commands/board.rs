//! Board Commands
//!
//! Board list, board detail and drag-and-drop persistence.

use epitrello_core::boards;
use epitrello_core::domain::{Board, BoardSummary};
use epitrello_core::reorder::{self, CardPlacement};

use super::client;

pub async fn list_boards(token: &str) -> Result<Vec<BoardSummary>, String> {
    boards::list_boards(&client(), token).await
}

pub async fn create_board(token: &str, title: &str) -> Result<BoardSummary, String> {
    boards::create_board(&client(), token, title).await
}

pub async fn open_board(token: &str, board_id: i64) -> Result<Board, String> {
    boards::open_board(&client(), token, board_id).await
}

/// Fire-and-forget: failures end up in the log only
pub async fn persist_card_move(token: Option<String>, placement: CardPlacement) {
    reorder::persist_card_move(&client(), token.as_deref(), &placement).await;
}
