//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use epitrello_core::composer::{append_card, replace_card};
use epitrello_core::domain::{Board, BoardMember, BoardSummary, Card, Column};

use crate::storage::local_board_cache;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Boards of the signed-in user
    pub boards: Vec<BoardSummary>,
    /// Open board, `None` while the local board is shown
    pub board_id: Option<i64>,
    pub board_title: String,
    /// Columns of the open board, in display order
    pub columns: Vec<Column>,
    /// Members of the open remote board
    pub members: Vec<BoardMember>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_board(store: &AppStore, board: BoardSummary) {
    store.boards().write().push(board);
}

/// Show a board fetched from the server
pub fn store_open_board(store: &AppStore, board: Board) {
    store.board_id().set(board.id);
    store.board_title().set(board.title);
    store.columns().set(board.columns);
    store.members().set(Vec::new());
}

/// Show the local board from its cache
pub fn store_open_local(store: &AppStore) {
    store.board_id().set(None);
    store.board_title().set("Local board".to_string());
    store.columns().set(local_board_cache().load());
    store.members().set(Vec::new());
}

/// Replace the arrangement; the local board is written back to its cache
pub fn store_set_columns(store: &AppStore, columns: Vec<Column>) {
    if store.board_id().get_untracked().is_none() {
        local_board_cache().save(&columns);
    }
    store.columns().set(columns);
}

pub fn store_append_card(store: &AppStore, column_id: &str, card: Card) {
    let next = append_card(&store.columns().get_untracked(), column_id, card);
    store_set_columns(store, next);
}

pub fn store_replace_card(store: &AppStore, card: &Card) {
    let next = replace_card(&store.columns().get_untracked(), card);
    store_set_columns(store, next);
}
