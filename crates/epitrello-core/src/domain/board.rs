//! Board and Column Entities
//!
//! Ordering is positional: the index in `columns` / `cards` is the display order.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::card::{Card, CardRecord};

/// Board with its ordered columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Backing-store identifier, `None` for a local template board
    pub id: Option<i64>,
    pub title: String,
    pub columns: Vec<Column>,
}

/// Ordered, named grouping of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Filled by `fill_missing_ids` when a stored entry lacks one
    #[serde(default)]
    pub id: String,
    /// Backing-store list identifier
    #[serde(default)]
    pub list_id: Option<i64>,
    pub title: String,
    pub accent: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            list_id: None,
            title: title.into(),
            accent: accent.into(),
            cards: Vec::new(),
        }
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }
}

/// Lowercase words of `title` joined by dashes
pub fn slug(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn claim_id(taken: &mut HashSet<String>, prefix: &str, title: &str, index: usize) -> String {
    let base = match slug(title) {
        s if s.is_empty() => format!("{}-{}", prefix, index),
        s => format!("{}-{}", prefix, s),
    };
    let mut id = base.clone();
    let mut n = 2;
    while taken.contains(&id) {
        id = format!("{}-{}", base, n);
        n += 1;
    }
    taken.insert(id.clone());
    id
}

/// Gives every column and card with a blank or repeated id a new one derived
/// from its title. Column ids end up unique among columns, card ids among cards.
pub fn fill_missing_ids(columns: &mut [Column]) {
    let mut column_ids = HashSet::new();
    let mut card_ids = HashSet::new();
    for (index, column) in columns.iter_mut().enumerate() {
        if column.id.is_empty() || column_ids.contains(&column.id) {
            column.id = claim_id(&mut column_ids, "column", &column.title, index);
        } else {
            column_ids.insert(column.id.clone());
        }
        for (card_index, card) in column.cards.iter_mut().enumerate() {
            if card.id.is_empty() || card_ids.contains(&card.id) {
                card.id = claim_id(&mut card_ids, "card", &card.title, card_index);
            } else {
                card_ids.insert(card.id.clone());
            }
        }
    }
}

/// Row of `GET /boards`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// `GET /boards/:id` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardDetail {
    #[serde(flatten)]
    pub board: BoardSummary,
    #[serde(default)]
    pub lists: Vec<ListDetail>,
}

/// List inside a board detail, with its cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListDetail {
    pub id: i64,
    pub board_id: i64,
    pub title: String,
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub cards: Vec<CardRecord>,
}

impl From<ListDetail> for Column {
    fn from(list: ListDetail) -> Self {
        let mut records = list.cards;
        records.sort_by_key(|c| (c.position, c.id));
        Self {
            id: format!("list-{}", list.id),
            list_id: Some(list.id),
            title: list.title,
            accent: list.accent,
            cards: records.into_iter().map(Card::from).collect(),
        }
    }
}

impl From<BoardDetail> for Board {
    fn from(detail: BoardDetail) -> Self {
        let mut lists = detail.lists;
        lists.sort_by_key(|l| (l.position, l.id));
        Self {
            id: Some(detail.board.id),
            title: detail.board.title,
            columns: lists.into_iter().map(Column::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_detail_orders_lists_and_cards_by_position() {
        let json = r#"{
            "id": 7, "user_id": 1, "title": "Sprint", "created_at": "2024-05-01T10:00:00Z",
            "lists": [
                {"id": 11, "board_id": 7, "title": "Done", "accent": "success", "position": 1, "cards": []},
                {"id": 10, "board_id": 7, "title": "Ideas", "accent": "accent", "position": 0, "cards": [
                    {"id": 3, "list_id": 10, "title": "second", "badge": "Ideas", "color": "accent", "position": 1, "tags": []},
                    {"id": 2, "list_id": 10, "title": "first", "badge": "Ideas", "color": "accent", "position": 0, "tags": []}
                ]}
            ]
        }"#;
        let detail: BoardDetail = serde_json::from_str(json).unwrap();
        let board = Board::from(detail);

        assert_eq!(board.id, Some(7));
        assert_eq!(board.columns.len(), 2);
        assert_eq!(board.columns[0].id, "list-10");
        assert_eq!(board.columns[0].list_id, Some(10));
        assert_eq!(board.columns[1].title, "Done");
        let titles: Vec<_> = board.columns[0].cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_fill_missing_ids_from_titles() {
        let mut columns = vec![
            Column::new("", "To do", "accent").with_cards(vec![Card::new("", "Write", "To do", "accent")]),
            Column::new("", "To do", "accent"),
            Column::new("done", "Done", "success"),
            Column::new("", "!!", "danger"),
        ];
        fill_missing_ids(&mut columns);

        let ids: Vec<_> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["column-to-do", "column-to-do-2", "done", "column-3"]);
        assert_eq!(columns[0].cards[0].id, "card-write");
    }

    #[test]
    fn test_repeated_ids_are_replaced() {
        let mut columns = vec![
            Column::new("a", "Ideas", "accent").with_cards(vec![Card::new("x", "One", "Ideas", "accent")]),
            Column::new("a", "Later", "accent").with_cards(vec![Card::new("x", "Two", "Later", "accent")]),
        ];
        fill_missing_ids(&mut columns);
        assert_eq!(columns[0].id, "a");
        assert_eq!(columns[1].id, "column-later");
        assert_eq!(columns[0].cards[0].id, "x");
        assert_eq!(columns[1].cards[0].id, "card-two");
    }

    #[test]
    fn test_board_detail_without_lists() {
        let detail: BoardDetail = serde_json::from_str(r#"{"id":1,"user_id":1,"title":"Empty"}"#).unwrap();
        let board = Board::from(detail);
        assert!(board.columns.is_empty());
    }
}
