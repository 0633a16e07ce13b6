//! Board Reorder Engine
//!
//! Computes new column/card arrangements from drag-end events. Every operation
//! returns a fresh `Vec<Column>` and leaves its input untouched.
//!
//! Card moves are persisted with `persist_card_move`, fire-and-forget: a failed
//! call is logged and the local arrangement stays as it is.

use crate::api::{BoardApi, CardPatch};
use crate::domain::Column;

/// Container id used for column drags (columns live directly on the board)
pub const BOARD_CONTAINER: &str = "board";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Column,
    Card,
}

/// Position inside a container: the board for columns, a column for cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub container_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(container_id: impl Into<String>, index: usize) -> Self {
        Self { container_id: container_id.into(), index }
    }
}

/// What the drag layer reports when the pointer is released
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub kind: DragKind,
    pub source: DragLocation,
    /// `None` when the item was dropped outside any target
    pub destination: Option<DragLocation>,
}

/// Where a moved card ended up, in the shape the backend stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPlacement {
    pub card_id: Option<i64>,
    pub title: String,
    pub badge: String,
    pub color: String,
    pub list_id: Option<i64>,
    pub position: usize,
}

impl CardPlacement {
    fn at(column: &Column, position: usize) -> Option<Self> {
        let card = column.cards.get(position)?;
        Some(Self {
            card_id: card.card_id,
            title: card.title.clone(),
            badge: card.badge.clone(),
            color: card.color.clone(),
            list_id: column.list_id,
            position,
        })
    }

    pub fn to_patch(&self) -> CardPatch {
        CardPatch {
            title: Some(self.title.clone()),
            badge: Some(self.badge.clone()),
            color: Some(self.color.clone()),
            list_id: self.list_id,
            position: Some(self.position),
            ..Default::default()
        }
    }
}

/// Result of an applied drag
#[derive(Debug, Clone, PartialEq)]
pub struct Reorder {
    pub columns: Vec<Column>,
    /// Set for card moves, to be persisted
    pub placement: Option<CardPlacement>,
}

/// Move the column at `from` to `to`. The column count never changes.
///
/// Equal indices or an out-of-range `from` return an unchanged copy; a `to`
/// past the end means the last slot.
pub fn reorder_columns(columns: &[Column], from: usize, to: usize) -> Vec<Column> {
    let mut next = columns.to_vec();
    if from == to || from >= next.len() {
        return next;
    }
    let to = to.min(next.len() - 1);
    let column = next.remove(from);
    next.insert(to, column);
    next
}

/// Move a card between or within columns.
///
/// Within a column the card list is reordered. Across columns the card is
/// inserted at `dest_index` (clamped to the destination length) and takes the
/// destination's title as badge and its accent as color.
pub fn move_card(
    columns: &[Column],
    source_col: usize,
    dest_col: usize,
    source_index: usize,
    dest_index: usize,
) -> Vec<Column> {
    let mut next = columns.to_vec();
    if source_col >= next.len() || dest_col >= next.len() || source_index >= next[source_col].cards.len() {
        log::warn!(
            "[REORDER] ignoring card move from {}:{} to {}:{}, out of range",
            source_col, source_index, dest_col, dest_index
        );
        return next;
    }

    if source_col == dest_col {
        let cards = &mut next[source_col].cards;
        let dest_index = dest_index.min(cards.len() - 1);
        if source_index != dest_index {
            let card = cards.remove(source_index);
            cards.insert(dest_index, card);
        }
        return next;
    }

    let mut card = next[source_col].cards.remove(source_index);
    let dest = &mut next[dest_col];
    card.retag(&dest.title, &dest.accent);
    let dest_index = dest_index.min(dest.cards.len());
    dest.cards.insert(dest_index, card);
    next
}

fn column_index(columns: &[Column], container_id: &str) -> Option<usize> {
    columns.iter().position(|c| c.id == container_id)
}

/// Apply a drag-end event.
///
/// Returns `None` when the event changes nothing: no destination, a drop back
/// onto the starting slot, or an unknown container.
pub fn apply_drag_end(columns: &[Column], event: &DragEnd) -> Option<Reorder> {
    let destination = event.destination.as_ref()?;
    let source = &event.source;

    match event.kind {
        DragKind::Column => {
            if source.index >= columns.len() {
                return None;
            }
            let to = destination.index.min(columns.len() - 1);
            if source.index == to {
                return None;
            }
            Some(Reorder { columns: reorder_columns(columns, source.index, to), placement: None })
        }
        DragKind::Card => {
            let source_col = column_index(columns, &source.container_id)?;
            let dest_col = column_index(columns, &destination.container_id)?;
            let source_len = columns[source_col].cards.len();
            if source.index >= source_len {
                return None;
            }

            let position = if source_col == dest_col {
                destination.index.min(source_len - 1)
            } else {
                destination.index.min(columns[dest_col].cards.len())
            };
            if source_col == dest_col && position == source.index {
                return None;
            }

            let next = move_card(columns, source_col, dest_col, source.index, position);
            let placement = CardPlacement::at(&next[dest_col], position);
            Some(Reorder { columns: next, placement })
        }
    }
}

/// Persist a card move. Failures are logged and swallowed.
///
/// Skipped when the card or its column has no backing-store id (local boards)
/// or when there is no token.
pub async fn persist_card_move<A: BoardApi + ?Sized>(api: &A, token: Option<&str>, placement: &CardPlacement) {
    let (Some(card_id), Some(_)) = (placement.card_id, placement.list_id) else {
        log::debug!("[REORDER] '{}' is not backed by the server, move kept local", placement.title);
        return;
    };
    let Some(token) = token else {
        log::debug!("[REORDER] no session, move of card {} kept local", card_id);
        return;
    };

    match api.update_card(token, card_id, &placement.to_patch()).await {
        Ok(_) => log::debug!("[REORDER] card {} saved at position {}", card_id, placement.position),
        Err(e) => log::warn!("[REORDER] failed to persist move of card {}: {}", card_id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeApi;
    use crate::api::ApiError;
    use crate::domain::Card;

    fn card(id: &str) -> Card {
        Card::new(id, format!("Card {}", id), "Old", "inbox")
    }

    fn column(id: &str, title: &str, accent: &str, cards: &[&str]) -> Column {
        Column::new(id, title, accent).with_cards(cards.iter().map(|id| card(id)).collect())
    }

    fn ids(column: &Column) -> Vec<&str> {
        column.cards.iter().map(|c| c.id.as_str()).collect()
    }

    fn card_drag(from: (&str, usize), to: Option<(&str, usize)>) -> DragEnd {
        DragEnd {
            kind: DragKind::Card,
            source: DragLocation::new(from.0, from.1),
            destination: to.map(|(c, i)| DragLocation::new(c, i)),
        }
    }

    fn saved_board() -> Vec<Column> {
        let mut todo = column("list-1", "To do", "accent", &["a", "b"]);
        todo.list_id = Some(1);
        todo.cards[0].card_id = Some(10);
        todo.cards[1].card_id = Some(11);
        let mut done = column("list-2", "Done", "success", &[]);
        done.list_id = Some(2);
        vec![todo, done]
    }

    #[test]
    fn test_reorder_columns_same_index_unchanged() {
        let columns = vec![column("c1", "A", "accent", &["a"]), column("c2", "B", "primary", &[])];
        assert_eq!(reorder_columns(&columns, 1, 1), columns);
    }

    #[test]
    fn test_reorder_columns_moves_and_keeps_count() {
        let columns = vec![
            column("c1", "A", "accent", &[]),
            column("c2", "B", "primary", &[]),
            column("c3", "C", "warning", &[]),
        ];
        let next = reorder_columns(&columns, 0, 2);
        let order: Vec<_> = next.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, vec!["c2", "c3", "c1"]);

        let next = reorder_columns(&columns, 2, 10);
        assert_eq!(next.len(), 3);
        assert_eq!(next[2].id, "c3");
        assert_eq!(reorder_columns(&columns, 5, 0), columns);
    }

    #[test]
    fn test_move_card_across_columns_retags() {
        let columns = vec![
            column("a", "Ideas", "accent", &["x", "y", "z"]),
            column("b", "Review", "warning", &["w"]),
        ];
        let next = move_card(&columns, 0, 1, 0, 2);

        assert_eq!(ids(&next[0]), vec!["y", "z"]);
        assert_eq!(ids(&next[1]), vec!["w", "x"]);
        let moved = &next[1].cards[1];
        assert_eq!(moved.badge, "Review");
        assert_eq!(moved.color, "warning");
        // untouched cards keep their labels
        assert_eq!(next[1].cards[0].badge, "Old");
        // input left alone
        assert_eq!(ids(&columns[0]), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_move_card_into_empty_column() {
        let columns = vec![column("c1", "Todo", "accent", &["a", "b"]), column("c2", "Done", "success", &[])];
        let next = move_card(&columns, 0, 1, 0, 0);

        assert_eq!(ids(&next[0]), vec!["b"]);
        assert_eq!(ids(&next[1]), vec!["a"]);
        assert_eq!(next[1].cards[0].badge, "Done");
        assert_eq!(next[1].cards[0].color, "success");
    }

    #[test]
    fn test_move_last_card_leaves_empty_column() {
        let columns = vec![column("c1", "Todo", "accent", &["a"]), column("c2", "Done", "success", &["b"])];
        let next = move_card(&columns, 0, 1, 0, 0);
        assert!(next[0].cards.is_empty());
        assert_eq!(ids(&next[1]), vec!["a", "b"]);
    }

    #[test]
    fn test_move_card_within_column_keeps_labels() {
        let columns = vec![column("c1", "Todo", "accent", &["a", "b", "c"])];
        let next = move_card(&columns, 0, 0, 0, 2);
        assert_eq!(ids(&next[0]), vec!["b", "c", "a"]);
        assert_eq!(next[0].cards[2].badge, "Old");
    }

    #[test]
    fn test_move_card_out_of_range_is_noop() {
        let columns = vec![column("c1", "Todo", "accent", &["a"])];
        assert_eq!(move_card(&columns, 0, 3, 0, 0), columns);
        assert_eq!(move_card(&columns, 0, 0, 4, 0), columns);
    }

    #[test]
    fn test_move_card_clamps_destination_index() {
        let columns = vec![column("c1", "Todo", "accent", &["a"]), column("c2", "Done", "success", &["b"])];
        let next = move_card(&columns, 0, 1, 0, 99);
        assert_eq!(ids(&next[1]), vec!["b", "a"]);
    }

    #[test]
    fn test_drag_without_destination_ignored() {
        let columns = saved_board();
        assert!(apply_drag_end(&columns, &card_drag(("list-1", 0), None)).is_none());
    }

    #[test]
    fn test_drag_to_same_position_ignored() {
        let columns = saved_board();
        assert!(apply_drag_end(&columns, &card_drag(("list-1", 1), Some(("list-1", 1)))).is_none());
        // past-the-end in the same column resolves to the same slot
        assert!(apply_drag_end(&columns, &card_drag(("list-1", 1), Some(("list-1", 5)))).is_none());
    }

    #[test]
    fn test_drag_unknown_container_ignored() {
        let columns = saved_board();
        assert!(apply_drag_end(&columns, &card_drag(("list-1", 0), Some(("nope", 0)))).is_none());
    }

    #[test]
    fn test_drag_card_across_columns_builds_placement() {
        let columns = saved_board();
        let reorder = apply_drag_end(&columns, &card_drag(("list-1", 0), Some(("list-2", 0)))).unwrap();

        assert_eq!(ids(&reorder.columns[0]), vec!["b"]);
        assert_eq!(ids(&reorder.columns[1]), vec!["a"]);
        assert_eq!(
            reorder.placement,
            Some(CardPlacement {
                card_id: Some(10),
                title: "Card a".to_string(),
                badge: "Done".to_string(),
                color: "success".to_string(),
                list_id: Some(2),
                position: 0,
            })
        );
    }

    #[test]
    fn test_drag_card_within_column_builds_placement() {
        let columns = saved_board();
        let reorder = apply_drag_end(&columns, &card_drag(("list-1", 0), Some(("list-1", 1)))).unwrap();
        assert_eq!(ids(&reorder.columns[0]), vec!["b", "a"]);
        let placement = reorder.placement.unwrap();
        assert_eq!(placement.position, 1);
        assert_eq!(placement.list_id, Some(1));
        assert_eq!(placement.badge, "Old");
    }

    #[test]
    fn test_drag_column() {
        let columns = saved_board();
        let event = DragEnd {
            kind: DragKind::Column,
            source: DragLocation::new(BOARD_CONTAINER, 1),
            destination: Some(DragLocation::new(BOARD_CONTAINER, 0)),
        };
        let reorder = apply_drag_end(&columns, &event).unwrap();
        assert_eq!(reorder.columns[0].id, "list-2");
        assert!(reorder.placement.is_none());

        let same = DragEnd { destination: Some(DragLocation::new(BOARD_CONTAINER, 1)), ..event };
        assert!(apply_drag_end(&columns, &same).is_none());
    }

    #[test]
    fn test_placement_patch_shape() {
        let placement = CardPlacement {
            card_id: Some(3),
            title: "T".to_string(),
            badge: "Done".to_string(),
            color: "success".to_string(),
            list_id: Some(9),
            position: 2,
        };
        assert_eq!(
            serde_json::to_string(&placement.to_patch()).unwrap(),
            r#"{"title":"T","badge":"Done","color":"success","listId":9,"position":2}"#
        );
    }

    #[tokio::test]
    async fn test_persist_sends_patch() {
        let columns = saved_board();
        let reorder = apply_drag_end(&columns, &card_drag(("list-1", 1), Some(("list-2", 0)))).unwrap();
        let api = FakeApi::default();

        persist_card_move(&api, Some("tok"), reorder.placement.as_ref().unwrap()).await;

        assert_eq!(
            api.calls(),
            vec![r#"update_card 11 {"title":"Card b","badge":"Done","color":"success","listId":2,"position":0}"#]
        );
    }

    #[tokio::test]
    async fn test_persist_failure_is_swallowed_and_local_move_kept() {
        let columns = saved_board();
        let reorder = apply_drag_end(&columns, &card_drag(("list-1", 0), Some(("list-2", 0)))).unwrap();
        let api = FakeApi::failing(ApiError::Status { status: 500, message: "db down".to_string() });

        persist_card_move(&api, Some("tok"), reorder.placement.as_ref().unwrap()).await;

        assert_eq!(api.calls().len(), 1);
        assert_eq!(ids(&reorder.columns[1]), vec!["a"]);
    }

    #[tokio::test]
    async fn test_persist_skipped_for_local_cards() {
        let columns = vec![column("c1", "Todo", "accent", &["a"]), column("c2", "Done", "success", &[])];
        let reorder = apply_drag_end(&columns, &card_drag(("c1", 0), Some(("c2", 0)))).unwrap();
        let api = FakeApi::default();

        persist_card_move(&api, Some("tok"), reorder.placement.as_ref().unwrap()).await;
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_persist_skipped_without_token() {
        let columns = saved_board();
        let reorder = apply_drag_end(&columns, &card_drag(("list-1", 0), Some(("list-2", 0)))).unwrap();
        let api = FakeApi::default();

        persist_card_move(&api, None, reorder.placement.as_ref().unwrap()).await;
        assert!(api.calls().is_empty());
    }
}
