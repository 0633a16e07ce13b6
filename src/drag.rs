//! Drag Event Mapping
//!
//! Turns a released drag (source + slot) into the engine's `DragEnd`.
//! Slots are gaps *before* an index, so dropping into the gap after the
//! dragged item itself means "one further down" once it is taken out.

use epitrello_core::domain::Column;
use epitrello_core::reorder::{DragEnd, DragKind, DragLocation, BOARD_CONTAINER};
use leptos_dragdrop::{DragSource, DropTarget};

fn landing_index(from: usize, gap: usize, same_container: bool) -> usize {
    if same_container && gap > from {
        gap - 1
    } else {
        gap
    }
}

pub fn to_drag_end(columns: &[Column], source: DragSource, target: Option<DropTarget>) -> Option<DragEnd> {
    match source {
        DragSource::Column(from) => {
            let destination = match target {
                Some(DropTarget::ColumnSlot(gap)) => Some(DragLocation::new(BOARD_CONTAINER, landing_index(from, gap, true))),
                _ => None,
            };
            Some(DragEnd {
                kind: DragKind::Column,
                source: DragLocation::new(BOARD_CONTAINER, from),
                destination,
            })
        }
        DragSource::Card { column, index } => {
            let source_id = columns.get(column)?.id.clone();
            let destination = match target {
                Some(DropTarget::CardSlot { column: dest, index: gap }) => columns
                    .get(dest)
                    .map(|c| DragLocation::new(c.id.clone(), landing_index(index, gap, dest == column))),
                _ => None,
            };
            Some(DragEnd {
                kind: DragKind::Card,
                source: DragLocation::new(source_id, index),
                destination,
            })
        }
    }
}
