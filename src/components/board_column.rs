//! Board Column Component
//!
//! A column with a draggable header, card drop gaps and the card composer.

use leptos::prelude::*;
use leptos_dragdrop::*;

use epitrello_core::domain::{Card, Column};

use crate::components::{CardComposer, CardTile, DropZone};

#[component]
pub fn BoardColumn(
    column: Column,
    /// Position on the board
    index: usize,
    on_open: Callback<Card>,
) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let source = DragSource::Column(index);
    let on_mousedown = make_on_mousedown(dnd, source);
    let is_dragging = move || dnd.dragging_read.get() == Some(source);

    let title = column.title.clone();
    let accent = column.accent.clone();
    let card_count = column.cards.len();
    let last_gap = DropTarget::CardSlot { column: index, index: card_count };
    let column_class = move || {
        let mut c = String::from("board-column");
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    let cards = column
        .cards
        .iter()
        .cloned()
        .enumerate()
        .map(|(card_index, card)| {
            let gap = DropTarget::CardSlot { column: index, index: card_index };
            view! {
                <DropZone target=gap />
                <CardTile card=card column=index index=card_index on_open=on_open />
            }
        })
        .collect_view();

    view! {
        <div class=column_class data-accent=accent>
            <div class="column-header" on:mousedown=on_mousedown>
                <span class="column-title">{title}</span>
                <span class="column-count">{card_count}</span>
            </div>
            <div class="column-cards">
                {cards}
                <DropZone target=last_gap />
            </div>
            <CardComposer column=column />
        </div>
    }
}
