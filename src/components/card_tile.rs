//! Card Tile Component

use leptos::prelude::*;
use leptos_dragdrop::*;

use epitrello_core::domain::Card;
use epitrello_core::members::initials;

#[component]
pub fn CardTile(
    card: Card,
    /// Column position on the board
    column: usize,
    /// Position inside the column
    index: usize,
    on_open: Callback<Card>,
) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let source = DragSource::Card { column, index };
    let on_mousedown = make_on_mousedown(dnd, source);
    let is_dragging = move || dnd.dragging_read.get() == Some(source);

    let tile_class = move || {
        let mut c = String::from("card-tile");
        if is_dragging() { c.push_str(" dragging"); }
        c
    };

    let has_description = card.description.as_deref().is_some_and(|d| !d.trim().is_empty());
    let tags = card.tags.clone();
    let members = card.members.clone();
    let due = card.due_date.map(|d| d.format("%b %d").to_string());
    let opened = card.clone();

    view! {
        <div
            class=tile_class
            on:mousedown=on_mousedown
            on:click=move |_| {
                // A drop also fires click on the tile under the pointer
                if !dnd.drag_just_ended_read.get_untracked() {
                    on_open.run(opened.clone());
                }
            }
        >
            <span class=format!("card-badge {}", card.color)>{card.badge.clone()}</span>
            <p class="card-title">{card.title.clone()}</p>
            <div class="card-meta">
                {tags.into_iter().map(|tag| view! {
                    <span class=format!("card-tag {}", tag.color)>{tag.name}</span>
                }).collect_view()}
                {due.map(|d| view! { <span class="card-due">{d}</span> })}
                {has_description.then(|| view! { <span class="card-has-description" title="Has description">"≡"</span> })}
                <span class="card-members">
                    {members.into_iter().map(|m| view! {
                        <span class="avatar small" title=m.email.clone()>{initials(&m.email)}</span>
                    }).collect_view()}
                </span>
            </div>
        </div>
    }
}
