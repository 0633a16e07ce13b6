//! Drop Zone Component
//!
//! A gap between columns or cards that lights up while a matching item is dragged over it.

use leptos::prelude::*;
use leptos_dragdrop::*;

#[component]
pub fn DropZone(
    /// Gap this zone stands for
    target: DropTarget,
) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let on_mouseenter = make_on_slot_mouseenter(dnd, target);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || dnd.drop_target_read.get() == Some(target);
    // Only show while something that fits here is dragged
    let is_visible = move || dnd.dragging_read.get().is_some_and(|source| source.accepts(&target));

    let zone_class = move || {
        let mut c = String::from(match target {
            DropTarget::ColumnSlot(_) => "drop-zone column-gap",
            DropTarget::CardSlot { .. } => "drop-zone card-gap",
        });
        if !is_visible() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
