//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for kanban boards: whole columns move between
//! column slots, cards move between card slots of any column.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// What is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    /// Column at this board index
    Column(usize),
    /// Card at `index` inside column `column`
    Card { column: usize, index: usize },
}

/// Where it would land if released now
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Gap before the column at this index (len = after the last one)
    ColumnSlot(usize),
    /// Gap before card `index` of column `column`
    CardSlot { column: usize, index: usize },
}

impl DragSource {
    /// Columns only accept column slots, cards only card slots
    pub fn accepts(&self, target: &DropTarget) -> bool {
        matches!(
            (self, target),
            (DragSource::Column(_), DropTarget::ColumnSlot(_)) | (DragSource::Card { .. }, DropTarget::CardSlot { .. })
        )
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending source (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragSource>>,
    pub pending_write: WriteSignal<Option<DragSource>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragSource>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// True when the pointer moved far enough from the press point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    (now.0 - start.0).abs() > DRAG_THRESHOLD_PX || (now.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    // Swallow the click that follows mouseup so a drop does not open the card
    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable columns and cards
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, source: DragSource) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on form controls inside the card
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // A card press bubbles up to its column; the innermost source wins
        ev.stop_propagation();
        dnd.pending_write.set(Some(source));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Bind document mousemove - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for a drop slot
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: DropTarget) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(source) = dnd.dragging_read.get_untracked() {
            if source.accepts(&slot) {
                dnd.drop_target_write.set(Some(slot));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop` runs for every real drag (not plain clicks); the target is `None`
/// when the pointer was released outside any slot.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragSource, Option<DropTarget>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        dnd.pending_write.set(None);
        end_drag(&dnd);

        if let Some(source) = dragging {
            on_drop(source, drop_target.filter(|t| source.accepts(t)));
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 5)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_sources_only_accept_matching_slots() {
        let column = DragSource::Column(1);
        let card = DragSource::Card { column: 0, index: 2 };
        assert!(column.accepts(&DropTarget::ColumnSlot(0)));
        assert!(!column.accepts(&DropTarget::CardSlot { column: 0, index: 0 }));
        assert!(card.accepts(&DropTarget::CardSlot { column: 3, index: 0 }));
        assert!(!card.accepts(&DropTarget::ColumnSlot(2)));
    }
}
