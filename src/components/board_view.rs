//! Board View Component
//!
//! One board: draggable columns and cards, composers, and the card editor,
//! share and template dialogs. Drops are applied locally first and card
//! moves are then persisted in the background.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{DragSource, DropTarget};

use epitrello_core::domain::Card;
use epitrello_core::reorder::apply_drag_end;

use crate::commands;
use crate::components::{BoardColumn, CardEditor, DropZone, ShareBoardModal, TemplatesModal};
use crate::context::{AppContext, Page};
use crate::drag::to_drag_end;
use crate::store::{store_open_board, store_open_local, store_set_columns, use_app_store, AppStateStoreFields, AppStore};

/// Document mouseup handler for the open board
pub fn handle_board_drop(store: AppStore, ctx: AppContext, source: DragSource, target: Option<DropTarget>) {
    let columns = store.columns().get_untracked();
    let Some(event) = to_drag_end(&columns, source, target) else {
        return;
    };
    let Some(reorder) = apply_drag_end(&columns, &event) else {
        log::debug!("[DND] drop left the board unchanged: {:?}", event);
        return;
    };
    log::debug!("[DND] applied {:?} drop", event.kind);
    store_set_columns(&store, reorder.columns);

    if let Some(placement) = reorder.placement {
        spawn_local(commands::persist_card_move(ctx.token(), placement));
    }
}

#[component]
pub fn BoardView(
    /// Remote board id, `None` for the local board
    board_id: Option<i64>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(board_id.is_some());
    let (show_templates, set_show_templates) = signal(false);
    let (show_share, set_show_share) = signal(false);
    let editing = RwSignal::new(None::<Card>);

    match board_id {
        None => store_open_local(&store),
        Some(id) => {
            let token = ctx.token().unwrap_or_default();
            spawn_local(async move {
                match commands::open_board(&token, id).await {
                    Ok(board) => store_open_board(&store, board),
                    Err(e) => set_error.set(Some(e)),
                }
                set_loading.set(false);
                // Members are needed for card assignment and the share dialog
                match commands::list_members(&token, id).await {
                    Ok(members) => store.members().set(members),
                    Err(e) => log::warn!("[BOARD] members of board {} unavailable: {}", id, e),
                }
            });
        }
    }

    let on_open = Callback::new(move |card: Card| editing.set(Some(card)));

    let columns_view = move || {
        let columns = store.columns().get();
        let count = columns.len();
        view! {
            {columns.into_iter().enumerate().map(|(index, column)| {
                let gap = DropTarget::ColumnSlot(index);
                view! {
                    <DropZone target=gap />
                    <BoardColumn column=column index=index on_open=on_open />
                }
            }).collect_view()}
            <DropZone target=DropTarget::ColumnSlot(count) />
        }
    };

    view! {
        <section class="board-page">
            <header class="board-header">
                <button class="back-btn" on:click=move |_| ctx.navigate(Page::Boards)>
                    "← Boards"
                </button>
                <h2 class="board-title">{move || store.board_title().get()}</h2>
                {match board_id {
                    None => view! {
                        <button class="board-action" on:click=move |_| set_show_templates.set(true)>
                            "Templates"
                        </button>
                    }.into_any(),
                    Some(_) => view! {
                        <button class="board-action" on:click=move |_| set_show_share.set(true)>
                            "Share"
                        </button>
                    }.into_any(),
                }}
            </header>

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading board..."</p> }
            >
                <div class="board-columns">{columns_view}</div>
            </Show>

            {move || editing.get().map(|card| view! {
                <CardEditor card=card on_close=Callback::new(move |_| editing.set(None)) />
            })}

            <Show when=move || show_templates.get()>
                <TemplatesModal on_close=Callback::new(move |_| set_show_templates.set(false)) />
            </Show>

            {board_id.map(|id| view! {
                <Show when=move || show_share.get()>
                    <ShareBoardModal board_id=id on_close=Callback::new(move |_| set_show_share.set(false)) />
                </Show>
            })}
        </section>
    }
}
