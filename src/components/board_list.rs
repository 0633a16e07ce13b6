//! Board List Component
//!
//! The signed-in user's boards, a create form and the local board entry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{AppContext, Page};
use crate::store::{store_add_board, use_app_store, AppStateStoreFields};

#[component]
pub fn BoardList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (new_title, set_new_title) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);

    // Load boards on mount and on reload
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(token) = ctx.token() else { return; };
        set_loading.set(true);
        spawn_local(async move {
            match commands::list_boards(&token).await {
                Ok(boards) => {
                    log::debug!("[BOARDS] loaded {} boards", boards.len());
                    store.boards().set(boards);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let create_board = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = ctx.token() else { return; };
        let title = new_title.get_untracked();
        spawn_local(async move {
            match commands::create_board(&token, &title).await {
                Ok(board) => {
                    store_add_board(&store, board);
                    set_new_title.set(String::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <section class="board-list">
            <h2>"Your boards"</h2>

            <form class="new-board-form" on:submit=create_board>
                <input
                    type="text"
                    placeholder="New board title..."
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
                <button type="submit">"Create"</button>
            </form>

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

            <div class="board-grid">
                <For
                    each=move || store.boards().get()
                    key=|board| (board.id, board.title.clone())
                    children=move |board| {
                        let id = board.id;
                        view! {
                            <button class="board-tile" on:click=move |_| ctx.navigate(Page::Board(Some(id)))>
                                <span class="board-tile-title">{board.title.clone()}</span>
                                {board.created_at.map(|at| view! {
                                    <span class="board-tile-date">{at.format("%b %d, %Y").to_string()}</span>
                                })}
                            </button>
                        }
                    }
                />
                <button class="board-tile local" on:click=move |_| ctx.navigate(Page::Board(None))>
                    <span class="board-tile-title">"Local board"</span>
                    <span class="board-tile-date">"Stored in this browser"</span>
                </button>
            </div>

            <Show when=move || !loading.get() && store.boards().with(|b| b.is_empty())>
                <p class="empty-hint">"No boards yet. Create one above."</p>
            </Show>
        </section>
    }
}
