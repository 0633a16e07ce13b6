//! Card Composer Component
//!
//! Inline "Add a card" form at the foot of a column. Validation and server
//! errors are shown under the input.

use leptos::prelude::*;
use leptos::task::spawn_local;

use epitrello_core::domain::Column;

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_append_card, use_app_store};

#[component]
pub fn CardComposer(column: Column) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let column = StoredValue::new(column);

    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let close = move || {
        set_open.set(false);
        set_title.set(String::new());
        set_error.set(None);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() { return; }
        let text = title.get_untracked();
        let column = column.get_value();
        let token = ctx.token();
        set_busy.set(true);
        spawn_local(async move {
            match commands::create_card(&text, &column, token.as_deref()).await {
                Ok(Some(card)) => {
                    store_append_card(&store, &column.id, card);
                    set_title.set(String::new());
                    set_error.set(None);
                }
                // Blank title
                Ok(None) => {}
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <Show
            when=move || open.get()
            fallback=move || view! {
                <button class="add-card-btn" on:click=move |_| set_open.set(true)>"+ Add a card"</button>
            }
        >
            <form class="card-composer" on:submit=submit>
                <textarea
                    placeholder="Enter a title for this card..."
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" { close(); }
                    }
                />
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <div class="composer-actions">
                    <button type="submit" disabled=move || busy.get()>"Add card"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| close()>"✕"</button>
                </div>
            </form>
        </Show>
    }
}
