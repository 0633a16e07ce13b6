//! Share Board Modal Component
//!
//! Member list with removal, debounced user search and invite by e-mail.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use epitrello_core::domain::User;
use epitrello_core::members::{initials, search_query, ShareStatus};

use crate::commands;
use crate::components::{Removal, RemoveConfirmButton};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ShareBoardModal(board_id: i64, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let debounce_ms = commands::config().search_debounce_ms;

    let (query, set_query) = signal(String::new());
    let (results, set_results) = signal(Vec::<User>::new());
    let (status, set_status) = signal(None::<ShareStatus>);
    let (inviting, set_inviting) = signal(false);
    // Bumped on every keystroke; a search only lands if it is still the latest
    let (generation, set_generation) = signal(0u32);

    let refresh_members = move || {
        let token = ctx.token().unwrap_or_default();
        spawn_local(async move {
            match commands::list_members(&token, board_id).await {
                Ok(members) => store.members().set(members),
                Err(e) => log::warn!("[SHARE] could not refresh members: {}", e),
            }
        });
    };

    let on_query = move |value: String| {
        set_query.set(value.clone());
        let current = generation.get_untracked().wrapping_add(1);
        set_generation.set(current);
        if search_query(&value).is_none() {
            set_results.set(Vec::new());
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if generation.try_get_untracked() != Some(current) {
                return;
            }
            let token = ctx.token().unwrap_or_default();
            let existing = store.members().get_untracked();
            let found = commands::search_users(&token, &value, &existing).await;
            if generation.try_get_untracked() == Some(current) {
                set_results.set(found);
            }
        });
    };

    let invite = move |email: String| {
        if inviting.get_untracked() || email.trim().is_empty() { return; }
        let token = ctx.token().unwrap_or_default();
        set_inviting.set(true);
        spawn_local(async move {
            let outcome = commands::invite_member(&token, board_id, &email).await;
            set_inviting.set(false);
            let Some(outcome) = outcome else { return; };
            if matches!(outcome, ShareStatus::Success(_)) {
                set_query.set(String::new());
                set_results.set(Vec::new());
                refresh_members();
            }
            set_status.set(Some(outcome));
        });
    };

    let remove = move |user_id: i64| {
        let Some(member) = store.members().with_untracked(|m| m.iter().find(|m| m.user_id == user_id).cloned()) else {
            return;
        };
        let token = ctx.token().unwrap_or_default();
        spawn_local(async move {
            let outcome = commands::remove_member(&token, board_id, &member).await;
            if matches!(outcome, ShareStatus::Success(_)) {
                store.members().update(|list| list.retain(|m| m.user_id != user_id));
            }
            set_status.set(Some(outcome));
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal share-modal" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h3>"Share board"</h3>
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>"✕"</button>
                </header>

                <form
                    class="invite-form"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        invite(query.get_untracked());
                    }
                >
                    <input
                        type="text"
                        placeholder="Email address or name"
                        prop:value=move || query.get()
                        on:input=move |ev| on_query(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || inviting.get() || query.with(|q| q.trim().is_empty())>
                        {move || if inviting.get() { "Inviting..." } else { "Invite" }}
                    </button>
                </form>

                <ul class="search-results">
                    <For
                        each=move || results.get()
                        key=|user| user.id
                        children=move |user| {
                            let email = user.email.clone();
                            view! {
                                <li class="search-result" on:click=move |_| invite(email.clone())>
                                    <span class="avatar small">{initials(&user.email)}</span>
                                    {user.email.clone()}
                                </li>
                            }
                        }
                    />
                </ul>

                {move || status.get().map(|s| match s {
                    ShareStatus::Success(msg) => view! { <p class="share-status success">{msg}</p> }.into_any(),
                    ShareStatus::Error(msg) => view! { <p class="share-status form-error">{msg}</p> }.into_any(),
                })}

                <h4>"Board members"</h4>
                <ul class="member-list">
                    <For
                        each=move || store.members().get()
                        key=|member| (member.user_id, member.role.clone())
                        children=move |member| {
                            let user_id = member.user_id;
                            view! {
                                <li class="member-row">
                                    <span class="avatar">{initials(&member.email)}</span>
                                    <span class="member-email">{member.email.clone()}</span>
                                    <span class="member-role">{member.role.clone()}</span>
                                    {(!member.is_owner()).then(|| view! {
                                        <RemoveConfirmButton
                                            kind=Removal::Member
                                            label=member.email.clone()
                                            on_confirm=move |_| remove(user_id)
                                        />
                                    })}
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}
