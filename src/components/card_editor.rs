//! Card Editor Component
//!
//! Modal for one card: title, markdown description with preview, due date,
//! tags, assigned members and comments. Cards of the local board are edited
//! in place; saved cards go through the API.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use epitrello_core::composer::{apply_edit, CardEdit};
use epitrello_core::domain::{Card, CardComment};
use epitrello_core::markdown::render_description;
use epitrello_core::members::initials;

use crate::commands;
use crate::components::{Removal, RemoveConfirmButton};
use crate::context::AppContext;
use crate::store::{store_replace_card, use_app_store, AppStateStoreFields};

const TAG_COLORS: &[&str] = &["accent", "primary", "warning", "success", "danger"];

/// `<input type="date">` value, empty meaning no due date
fn parse_due_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[component]
pub fn CardEditor(card: Card, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let current = RwSignal::new(card.clone());
    let is_saved = card.card_id.is_some();

    let edit = CardEdit::from_card(&card);
    let (title, set_title) = signal(edit.title);
    let (description, set_description) = signal(edit.description);
    let (due_date, set_due_date) = signal(edit.due_date.map(|d| d.to_string()).unwrap_or_default());
    let (preview, set_preview) = signal(false);
    let (comments, set_comments) = signal(Vec::<CardComment>::new());
    let (new_tag, set_new_tag) = signal(String::new());
    let (tag_color, set_tag_color) = signal(TAG_COLORS[0].to_string());
    let (new_comment, set_new_comment) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    // Fresh tags, members and comments for saved cards
    if let (Some(card_id), Some(token)) = (card.card_id, ctx.token()) {
        spawn_local(async move {
            match commands::get_card(&token, card_id).await {
                Ok(detail) => {
                    current.update(|c| {
                        c.tags = detail.card.tags.clone();
                        c.members = detail.card.members.clone();
                    });
                    set_comments.set(detail.comments);
                }
                Err(e) => log::warn!("[EDITOR] could not load card {}: {}", card_id, e),
            }
        });
    }

    // Tag and member changes show on the board right away
    let sync_board = move || store_replace_card(&store, &current.get_untracked());

    let save = move |_| {
        let edit = CardEdit {
            title: title.get_untracked(),
            description: description.get_untracked(),
            due_date: parse_due_date(&due_date.get_untracked()),
        };
        let card = current.get_untracked();
        if card.card_id.is_none() {
            if let Some(updated) = apply_edit(&card, &edit) {
                store_replace_card(&store, &updated);
                on_close.run(());
            }
            return;
        }
        let token = ctx.token();
        set_saving.set(true);
        spawn_local(async move {
            match commands::update_card(&card, &edit, token.as_deref()).await {
                Ok(Some(updated)) => {
                    store_replace_card(&store, &updated);
                    on_close.run(());
                }
                Ok(None) => {}
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    let add_tag = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (name, color, token) = (new_tag.get_untracked(), tag_color.get_untracked(), ctx.token());
        spawn_local(async move {
            match commands::add_tag(&current.get_untracked(), &name, &color, token.as_deref()).await {
                Ok(Some(tag)) => {
                    current.update(|c| c.tags.push(tag));
                    set_new_tag.set(String::new());
                    sync_board();
                }
                Ok(None) => {}
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let remove_tag = move |tag_id: i64| {
        let token = ctx.token();
        spawn_local(async move {
            match commands::remove_tag(&current.get_untracked(), tag_id, token.as_deref()).await {
                Ok(()) => {
                    current.update(|c| c.tags.retain(|t| t.id != tag_id));
                    sync_board();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let toggle_member = move |user_id: i64| {
        let token = ctx.token();
        let assigned = current.with_untracked(|c| c.members.iter().any(|m| m.user_id == user_id));
        spawn_local(async move {
            let card = current.get_untracked();
            let result = if assigned {
                commands::unassign_member(&card, user_id, token.as_deref())
                    .await
                    .map(|()| current.update(|c| c.members.retain(|m| m.user_id != user_id)))
            } else {
                commands::assign_member(&card, user_id, token.as_deref())
                    .await
                    .map(|member| current.update(|c| c.members.push(member)))
            };
            match result {
                Ok(()) => sync_board(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let add_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (content, token) = (new_comment.get_untracked(), ctx.token());
        spawn_local(async move {
            match commands::add_comment(&current.get_untracked(), &content, token.as_deref()).await {
                Ok(Some(comment)) => {
                    set_comments.update(|list| list.push(comment));
                    set_new_comment.set(String::new());
                }
                Ok(None) => {}
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal card-editor" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <span class=move || format!("card-badge {}", current.with(|c| c.color.clone()))>
                        {move || current.with(|c| c.badge.clone())}
                    </span>
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>"✕"</button>
                </header>

                <input
                    class="card-title-input"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <section class="editor-section">
                    <div class="section-header">
                        <h4>"Description"</h4>
                        <button class="small" on:click=move |_| set_preview.update(|p| *p = !*p)>
                            {move || if preview.get() { "Edit" } else { "Preview" }}
                        </button>
                    </div>
                    <Show
                        when=move || preview.get()
                        fallback=move || view! {
                            <textarea
                                class="description-input"
                                placeholder="Add a more detailed description... (Markdown supported)"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            />
                        }
                    >
                        <div class="markdown-preview" inner_html=move || render_description(&description.get()) />
                    </Show>
                </section>

                <section class="editor-section">
                    <h4>"Due date"</h4>
                    <input
                        type="date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| set_due_date.set(event_target_value(&ev))
                    />
                </section>

                <Show when=move || is_saved>
                    <section class="editor-section">
                        <h4>"Tags"</h4>
                        <div class="tag-list">
                            <For
                                each=move || current.with(|c| c.tags.clone())
                                key=|tag| tag.id
                                children=move |tag| {
                                    let tag_id = tag.id;
                                    view! {
                                        <span class=format!("card-tag {}", tag.color)>
                                            {tag.name.clone()}
                                            <RemoveConfirmButton
                                                kind=Removal::Tag
                                                label=tag.name.clone()
                                                on_confirm=move |_| remove_tag(tag_id)
                                            />
                                        </span>
                                    }
                                }
                            />
                        </div>
                        <form class="tag-form" on:submit=add_tag>
                            <input
                                type="text"
                                placeholder="New tag"
                                prop:value=move || new_tag.get()
                                on:input=move |ev| set_new_tag.set(event_target_value(&ev))
                            />
                            <select on:change=move |ev| set_tag_color.set(event_target_value(&ev))>
                                {TAG_COLORS.iter().map(|color| view! {
                                    <option value=*color selected=move || tag_color.get() == *color>{*color}</option>
                                }).collect_view()}
                            </select>
                            <button type="submit">"Add"</button>
                        </form>
                    </section>

                    <section class="editor-section">
                        <h4>"Members"</h4>
                        <div class="member-picker">
                            <For
                                each=move || store.members().get()
                                key=|member| member.user_id
                                children=move |member| {
                                    let user_id = member.user_id;
                                    let assigned = move || current.with(|c| c.members.iter().any(|m| m.user_id == user_id));
                                    view! {
                                        <button
                                            class=move || if assigned() { "member-option assigned" } else { "member-option" }
                                            title=member.email.clone()
                                            on:click=move |_| toggle_member(user_id)
                                        >
                                            <span class="avatar small">{initials(&member.email)}</span>
                                            {member.email.clone()}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </section>

                    <section class="editor-section">
                        <h4>"Comments"</h4>
                        <ul class="comment-list">
                            <For
                                each=move || comments.get()
                                key=|comment| comment.id
                                children=move |comment| view! {
                                    <li class="comment">
                                        <span class="avatar small">{initials(&comment.user_email)}</span>
                                        <div class="comment-body">
                                            <span class="comment-author">{comment.user_email.clone()}</span>
                                            <span class="comment-date">{comment.created_at.format("%b %d, %H:%M").to_string()}</span>
                                            <p>{comment.content.clone()}</p>
                                        </div>
                                    </li>
                                }
                            />
                        </ul>
                        <form class="comment-form" on:submit=add_comment>
                            <textarea
                                placeholder="Write a comment..."
                                prop:value=move || new_comment.get()
                                on:input=move |ev| set_new_comment.set(event_target_value(&ev))
                            />
                            <button type="submit">"Comment"</button>
                        </form>
                    </section>
                </Show>

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <footer class="modal-footer">
                    <button class="primary" disabled=move || saving.get() on:click=save>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </footer>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_due_date() {
        assert_eq!(parse_due_date("2025-04-30"), NaiveDate::from_ymd_opt(2025, 4, 30));
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("30/04/2025"), None);
    }
}
