//! Remove Confirm Button Component
//!
//! Small × next to a tag or board member that asks before removing it.

use leptos::prelude::*;

/// What a `RemoveConfirmButton` takes off the card or board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Tag,
    Member,
}

impl Removal {
    fn noun(self) -> &'static str {
        match self {
            Removal::Tag => "tag",
            Removal::Member => "member",
        }
    }
}

/// Tooltip on the × button, e.g. `Remove tag "urgent"`
fn removal_title(kind: Removal, label: &str) -> String {
    format!("Remove {} \"{}\"", kind.noun(), label.trim())
}

/// Question shown while confirming
fn removal_prompt(kind: Removal, label: &str) -> String {
    match kind {
        Removal::Tag => format!("Remove \"{}\"?", label.trim()),
        Removal::Member => format!("Remove {} from this board?", label.trim()),
    }
}

#[component]
pub fn RemoveConfirmButton(
    kind: Removal,
    /// Tag name or member e-mail
    #[prop(into)]
    label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let class = match kind {
        Removal::Tag => "tag-delete-btn",
        Removal::Member => "member-remove-btn",
    };
    let title = removal_title(kind, &label);
    let prompt = removal_prompt(kind, &label);

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class=class
                    title=title.clone()
                    aria-label=title.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "×"
                </button>
            }
        >
            <span class="remove-confirm">
                <span class="remove-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Remove"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "Keep"
                </button>
            </span>
        </Show>
    }
}
