//! Top Bar Component
//!
//! Brand, signed-in user, theme toggle and logout.

use leptos::prelude::*;

use epitrello_core::members::initials;
use epitrello_core::session::Theme;

use crate::context::{AppContext, Page};

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let theme_icon = move || match ctx.theme.get() {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    };

    view! {
        <header class="top-bar">
            <button class="brand" on:click=move |_| ctx.navigate(Page::Boards)>
                "Epitrello"
            </button>

            <div class="top-bar-controls">
                <button
                    class="top-bar-btn theme"
                    title=move || format!("Switch to {} theme", ctx.theme.get().toggled().as_str())
                    on:click=move |_| ctx.toggle_theme()
                >
                    {theme_icon}
                </button>

                <Show when=move || ctx.is_authenticated()>
                    {move || ctx.display_email().map(|email| view! {
                        <span class="user-chip" title=email.clone()>
                            <span class="avatar">{initials(&email)}</span>
                            <span class="user-email">{email.clone()}</span>
                        </span>
                    })}
                    <button class="top-bar-btn" on:click=move |_| ctx.navigate(Page::Boards)>
                        "Boards"
                    </button>
                    <button class="top-bar-btn logout" on:click=move |_| ctx.sign_out()>
                        "Log out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
