//! Epitrello Frontend App
//!
//! App shell: session bootstrap, theme, page switching and the board-wide
//! drag-and-drop listeners.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use epitrello_core::session::{Theme, Verification};

use crate::commands;
use crate::components::{handle_board_drop, BoardList, BoardView, LoginForm, RegisterForm, TopBar};
use crate::context::{AppContext, BrowserSession, Page};
use crate::storage::BrowserStorage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = commands::config();

    // State
    let session = RwSignal::new(BrowserSession::load(BrowserStorage, config.token_key.clone()));
    let signed_in = session.with_untracked(|s| s.is_authenticated());
    let (page, set_page) = signal(if signed_in { Page::Boards } else { Page::Login });
    let (theme, set_theme) = signal(Theme::load(&BrowserStorage, &config.theme_key));
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new((page, set_page), session, (theme, set_theme), (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    let store = Store::new(AppState::new());
    provide_context(store);

    // DnD signals live as long as the app, the document listeners are never removed
    let dnd = create_dnd_signals();
    provide_context(dnd);
    bind_global_mouseup(dnd, move |source, target| handle_board_drop(store, ctx, source, target));

    // Confirm a stored token; a rejected one sends the user back to login.
    // The answer is dropped if the user signed in or out in the meantime.
    if let Some(token) = session.with_untracked(|s| s.token().map(str::to_string)) {
        spawn_local(async move {
            let verification = match commands::check_token(&token).await {
                Ok(verification) => verification,
                Err(e) => {
                    log::warn!("[APP] keeping unverified session: {}", e);
                    return;
                }
            };
            let applied = session.try_update(|s| s.apply_verification(&token, &verification)).unwrap_or(false);
            match verification {
                _ if !applied => log::debug!("[APP] session changed during /me, result dropped"),
                Verification::Valid(user) => log::info!("[APP] session verified for {}", user.email),
                Verification::Rejected => ctx.navigate(Page::Login),
            }
        });
    }

    let authenticated = Memo::new(move |_| ctx.is_authenticated());

    // Theme is applied on the root element for the stylesheet
    Effect::new(move |_| {
        let theme = theme.get();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    });

    view! {
        <div class="app-layout">
            <TopBar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Login => view! { <LoginForm /> }.into_any(),
                    Page::Register => view! { <RegisterForm /> }.into_any(),
                    Page::Boards | Page::Board(Some(_)) if !authenticated.get() => view! { <LoginForm /> }.into_any(),
                    Page::Boards => view! { <BoardList /> }.into_any(),
                    Page::Board(board_id) => view! { <BoardView board_id=board_id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
