//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{AppContext, Page};

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() { return; }
        let (email, password, confirm) = (email.get_untracked(), password.get_untracked(), confirm.get_untracked());
        set_busy.set(true);
        spawn_local(async move {
            let mut session = ctx.session.get_untracked();
            let result = commands::register(&mut session, &email, &password, &confirm).await;
            ctx.session.set(session);
            set_busy.set(false);
            match result {
                Ok(user) => {
                    log::info!("[AUTH] account created for {}", user.email);
                    set_error.set(None);
                    ctx.navigate(Page::Boards);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>"Create an account"</h2>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password (6+ characters)"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Confirm password"
                prop:value=move || confirm.get()
                on:input=move |ev| set_confirm.set(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Creating account..." } else { "Sign up" }}
            </button>
            <p class="auth-switch">
                "Already registered? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::Login);
                }>"Log in"</a>
            </p>
        </form>
    }
}
