//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{AppContext, Page};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() { return; }
        let email = email.get_untracked();
        let password = password.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            let mut session = ctx.session.get_untracked();
            let result = commands::login(&mut session, &email, &password).await;
            ctx.session.set(session);
            set_busy.set(false);
            match result {
                Ok(_) => {
                    set_error.set(None);
                    ctx.navigate(Page::Boards);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <h2>"Log in"</h2>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Logging in..." } else { "Log in" }}
            </button>
            <p class="auth-switch">
                "No account yet? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::Register);
                }>"Sign up"</a>
            </p>
        </form>
    }
}
