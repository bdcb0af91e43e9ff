//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use podcast::{Action, ApiError, messages};

/// Message shown after a `/auth/register` attempt.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn register_message(result: &Result<(), ApiError>) -> &'static str {
    match result {
        Ok(()) => messages::REGISTERED,
        Err(_) => Action::Register.failure_message(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let msg = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let creds = match podcast::types::Credentials::new(&email.get(), &password.get()) {
            Ok(creds) => creds,
            Err(text) => {
                msg.set(text.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::register(&creds).await;
            if let Err(e) = &result {
                log::warn!("register failed: {e}");
            }
            msg.set(register_message(&result).to_owned());
            busy.set(false);
            if result.is_ok() {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = creds;
            busy.set(false);
        }
    };

    view! {
        <main class="auth-page">
            <h2>"Registro"</h2>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Crear cuenta"
                </button>
            </form>
            <p class="auth-page__message">{move || msg.get()}</p>
        </main>
    }
}
