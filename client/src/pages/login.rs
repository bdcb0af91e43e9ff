//! Login page: email + password exchanged for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use podcast::types::LoginResponse;
use podcast::{Action, ApiError};

/// Map a `/auth/login` outcome to the token to store or the message to show.
///
/// A response without a usable token counts as a failed login, so nothing is
/// stored.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn login_outcome(result: Result<LoginResponse, ApiError>) -> Result<String, &'static str> {
    match result {
        Ok(resp) if !resp.access_token.trim().is_empty() => Ok(resp.access_token),
        _ => Err(Action::Login.failure_message()),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let creds = match podcast::types::Credentials::new(&email.get(), &password.get()) {
            Ok(creds) => creds,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::login(&creds).await;
            if let Err(e) = &result {
                log::warn!("login failed: {e}");
            }
            match login_outcome(result) {
                Ok(token) => {
                    crate::util::auth::store_token(&token);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(msg) => error.set(msg.to_owned()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = creds;
            busy.set(false);
        }
    };

    view! {
        <main class="auth-page">
            <h1>"Iniciar Sesión"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-form__label" for="email">"Email:"</label>
                <input
                    id="email"
                    class="auth-form__input"
                    type="email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label class="auth-form__label" for="password">"Contraseña:"</label>
                <input
                    id="password"
                    class="auth-form__input"
                    type="password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || !error.get().is_empty()>
                    <div class="auth-form__error">{move || error.get()}</div>
                </Show>
                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Iniciando sesión..." } else { "Iniciar Sesión" }}
                </button>
            </form>
            <p class="auth-page__switch">
                "¿No tienes cuenta? "
                <a href="/register">"Regístrate aquí"</a>
            </p>
        </main>
    }
}
