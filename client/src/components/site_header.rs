//! Site-wide header with brand link and navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Brand link plus route navigation. Shows a logout button once a token is stored.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        crate::util::auth::clear_token();
        auth.set(AuthState::from_token(None));
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"🎧 StudyPodcast"</a>
            <nav class="site-header__nav">
                <Show
                    when=move || auth.with(AuthState::is_authenticated)
                    fallback=|| {
                        view! {
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        }
                    }
                >
                    <a href="/dashboard">"Dashboard"</a>
                    <button class="btn site-header__logout" on:click=on_logout.clone()>
                        "Salir"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
