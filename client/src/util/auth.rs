//! Access-token persistence and shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page stores the token returned by `/auth/login`; API helpers read
//! it back to build the bearer header; the dashboard guard redirects when it
//! is missing.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::storage;

/// Local storage key holding the access token.
pub const TOKEN_KEY: &str = "token";

/// Read the stored access token.
pub fn load_token() -> Option<String> {
    storage::load_item(TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Persist the access token.
pub fn store_token(token: &str) {
    storage::save_item(TOKEN_KEY, token);
}

/// Forget the access token.
pub fn clear_token() {
    storage::remove_item(TOKEN_KEY);
}

/// `Authorization` header value for authenticated calls, if logged in.
pub fn auth_header() -> Option<String> {
    load_token().map(|t| podcast::endpoints::bearer(&t))
}

/// Whether a route guard should send the user to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.token.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
