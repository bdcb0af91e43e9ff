//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard route guard and the site header to decide between
//! login links and the logout button.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state: the stored access token and whether it has been read yet.
///
/// `loading` starts `true` because local storage is only readable after
/// hydration; the root component flips it once the token has been loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, loading: true }
    }
}

impl AuthState {
    /// Loaded state for a (possibly absent) stored token. Blank tokens count as absent.
    #[must_use]
    pub fn from_token(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.trim().is_empty()), loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
