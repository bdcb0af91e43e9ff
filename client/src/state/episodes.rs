//! Episode-list state for the dashboard.

#[cfg(test)]
#[path = "episodes_test.rs"]
mod episodes_test;

use podcast::{Action, ApiError, Episode};

/// Episodes known to the backend, refreshed after every synthesis.
#[derive(Clone, Debug, Default)]
pub struct EpisodesState {
    pub items: Vec<Episode>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EpisodesState {
    /// Apply a `GET /episodes` outcome. A failed refresh keeps the previous
    /// list on screen and shows the fixed error line.
    pub fn apply(&mut self, result: Result<Vec<Episode>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(Action::ListEpisodes.failure_message().to_owned());
            }
        }
    }
}
