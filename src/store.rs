//! User store - pure state container with no I/O logic
//!
//! Owns the current user list and the bookkeeping for the single fetch
//! that populates it. All mutation happens on the App actor; the network
//! layer only reports completions through [`FetchUpdate`].

use crate::messages::FetchUpdate;
use crate::models::User;

/// Where the store is in its fetch lifecycle.
///
/// `Loading` and `Failed` exist so the UI can show a spinner and an error
/// line instead of silently rendering a stale list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No fetch has completed yet
    #[default]
    Empty,
    /// A fetch is in flight
    Loading,
    /// The last fetch succeeded
    Populated,
    /// The last fetch failed; `users` holds whatever the previous
    /// successful fetch produced (possibly nothing)
    Failed,
}

/// Owns the current user list and at most one in-flight fetch.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
    phase: FetchPhase,
    last_error: Option<String>,
    next_fetch_id: u64,
    pending_fetch: Option<u64>,
}

impl UserStore {
    pub fn new() -> Self {
        UserStore::default()
    }

    /// Current list, in the order the server sent it
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Stamp a new fetch and return its id, or `None` if one is already
    /// in flight. Refreshes requested while loading are ignored outright,
    /// so two fetches never race.
    pub fn begin_fetch(&mut self) -> Option<u64> {
        if self.pending_fetch.is_some() {
            tracing::debug!("refresh ignored, fetch already in flight");
            return None;
        }
        self.next_fetch_id += 1;
        let id = self.next_fetch_id;
        self.pending_fetch = Some(id);
        self.phase = FetchPhase::Loading;
        Some(id)
    }

    /// Apply a fetch completion. Returns false if the update did not
    /// belong to the pending fetch and was discarded.
    pub fn apply(&mut self, update: FetchUpdate) -> bool {
        if self.pending_fetch != Some(update.id()) {
            tracing::debug!(id = update.id(), "discarding stale fetch update");
            return false;
        }
        self.pending_fetch = None;

        match update {
            FetchUpdate::Loaded { users, .. } => {
                tracing::info!(count = users.len(), "user list replaced");
                self.users = users;
                self.phase = FetchPhase::Populated;
                self.last_error = None;
            }
            FetchUpdate::Failed { error, .. } => {
                tracing::warn!(%error, "fetch failed, keeping previous list");
                self.phase = FetchPhase::Failed;
                self.last_error = Some(error.to_string());
            }
        }
        true
    }
}
