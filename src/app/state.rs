//! App state - pure data structure with no I/O logic

use crate::messages::{FetchCommand, FetchUpdate, RenderState};
use crate::store::UserStore;

/// Main application state - pure data, no I/O
pub struct AppState {
    pub store: UserStore,
    pub selected: usize,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            store: UserStore::new(),
            selected: 0,
            show_help: false,
        }
    }

    /// Start a fetch if none is in flight, returning the command to send
    /// to the network layer.
    pub fn refresh(&mut self) -> Option<FetchCommand> {
        self.store.begin_fetch().map(|id| FetchCommand::Fetch { id })
    }

    /// Apply a fetch completion, keeping the selection on the same user
    /// id when it survives the refresh.
    pub fn handle_update(&mut self, update: FetchUpdate) {
        let selected_id = self.store.users().get(self.selected).map(|u| u.id);

        if !self.store.apply(update) {
            return;
        }

        let users = self.store.users();
        self.selected = selected_id
            .and_then(|id| users.iter().position(|u| u.id == id))
            .unwrap_or_else(|| self.selected.min(users.len().saturating_sub(1)));
    }

    pub fn select_next(&mut self) {
        let len = self.store.users().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.store.users().len().saturating_sub(1);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    /// Convert state to RenderState for the UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            users: self.store.users().to_vec(),
            phase: self.store.phase(),
            last_error: self.store.last_error().map(str::to_string),
            selected: self.selected,
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::store::FetchPhase;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn loaded(state: &mut AppState, users: Vec<User>) {
        let cmd = state.refresh().expect("fetch should start");
        let FetchCommand::Fetch { id } = cmd else {
            panic!("expected fetch command");
        };
        state.handle_update(FetchUpdate::Loaded { id, users });
    }

    #[test]
    fn test_refresh_then_update_populates_render_state() {
        let mut state = AppState::new();
        loaded(&mut state, vec![user(1, "Leanne Graham")]);

        let render = state.to_render_state();
        assert_eq!(render.phase, FetchPhase::Populated);
        assert_eq!(render.users.len(), 1);
        assert_eq!(render.users[0].initials(), "LG");
    }

    #[test]
    fn test_selection_clamped_to_list() {
        let mut state = AppState::new();
        loaded(&mut state, vec![user(1, "Alice"), user(2, "Bob")]);

        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_prev();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_follows_id_across_refresh() {
        let mut state = AppState::new();
        loaded(&mut state, vec![user(1, "Alice"), user(2, "Bob")]);
        state.select_next();
        assert_eq!(state.selected, 1);

        // Bob moves to the front in the next payload
        loaded(&mut state, vec![user(2, "Bob"), user(3, "Carol")]);
        assert_eq!(state.selected, 0);
        assert_eq!(state.store.users()[state.selected].id, 2);
    }

    #[test]
    fn test_selection_clamped_when_id_disappears() {
        let mut state = AppState::new();
        loaded(
            &mut state,
            vec![user(1, "Alice"), user(2, "Bob"), user(3, "Carol")],
        );
        state.select_last();
        assert_eq!(state.selected, 2);

        loaded(&mut state, vec![user(1, "Alice")]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_second_refresh_while_loading_is_ignored() {
        let mut state = AppState::new();
        assert!(state.refresh().is_some());
        assert!(state.refresh().is_none());
    }

    #[test]
    fn test_navigation_on_empty_list_is_noop() {
        let mut state = AppState::new();
        state.select_next();
        state.select_last();
        state.select_prev();
        assert_eq!(state.selected, 0);
    }
}
