//! Render state - data structure sent from App layer to UI for rendering

use crate::models::User;
use crate::store::FetchPhase;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Current user list, in server order
    pub users: Vec<User>,
    /// Where the store is in its fetch lifecycle
    pub phase: FetchPhase,
    /// Last fetch failure, shown in the status bar until the next success
    pub last_error: Option<String>,

    // List view
    pub selected: usize,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            users: Vec::new(),
            phase: FetchPhase::Empty,
            last_error: None,
            selected: 0,
            show_help: false,
        }
    }
}
