//! App layer - central state management and event processing
//!
//! The App actor receives UI events and fetch completions,
//! updates state, and emits fetch commands and render state.

pub mod actor;
pub mod state;

pub use actor::AppActor;
pub use state::AppState;
