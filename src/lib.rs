//! # Roster TUI
//!
//! A minimal terminal user directory: fetches a user list from a remote
//! JSON endpoint and renders each user as a row with an initials badge,
//! name, and email.
//!
//! ## Features
//! - One-shot fetch at startup, manual refresh with `r`
//! - Scrollable list with stable per-user avatar colors
//! - Loading indicator and fetch-failure line in the status bar
//! - File logging for fetch diagnostics
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine, owns the user store)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use error::FetchError;
pub use messages::{FetchCommand, FetchUpdate, RenderState, UiEvent};
pub use models::User;
pub use network::FetchActor;
pub use store::{FetchPhase, UserStore};
