//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Fixed endpoint the user list is fetched from
pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Application name
pub const APP_NAME: &str = "Roster TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
