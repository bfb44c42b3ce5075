//! Fetch error taxonomy
//!
//! Every way a fetch can fail, kept distinct so the status bar can say
//! something more useful than "error". None of these abort the app; the
//! store keeps its previous list and the failure is logged.

use thiserror::Error;

/// Reasons a user-list fetch can fail.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The fixed endpoint URL failed to parse. The URL is a compile-time
    /// constant, so hitting this at runtime means the constant is wrong.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// Network-level failure: unreachable host, timeout, TLS error, or a
    /// non-2xx status from the server.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body was not a valid JSON array of users.
    #[error("decode failure: {0}")]
    Decode(String),
}
