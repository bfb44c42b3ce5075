//! Network messages - communication between App and Network layers

use crate::error::FetchError;
use crate::models::User;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum FetchCommand {
    /// Fetch the user list. The id ties the eventual update back to the
    /// store's pending fetch.
    Fetch { id: u64 },
    /// Shutdown the fetch actor
    Shutdown,
}

/// Completions sent from Network layer back to App layer
#[derive(Debug)]
pub enum FetchUpdate {
    /// The endpoint returned a valid user array, in server order
    Loaded { id: u64, users: Vec<User> },
    /// The fetch failed; the store keeps its previous list
    Failed { id: u64, error: FetchError },
}

impl FetchUpdate {
    /// Get the fetch ID this update belongs to
    pub fn id(&self) -> u64 {
        match self {
            FetchUpdate::Loaded { id, .. } => *id,
            FetchUpdate::Failed { id, .. } => *id,
        }
    }
}
