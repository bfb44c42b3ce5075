//! Network layer - user list fetch execution
//!
//! The Fetch actor receives fetch commands and sends back completions.

pub mod actor;
pub mod client;

pub use actor::FetchActor;
