use serde::Deserialize;

/// A single user from the remote directory.
///
/// Decoded from one element of the endpoint's JSON array and never
/// mutated afterwards; a refresh replaces the whole list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Unique identifier, also the row identity in the list.
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Initials for the avatar badge: the uppercased first character of
    /// each of the first two whitespace-separated tokens of `name`.
    ///
    /// A single-token name yields one character; an empty name yields an
    /// empty string.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|token| token.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}
