//! Typed ID wrappers for domain entities.

use crate::LobbyError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

/// A strongly-typed wrapper for user IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new random user ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// The id carried by entities that have not been stored yet.
    ///
    /// The repository replaces it with a fresh id on insert.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self(Uuid::nil())
    }

    /// Returns true if this is the not-yet-assigned placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.0.is_nil()
    }

    /// Parses a user ID from a string.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Parses a user ID taken from a route.
    ///
    /// Malformed input and the placeholder id are bad requests.
    pub fn parse_route(s: &str) -> Result<Self, LobbyError> {
        match Self::parse(s) {
            Ok(id) if !id.is_placeholder() => Ok(id),
            _ => Err(LobbyError::bad_request(format!("Invalid user ID: {}", s))),
        }
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// A strongly-typed wrapper for game IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct GameId(pub Uuid);

impl GameId {
    /// Creates a new random game ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
