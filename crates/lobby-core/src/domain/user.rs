//! User entity.

use crate::{GameId, UserId};
use serde::{Deserialize, Serialize};

/// Canonical stored user record.
///
/// Only the repository holds stored instances; everything else works on
/// clones for the duration of one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntity {
    /// Unique identifier. [`UserId::placeholder`] until the entity is stored.
    pub id: UserId,

    /// Login name. Letters and digits only at creation time.
    pub login: String,

    /// User's first name, may be empty.
    pub first_name: String,

    /// User's last name, may be empty.
    pub last_name: String,

    /// Number of games the user has played.
    pub games_played: i32,

    /// Game the user is currently in, if any.
    pub current_game_id: Option<GameId>,
}

impl UserEntity {
    /// Creates a not-yet-stored user with no games played.
    #[must_use]
    pub fn new(login: String, first_name: String, last_name: String) -> Self {
        Self {
            id: UserId::placeholder(),
            login,
            first_name,
            last_name,
            games_played: 0,
            current_game_id: None,
        }
    }

    /// Creates an empty user keyed by a caller-supplied id.
    #[must_use]
    pub fn with_id(id: UserId) -> Self {
        Self {
            id,
            ..Self::new(String::new(), String::new(), String::new())
        }
    }

    /// Returns first and last name joined by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
