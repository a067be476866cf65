//! Result type aliases for Lobby.

use crate::LobbyError;

/// A specialized `Result` type for Lobby operations.
pub type LobbyResult<T> = Result<T, LobbyError>;
