//! Domain entities for the Lobby users service.

mod user;

pub use user::*;
