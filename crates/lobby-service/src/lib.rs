//! # Lobby Service
//!
//! Business logic service layer for the Lobby users service.
//! Contains the DTOs, the entity mappers, the patch interpreter and the
//! `UserService` use cases.

pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod patch;
pub mod user_service;

pub use dto::*;
pub use patch::*;
pub use r#impl::*;
pub use user_service::*;
