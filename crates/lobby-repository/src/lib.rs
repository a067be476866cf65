//! # Lobby Repository
//!
//! Owns the canonical collection of users.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! InMemoryUserRepository        (single-lock in-process store)
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                    ← UserRepository trait, Upserted
//!   memory/
//!     user_repository.rs         ← InMemoryUserRepository
//! ```

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
