//! User service trait definition.

use crate::dto::{UserCreateInput, UserOutput, UserUpdateInput};
use crate::patch::PatchOperation;
use async_trait::async_trait;
use lobby_core::{Interface, LobbyResult, Page, PageRequest, UserId};

/// Result of a full replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// No user had the id; one was stored under it.
    Created(UserOutput),
    /// The existing user was overwritten.
    Replaced,
}

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> LobbyResult<UserOutput>;

    /// Lists users one page at a time, in creation order.
    async fn list_users(&self, page: PageRequest) -> LobbyResult<Page<UserOutput>>;

    /// Validates and stores a new user under a fresh id.
    async fn create_user(&self, input: UserCreateInput) -> LobbyResult<UserOutput>;

    /// Replaces login and names of the user with `id`, creating it if absent.
    async fn replace_user(&self, id: UserId, input: UserUpdateInput) -> LobbyResult<ReplaceOutcome>;

    /// Applies a patch document to an existing user.
    ///
    /// The operations run against a projection seeded with defaults, not
    /// with the user's current values. Nothing is stored unless the patched
    /// projection validates.
    async fn patch_user(&self, id: UserId, operations: Vec<PatchOperation>) -> LobbyResult<()>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> LobbyResult<()>;
}
