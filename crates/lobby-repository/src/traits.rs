//! Repository trait definitions.

use lobby_core::{Interface, LobbyResult, Page, PageRequest, UserEntity, UserId};
use async_trait::async_trait;

/// Outcome of [`UserRepository::upsert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upserted {
    /// The entity as stored.
    pub entity: UserEntity,
    /// True if no entity had the id and a new one was stored.
    pub was_inserted: bool,
}

/// User repository trait.
///
/// Implementations must make every mutation atomic relative to reads and to
/// other mutations.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> LobbyResult<Option<UserEntity>>;

    /// Stores a new user.
    ///
    /// A placeholder id is replaced with a fresh unique one. Inserting an id
    /// that is already stored fails with `Conflict`.
    async fn insert(&self, user: UserEntity) -> LobbyResult<UserEntity>;

    /// Replaces the stored user with the same id; `NotFound` if there is none.
    async fn update(&self, user: &UserEntity) -> LobbyResult<()>;

    /// Overwrites the user with the same id, or stores it under the caller's id.
    async fn upsert(&self, user: UserEntity) -> LobbyResult<Upserted>;

    /// Deletes a user by ID. Returns false if no user had the id.
    async fn delete(&self, id: UserId) -> LobbyResult<bool>;

    /// Returns one window of users in creation order.
    async fn page(&self, request: PageRequest) -> LobbyResult<Page<UserEntity>>;

    /// Counts all users.
    async fn count(&self) -> LobbyResult<u64>;
}
