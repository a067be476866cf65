//! User service implementation.

use crate::dto::{UserCreateInput, UserOutput, UserUpdateInput};
use crate::mappers::{apply_update_input, from_create_input};
use crate::patch::{apply_patch, PatchOperation};
use crate::user_service::{ReplaceOutcome, UserService};
use async_trait::async_trait;
use lobby_core::{
    FieldErrors, LobbyError, LobbyResult, Page, PageRequest, UserEntity, UserId, ValidateExt,
};
use lobby_repository::UserRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};
use validator::Validate;

/// User service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a user service outside of a DI module.
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    async fn find_existing(&self, id: UserId) -> LobbyResult<UserEntity> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| LobbyError::not_found("User", id))
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn get_user(&self, id: UserId) -> LobbyResult<UserOutput> {
        debug!("Getting user: {}", id);

        let user = self.find_existing(id).await?;
        Ok(UserOutput::from(user))
    }

    async fn list_users(&self, page: PageRequest) -> LobbyResult<Page<UserOutput>> {
        debug!(
            "Listing users, page: {}, size: {}",
            page.page_number, page.page_size
        );

        let users = self.user_repository.page(page).await?;
        Ok(users.map(UserOutput::from))
    }

    async fn create_user(&self, input: UserCreateInput) -> LobbyResult<UserOutput> {
        debug!("Creating user: {}", input.login);

        if let Err(e) = input.validate_request() {
            warn!("Rejected user creation: {}", e);
            return Err(e);
        }

        let saved_user = self.user_repository.insert(from_create_input(input)).await?;

        info!("User created: {}", saved_user.id);
        Ok(UserOutput::from(saved_user))
    }

    async fn replace_user(&self, id: UserId, input: UserUpdateInput) -> LobbyResult<ReplaceOutcome> {
        debug!("Replacing user: {}", id);

        input.validate_request()?;

        let mut user = UserEntity::with_id(id);
        apply_update_input(input, &mut user);

        let outcome = self.user_repository.upsert(user).await?;

        if outcome.was_inserted {
            info!("User created by replace: {}", id);
            Ok(ReplaceOutcome::Created(UserOutput::from(outcome.entity)))
        } else {
            info!("User replaced: {}", id);
            Ok(ReplaceOutcome::Replaced)
        }
    }

    async fn patch_user(&self, id: UserId, operations: Vec<PatchOperation>) -> LobbyResult<()> {
        debug!("Patching user: {} ({} operations)", id, operations.len());

        let mut user = self.find_existing(id).await?;

        let mut projection = UserUpdateInput::default();
        let mut errors = apply_patch(&mut projection, &operations);
        if let Err(validation) = projection.validate() {
            errors.merge(FieldErrors::from(validation));
        }
        if let Err(e) = errors.into_result() {
            warn!("Rejected patch for user {}: {}", id, e);
            return Err(e);
        }

        apply_update_input(projection, &mut user);
        self.user_repository.update(&user).await?;

        info!("User patched: {}", id);
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> LobbyResult<()> {
        debug!("Deleting user: {}", id);

        if !self.user_repository.delete(id).await? {
            return Err(LobbyError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
