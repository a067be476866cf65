//! Entity-DTO mappers.

use crate::dto::{UserCreateInput, UserOutput, UserUpdateInput};
use lobby_core::UserEntity;

/// Builds the read model for a stored user.
#[must_use]
pub fn to_output(user: &UserEntity) -> UserOutput {
    UserOutput {
        id: user.id,
        login: user.login.clone(),
        full_name: user.full_name(),
        games_played: user.games_played,
        current_game_id: user.current_game_id,
    }
}

/// Builds a not-yet-stored user from a create request.
#[must_use]
pub fn from_create_input(input: UserCreateInput) -> UserEntity {
    UserEntity::new(input.login, input.first_name, input.last_name)
}

/// Overwrites login and names. Game statistics are left untouched.
pub fn apply_update_input(input: UserUpdateInput, user: &mut UserEntity) {
    user.login = input.login;
    user.first_name = input.first_name;
    user.last_name = input.last_name;
}

impl From<&UserEntity> for UserOutput {
    fn from(user: &UserEntity) -> Self {
        to_output(user)
    }
}

impl From<UserEntity> for UserOutput {
    fn from(user: UserEntity) -> Self {
        Self {
            full_name: user.full_name(),
            id: user.id,
            login: user.login,
            games_played: user.games_played,
            current_game_id: user.current_game_id,
        }
    }
}

impl From<UserCreateInput> for UserEntity {
    fn from(input: UserCreateInput) -> Self {
        from_create_input(input)
    }
}
