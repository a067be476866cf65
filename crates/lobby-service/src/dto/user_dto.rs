//! User-related DTOs.

use lobby_core::{GameId, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Reads an optional string, mapping `null` to the empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request to create a new user.
///
/// Missing or `null` fields deserialize as empty strings so that an absent
/// login is reported by validation rather than by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCreateInput {
    #[validate(
        length(min = 1, message = "required"),
        custom(function = "lobby_core::rules::alphanumeric")
    )]
    #[serde(deserialize_with = "null_as_empty")]
    pub login: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
}

/// Replacement values for a user's login and names.
///
/// Used as the body of a full replace and as the projection that patch
/// operations are applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserUpdateInput {
    #[validate(length(min = 1, message = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub login: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
}

/// User read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserOutput {
    pub id: UserId,
    pub login: String,
    /// First and last name separated by a single space.
    pub full_name: String,
    pub games_played: i32,
    pub current_game_id: Option<GameId>,
}

/// Body returned when a user is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedUser {
    pub id: UserId,
}
