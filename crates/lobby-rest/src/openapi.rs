//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use crate::pagination::PaginationMetadata;
use lobby_core::{ErrorResponse, FieldErrors, GameId, UserId};
use lobby_service::{CreatedUser, PatchOperation, UserCreateInput, UserOutput, UserUpdateInput};
use utoipa::OpenApi;

/// OpenAPI documentation for the Lobby users API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lobby Users API",
        version = "1.0.0",
        description = "CRUD, paging and JSON Patch over lobby users",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::head_user,
        crate::controllers::user_controller::replace_user,
        crate::controllers::user_controller::patch_user,
        crate::controllers::user_controller::delete_user,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserId,
            GameId,
            ErrorResponse,
            FieldErrors,
            UserCreateInput,
            UserUpdateInput,
            UserOutput,
            CreatedUser,
            PatchOperation,
            PaginationMetadata,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User resource endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/users"));
        assert!(doc.paths.paths.contains_key("/api/users/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
