//! User resource controller.

use crate::{
    extractors::{AcceptPreference, InputBody, Pagination, PatchDocument, Representation},
    pagination::{PaginationMetadata, X_PAGINATION},
    responses::{negotiated, negotiated_users, no_content, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::{
        header::{CONTENT_TYPE, LOCATION},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use lobby_core::{ErrorResponse, LobbyError, UserId};
use lobby_service::{
    CreatedUser, PatchOperation, ReplaceOutcome, UserCreateInput, UserOutput, UserUpdateInput,
};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user)
                .head(head_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserOutput),
        (status = 400, description = "Malformed user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 406, description = "No supported representation", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    accept: AcceptPreference,
    Path(id): Path<String>,
) -> ApiResult {
    debug!("Get user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let user = state.user_service.get_user(user_id).await?;
    negotiated(StatusCode::OK, accept.negotiate()?, "user", &user)
}

/// Check that a user exists without transferring it.
#[utoipa::path(
    head,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User exists"),
        (status = 404, description = "User not found")
    )
)]
pub async fn head_user(
    State(state): State<AppState>,
    accept: AcceptPreference,
    Path(id): Path<String>,
) -> ApiResult {
    debug!("Head user request: {}", id);

    let user_id = parse_user_id(&id)?;
    state.user_service.get_user(user_id).await?;
    let representation = accept.negotiate()?;
    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static(representation.content_type()))],
    )
        .into_response())
}

/// List users one page at a time.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(
        ("pageNumber" = Option<i64>, Query, description = "1-based page number, clamped to at least 1"),
        ("pageSize" = Option<i64>, Query, description = "Page size, clamped to 1..=20 (default 10)")
    ),
    responses(
        (status = 200, description = "One page of users; bounds and links in the X-Pagination header", body = [UserOutput]),
        (status = 400, description = "Non-numeric paging parameter", body = ErrorResponse),
        (status = 406, description = "No supported representation", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    accept: AcceptPreference,
    Pagination(page_request): Pagination,
) -> ApiResult {
    debug!(
        "List users request: page {} size {}",
        page_request.page_number, page_request.page_size
    );

    let page = state.user_service.list_users(page_request).await?;
    let metadata = PaginationMetadata::build(&page, state.links.as_ref());

    let mut response = negotiated_users(accept.negotiate()?, &page.items)?;
    response
        .headers_mut()
        .insert(X_PAGINATION.clone(), metadata.header_value()?);
    Ok(response)
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = UserCreateInput,
    responses(
        (status = 201, description = "User created", body = CreatedUser),
        (status = 400, description = "Missing or malformed body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    accept: AcceptPreference,
    InputBody(input): InputBody<UserCreateInput>,
) -> ApiResult {
    debug!("Create user request: {}", input.login);

    let representation = accept.negotiate()?;
    let user = state.user_service.create_user(input).await?;
    created(&state, representation, user.id)
}

/// Replace a user, creating it under the given ID if absent.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UserUpdateInput,
    responses(
        (status = 201, description = "User created under the given ID", body = CreatedUser),
        (status = 204, description = "User replaced"),
        (status = 400, description = "Malformed ID or body", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse)
    )
)]
pub async fn replace_user(
    State(state): State<AppState>,
    accept: AcceptPreference,
    Path(id): Path<String>,
    InputBody(input): InputBody<UserUpdateInput>,
) -> ApiResult {
    debug!("Replace user request: {}", id);

    let user_id = parse_user_id(&id)?;
    match state.user_service.replace_user(user_id, input).await? {
        ReplaceOutcome::Created(user) => created(&state, accept.negotiate()?, user.id),
        ReplaceOutcome::Replaced => Ok(no_content().into_response()),
    }
}

/// Apply a patch document to a user.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    request_body = [PatchOperation],
    responses(
        (status = 204, description = "User patched"),
        (status = 400, description = "Malformed ID or patch document", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Patched user failed validation", body = ErrorResponse)
    )
)]
pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    PatchDocument(operations): PatchDocument,
) -> Result<StatusCode, AppError> {
    debug!("Patch user request: {}", id);

    let user_id = parse_user_id(&id)?;
    state.user_service.patch_user(user_id, operations).await?;
    Ok(no_content())
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed user ID", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;
    state.user_service.delete_user(user_id).await?;
    Ok(no_content())
}

/// 201 with a `Location` link to the user and its id as the body.
fn created(state: &AppState, representation: Representation, id: UserId) -> ApiResult<Response> {
    let location = HeaderValue::from_str(&state.links.user(id))
        .map_err(|e| LobbyError::internal(format!("Invalid location header: {}", e)))?;

    let mut response = negotiated(StatusCode::CREATED, representation, "user", &CreatedUser { id })?;
    response.headers_mut().insert(LOCATION, location);
    Ok(response)
}

/// Helper to parse user ID from path parameter.
fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    Ok(UserId::parse_route(id)?)
}
