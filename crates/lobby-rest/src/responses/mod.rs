//! API response types.

use crate::extractors::Representation;
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use lobby_core::{ErrorResponse, LobbyError, LobbyResult};
use lobby_service::UserOutput;
use serde::Serialize;
use tracing::error;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub LobbyError);

impl From<LobbyError> for AppError {
    fn from(err: LobbyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T = Response> = Result<T, AppError>;

/// XML wrapper for a list of users: `<users><user>..</user></users>`.
#[derive(Debug, Serialize)]
struct UserList<'a> {
    user: &'a [UserOutput],
}

/// Serializes `body` in the given representation.
///
/// `root` names the XML document element; JSON ignores it.
pub fn encode<T: Serialize>(representation: Representation, root: &str, body: &T) -> LobbyResult<Vec<u8>> {
    match representation {
        Representation::Json => Ok(serde_json::to_vec(body)?),
        Representation::Xml => quick_xml::se::to_string_with_root(root, body)
            .map(String::into_bytes)
            .map_err(|e| LobbyError::internal(format!("XML serialization error: {}", e))),
    }
}

/// Builds a response with a body in the negotiated representation.
pub fn negotiated<T: Serialize>(
    status: StatusCode,
    representation: Representation,
    root: &str,
    body: &T,
) -> ApiResult {
    let bytes = encode(representation, root, body)?;
    Ok((
        status,
        [(CONTENT_TYPE, HeaderValue::from_static(representation.content_type()))],
        bytes,
    )
        .into_response())
}

/// Builds a negotiated response for a list of users.
pub fn negotiated_users(representation: Representation, users: &[UserOutput]) -> ApiResult {
    let bytes = match representation {
        Representation::Json => encode(representation, "users", &users)?,
        Representation::Xml => encode(representation, "users", &UserList { user: users })?,
    };
    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static(representation.content_type()))],
        bytes,
    )
        .into_response())
}

/// Helper to create a no content (204) response.
#[must_use]
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
