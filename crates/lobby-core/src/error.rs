//! Unified error types for all layers of the service.

use crate::FieldErrors;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Lobby users service.
///
/// Every variant is local to a single request: none are retried and none are
/// fatal to the process. The REST layer turns them into a status code and a
/// structured body.
#[derive(Error, Debug)]
pub enum LobbyError {
    // ============ Request Errors ============
    /// Malformed or absent request body or route parameter.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// One or more named fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// No representation matches the client's accept preference.
    #[error("Not acceptable: {0}")]
    NotAcceptable(String),

    /// Conflict error (e.g., duplicate identifier)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LobbyError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound { .. } => 404,
            Self::NotAcceptable(_) => 406,
            Self::Conflict(_) => 409,
            Self::Validation(_) => 422,
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::NotAcceptable(_) => "NOT_ACCEPTABLE",
            Self::Conflict(_) => "CONFLICT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        Self::BadRequest(message.into())
    }

    /// Creates a validation error with a single field message.
    #[must_use]
    pub fn field<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        Self::Validation(errors)
    }

    /// Creates a not acceptable error.
    #[must_use]
    pub fn not_acceptable<T: Into<String>>(message: T) -> Self {
        Self::NotAcceptable(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the field errors carried by a validation failure.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LobbyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name to messages, present for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    /// Creates a new error response from a `LobbyError`.
    #[must_use]
    pub fn from_error(error: &LobbyError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            errors: error.field_errors().cloned(),
        }
    }
}

impl From<&LobbyError> for ErrorResponse {
    fn from(error: &LobbyError) -> Self {
        Self::from_error(error)
    }
}
