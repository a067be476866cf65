//! Validation utilities.

use crate::LobbyError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use validator::{Validate, ValidationErrors};

/// Field name to error messages, ordered by field name.
///
/// Field names use the wire (lowerCamelCase) spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Appends every message of `other`.
    pub fn merge(&mut self, other: Self) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Returns the messages recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns true if a field has at least one message.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Turns a non-empty set into `Err(LobbyError::Validation)`.
    pub fn into_result(self) -> Result<(), LobbyError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(LobbyError::Validation(self))
        }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = Self::new();
        for (field, errors) in errors.field_errors() {
            for error in errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                field_errors.add(to_camel_case(&field), message);
            }
        }
        field_errors
    }
}

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `LobbyError` on failure.
    fn validate_request(&self) -> Result<(), LobbyError> {
        self.validate().map_err(validation_errors_to_lobby_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `LobbyError`.
#[must_use]
pub fn validation_errors_to_lobby_error(errors: ValidationErrors) -> LobbyError {
    LobbyError::Validation(FieldErrors::from(errors))
}

/// Converts a Rust field name (`first_name`) to its wire spelling (`firstName`).
#[must_use]
pub fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Common validation functions.
pub mod rules {
    use std::borrow::Cow;
    use validator::ValidationError;

    /// Message reported for logins with characters other than letters and digits.
    pub const ALPHANUMERIC_MESSAGE: &str = "must contain only letters and digits";

    /// Validates that a string holds only letters and digits.
    ///
    /// The empty string passes; pair with a `length(min = 1)` rule to require a value.
    pub fn alphanumeric(value: &str) -> Result<(), ValidationError> {
        if value.chars().all(char::is_alphanumeric) {
            return Ok(());
        }
        let mut error = ValidationError::new("alphanumeric");
        error.message = Some(Cow::Borrowed(ALPHANUMERIC_MESSAGE));
        Err(error)
    }
}
