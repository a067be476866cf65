//! Patch documents for partial user updates.
//!
//! A patch document is a JSON array of operations in the JSON Patch shape:
//!
//! ```json
//! [
//!   { "op": "replace", "path": "/login", "value": "ada" },
//!   { "op": "copy", "from": "/login", "path": "/lastName" }
//! ]
//! ```
//!
//! Operations target the top-level fields of [`UserUpdateInput`] and run in
//! order. An invalid operation is recorded against its path and the rest of
//! the document still runs, so a client sees every problem at once.

use crate::dto::UserUpdateInput;
use lobby_core::FieldErrors;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One operation of a patch document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatchOperation {
    /// `add`, `replace`, `remove`, `copy`, `move` or `test`.
    pub op: String,

    /// Target field, e.g. `/firstName`.
    pub path: String,

    /// `Some(Value::Null)` when the document carries an explicit `null`.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Object)]
    pub value: Option<Value>,

    /// Source field for `copy` and `move`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl PatchOperation {
    /// Creates a `replace` operation setting `path` to a string.
    #[must_use]
    pub fn replace(path: &str, value: &str) -> Self {
        Self {
            op: "replace".to_string(),
            path: path.to_string(),
            value: Some(Value::String(value.to_string())),
            from: None,
        }
    }

    /// Creates a `remove` operation.
    #[must_use]
    pub fn remove(path: &str) -> Self {
        Self {
            op: "remove".to_string(),
            path: path.to_string(),
            value: None,
            from: None,
        }
    }
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Login,
    FirstName,
    LastName,
}

impl Field {
    fn parse(path: &str) -> Option<Self> {
        let name = path.strip_prefix('/').unwrap_or(path);
        match name.to_ascii_lowercase().as_str() {
            "login" => Some(Self::Login),
            "firstname" => Some(Self::FirstName),
            "lastname" => Some(Self::LastName),
            _ => None,
        }
    }

    const fn wire_name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
        }
    }

    fn get(self, target: &UserUpdateInput) -> &str {
        match self {
            Self::Login => &target.login,
            Self::FirstName => &target.first_name,
            Self::LastName => &target.last_name,
        }
    }

    fn slot(self, target: &mut UserUpdateInput) -> &mut String {
        match self {
            Self::Login => &mut target.login,
            Self::FirstName => &mut target.first_name,
            Self::LastName => &mut target.last_name,
        }
    }
}

/// Key under which errors for a path are reported.
fn error_key(path: &str) -> String {
    Field::parse(path).map_or_else(
        || path.strip_prefix('/').unwrap_or(path).to_string(),
        |field| field.wire_name().to_string(),
    )
}

fn string_value(operation: &PatchOperation) -> Result<String, String> {
    match &operation.value {
        None => Err(format!("'{}' requires a value", operation.op)),
        Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err("value must be a string".to_string()),
    }
}

fn source_field(operation: &PatchOperation) -> Result<Field, String> {
    let from = operation
        .from
        .as_deref()
        .ok_or_else(|| format!("'{}' requires a from path", operation.op))?;
    Field::parse(from).ok_or_else(|| format!("unknown from path '{}'", from))
}

fn apply_one(target: &mut UserUpdateInput, operation: &PatchOperation) -> Result<(), String> {
    let field =
        Field::parse(&operation.path).ok_or_else(|| format!("unknown path '{}'", operation.path))?;

    match operation.op.to_ascii_lowercase().as_str() {
        "add" | "replace" => {
            *field.slot(target) = string_value(operation)?;
        }
        "remove" => {
            field.slot(target).clear();
        }
        "copy" => {
            let source = source_field(operation)?;
            *field.slot(target) = source.get(target).to_string();
        }
        "move" => {
            let source = source_field(operation)?;
            let moved = std::mem::take(source.slot(target));
            *field.slot(target) = moved;
        }
        "test" => {
            let expected = string_value(operation)?;
            let actual = field.get(target);
            if actual != expected {
                return Err(format!("test failed: expected '{}', found '{}'", expected, actual));
            }
        }
        other => return Err(format!("unsupported operation '{}'", other)),
    }
    Ok(())
}

/// Applies `operations` to `target` in order.
///
/// Returns the errors of every operation that could not be applied, keyed by
/// the operation's path. Successful operations are kept even if a later one
/// fails.
pub fn apply_patch(target: &mut UserUpdateInput, operations: &[PatchOperation]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for operation in operations {
        if let Err(message) = apply_one(target, operation) {
            errors.add(error_key(&operation.path), message);
        }
    }
    errors
}
