//! Required request body extractors.
//!
//! Axum's `Json` rejects with plain-text 415/422 responses. These extractors
//! report every body problem as a 400 in the API's error format instead.

use crate::responses::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use lobby_core::LobbyError;
use lobby_service::PatchOperation;
use serde::de::DeserializeOwned;

fn is_xml(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/xml" || mime == "text/xml" || mime.ends_with("+xml")
        })
        .unwrap_or(false)
}

async fn required_bytes<S>(req: Request, state: &S) -> Result<Bytes, AppError>
where
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|e| AppError(LobbyError::bad_request(e.body_text())))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError(LobbyError::bad_request("A request body is required")));
    }
    Ok(bytes)
}

fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(bytes)
        .map_err(|e| AppError(LobbyError::bad_request(format!("Invalid JSON body: {}", e))))
}

fn parse_xml<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| AppError(LobbyError::bad_request(format!("Invalid XML body: {}", e))))?;
    quick_xml::de::from_str(text)
        .map_err(|e| AppError(LobbyError::bad_request(format!("Invalid XML body: {}", e))))
}

/// A required body in JSON or XML, chosen by `Content-Type`.
///
/// Anything not declared as XML is parsed as JSON.
#[derive(Debug, Clone)]
pub struct InputBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for InputBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let xml = is_xml(req.headers());
        let bytes = required_bytes(req, state).await?;

        let value = if xml {
            parse_xml(&bytes)?
        } else {
            parse_json(&bytes)?
        };
        Ok(Self(value))
    }
}

/// A required JSON patch document.
#[derive(Debug, Clone)]
pub struct PatchDocument(pub Vec<PatchOperation>);

#[async_trait]
impl<S> FromRequest<S> for PatchDocument
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = required_bytes(req, state).await?;
        Ok(Self(parse_json(&bytes)?))
    }
}
