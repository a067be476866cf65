//! Pagination extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use lobby_core::{LobbyError, LobbyResult, PageRequest};
use serde::Deserialize;

/// Query parameters for pagination, kept as text until clamped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    #[serde(default)]
    pub page_number: Option<String>,
    #[serde(default)]
    pub page_size: Option<String>,
}

impl PaginationQuery {
    /// Clamps the query into a page request.
    ///
    /// Integers beyond the `i64` range saturate; non-numeric text is a bad
    /// request. Empty values count as absent.
    #[allow(clippy::cast_possible_wrap)]
    pub fn page_request(&self) -> LobbyResult<PageRequest> {
        let page_number = parse_page_value("pageNumber", self.page_number.as_deref())?.unwrap_or(1);
        let page_size = parse_page_value("pageSize", self.page_size.as_deref())?
            .unwrap_or(PageRequest::DEFAULT_SIZE as i64);
        Ok(PageRequest::clamped(page_number, page_size))
    }
}

fn parse_page_value(name: &str, raw: Option<&str>) -> LobbyResult<Option<i64>> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    let digits = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LobbyError::bad_request(format!(
            "Invalid pagination query: {} must be an integer, got '{}'",
            name, raw
        )));
    }

    let saturated = if raw.starts_with('-') { i64::MIN } else { i64::MAX };
    Ok(Some(raw.parse().unwrap_or(saturated)))
}

/// Clamped page request taken from `pageNumber` and `pageSize`.
///
/// Out-of-range values are clamped; only non-numeric values are rejected.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError(LobbyError::bad_request(format!(
                    "Invalid pagination query: {}",
                    rejection.body_text()
                )))
            })?;
        Ok(Self(query.page_request()?))
    }
}
