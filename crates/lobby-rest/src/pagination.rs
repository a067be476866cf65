//! Pagination metadata carried in the `X-Pagination` response header.

use crate::links::LinkGenerator;
use axum::http::{HeaderName, HeaderValue};
use lobby_core::{LobbyError, LobbyResult, Page};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name of the pagination header.
pub static X_PAGINATION: HeaderName = HeaderName::from_static("x-pagination");

/// Page bounds and neighbour links for a list response.
///
/// Sent as a header so that the body stays a plain array of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
    pub total_count: u64,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: u64,
}

impl PaginationMetadata {
    /// Builds the metadata for `page`, linking neighbours with the same page size.
    pub fn build<T>(page: &Page<T>, links: &dyn LinkGenerator) -> Self {
        let info = &page.info;
        Self {
            previous_page_link: info
                .has_previous()
                .then(|| links.users_page(info.current_page - 1, info.page_size)),
            next_page_link: info
                .has_next()
                .then(|| links.users_page(info.current_page + 1, info.page_size)),
            total_count: info.total_count,
            page_size: info.page_size,
            current_page: info.current_page,
            total_pages: info.total_pages,
        }
    }

    /// Serializes the metadata into a header value.
    pub fn header_value(&self) -> LobbyResult<HeaderValue> {
        let json = serde_json::to_string(self)?;
        HeaderValue::from_str(&json)
            .map_err(|e| LobbyError::internal(format!("Invalid pagination header: {}", e)))
    }
}
