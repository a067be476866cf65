//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
///
/// Pages are 1-indexed. Construction clamps out-of-range values instead of
/// rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed, no upper bound).
    pub page_number: usize,
    /// The number of items per page, within `1..=MAX_SIZE`.
    pub page_size: usize,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 10;
    /// The maximum allowed page size.
    pub const MAX_SIZE: usize = 20;

    /// Creates a new page request, clamping both values.
    #[must_use]
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.clamp(1, Self::MAX_SIZE),
        }
    }

    /// Creates a page request from signed query values, clamping negatives up.
    #[must_use]
    pub fn clamped(page_number: i64, page_size: i64) -> Self {
        let to_usize = |n: i64| usize::try_from(n.max(0)).unwrap_or(usize::MAX);
        Self::new(to_usize(page_number), to_usize(page_size))
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }

    /// Returns the index of the first item of the window.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page_number.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Returns the maximum number of items in the window.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// The current page number (1-indexed).
    pub current_page: usize,
    /// The number of items per page.
    pub page_size: usize,
    /// The total number of items across all pages.
    pub total_count: u64,
    /// The total number of pages.
    pub total_pages: u64,
}

impl PageInfo {
    /// Creates a new page info.
    #[must_use]
    pub fn new(current_page: usize, page_size: usize, total_count: u64) -> Self {
        let total_pages = if page_size > 0 {
            total_count.div_ceil(page_size as u64)
        } else {
            0
        };

        Self {
            current_page,
            page_size,
            total_count,
            total_pages,
        }
    }

    /// Whether a page precedes this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a page follows this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.current_page as u64) < self.total_pages
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, in canonical enumeration order.
    pub items: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        Self {
            items,
            info: PageInfo::new(request.page_number, request.page_size, total_count),
        }
    }

    /// Maps the page items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the total number of items across all pages.
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.info.total_count
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.info.total_pages
    }

    /// Returns true if there is a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.info.has_next()
    }

    /// Returns true if there is a previous page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.info.has_previous()
    }
}
