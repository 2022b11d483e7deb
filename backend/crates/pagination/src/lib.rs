//! Offset pagination primitives shared by list endpoints.
//!
//! A [`PageRequest`] carries a 1-based page number and a page size. Applying
//! it to a fully materialised collection with [`Paginated::from_collection`]
//! yields the requested slice together with a [`PaginationMeta`] block whose
//! totals are always derived from the collection that was actually sliced.
//!
//! Page sizes at or above [`UNPAGINATED_LIMIT`] request the whole collection;
//! the page number is then echoed back but ignored for slicing.
//!
//! # Examples
//! ```
//! use pagination::{PageRequest, Paginated};
//!
//! let items: Vec<u32> = (0..25).collect();
//! let request = PageRequest::new(3, 10).expect("valid request");
//! let page = Paginated::from_collection(items, request);
//!
//! assert_eq!(page.data, vec![20, 21, 22, 23, 24]);
//! assert_eq!(page.pagination.total, 25);
//! assert_eq!(page.pagination.total_pages, 3);
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page sizes at or above this value return the whole collection.
pub const UNPAGINATED_LIMIT: u32 = 1000;

/// Page number used when the caller does not supply one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Validation failures raised by [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The page number was zero.
    #[error("page must be a positive integer")]
    InvalidPage,
    /// The page size was zero.
    #[error("limit must be a positive integer")]
    InvalidLimit,
}

/// Validated offset page request.
///
/// ## Invariants
/// - `page >= 1`
/// - `limit >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a request from a 1-based page number and a page size.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when either value is zero.
    pub const fn new(page: u32, limit: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::InvalidPage);
        }
        if limit == 0 {
            return Err(PageRequestError::InvalidLimit);
        }
        Ok(Self { page, limit })
    }

    /// The 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// The requested page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Whether the request asks for the whole collection.
    #[must_use]
    pub const fn is_unpaginated(&self) -> bool {
        self.limit >= UNPAGINATED_LIMIT
    }

    /// Half-open index window selected from a collection of `total` items.
    ///
    /// Both bounds are clamped to `0..=total`, so pages past the end produce an
    /// empty window rather than an error.
    ///
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::new(30, 10).expect("valid request");
    /// assert!(request.window(255).is_empty());
    /// ```
    #[must_use]
    pub fn window(&self, total: usize) -> Range<usize> {
        if self.is_unpaginated() {
            return 0..total;
        }
        let limit = limit_as_usize(self.limit);
        let offset = u64::from(self.page - 1) * u64::from(self.limit);
        let start = usize::try_from(offset).map_or(total, |value| value.min(total));
        let end = start.saturating_add(limit).min(total);
        start..end
    }

    /// Number of pages needed to cover `total` items at this page size.
    #[must_use]
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(limit_as_usize(self.limit))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn limit_as_usize(limit: u32) -> usize {
    usize::try_from(limit).unwrap_or(usize::MAX)
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Size of the whole collection before slicing.
    pub total: usize,
    /// Echo of the requested page number.
    pub page: u32,
    /// Echo of the requested page size.
    pub limit: u32,
    /// `ceil(total / limit)`.
    pub total_pages: usize,
}

/// A page of results wrapped with its pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Items selected by the page window.
    pub data: Vec<T>,
    /// Totals and the echoed request.
    pub pagination: PaginationMeta,
}

impl<T> Paginated<T> {
    /// Slice `items` according to `request`.
    ///
    /// Ordering is preserved; callers sort before paginating.
    #[must_use]
    pub fn from_collection(items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len();
        let window = request.window(total);
        let data = if request.is_unpaginated() {
            items
        } else {
            items
                .into_iter()
                .skip(window.start)
                .take(window.len())
                .collect()
        };

        Self {
            data,
            pagination: PaginationMeta {
                total,
                page: request.page(),
                limit: request.limit(),
                total_pages: request.total_pages(total),
            },
        }
    }

    /// Convert every item while keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests;
