//! Zero-based paging shared by every listing endpoint.
//!
//! - [`PageRequest`]: `?page=&size=` query parameters, normalized before use
//! - [`Page`]: a window of results plus total-count metadata
//! - [`Slice`]: a window of results plus a `hasNext` flag, for queries where
//!   counting the whole result set is not worth the cost
//!
//! JSON field names are camelCase (`totalElements`, `hasNext`, ...).

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Page size used when the request does not give one
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound on `size`; larger requests are clamped
pub const MAX_PAGE_SIZE: u64 = 100;

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

/// Paging parameters taken from the query string
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    /// Zero-based page index
    #[serde(default)]
    pub page: u64,
    /// Items per page (1..=100)
    #[serde(default = "default_size")]
    pub size: u64,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self { page, size }.normalize()
    }

    /// Clamp `size` into `1..=MAX_PAGE_SIZE`
    pub fn normalize(self) -> Self {
        Self {
            page: self.page,
            size: self.size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of documents to skip, capped at the largest `skip` the
    /// MongoDB driver can send (`i64::MAX`)
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(i64::MAX as u64)
    }

    /// `size` as the signed limit the MongoDB driver expects
    pub fn limit(&self) -> i64 {
        i64::try_from(self.size).unwrap_or(i64::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A page of results with total-count metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index
    pub number: u64,
    /// Requested page size
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
    pub number_of_elements: u64,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(request.size.max(1));
        let number_of_elements = content.len() as u64;

        Self {
            number: request.page,
            size: request.size,
            total_elements,
            total_pages,
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
            number_of_elements,
            empty: content.is_empty(),
            content,
        }
    }
}

/// A window of results with a `hasNext` flag and no total count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Slice<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub first: bool,
    pub last: bool,
    pub has_next: bool,
    pub number_of_elements: u64,
    pub empty: bool,
}

impl<T> Slice<T> {
    /// Build a slice from a probe query that fetched up to `size + 1` rows.
    ///
    /// The extra row, if present, only sets `has_next` and is dropped.
    pub fn from_probe(mut rows: Vec<T>, request: PageRequest) -> Self {
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let has_next = rows.len() > size;
        rows.truncate(size);

        Self {
            number: request.page,
            size: request.size,
            first: request.page == 0,
            last: !has_next,
            has_next,
            number_of_elements: rows.len() as u64,
            empty: rows.is_empty(),
            content: rows,
        }
    }

    /// Limit for the probe query backing [`Slice::from_probe`]
    pub fn probe_limit(request: PageRequest) -> i64 {
        request.limit().saturating_add(1)
    }
}
