//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default number of forms per listing page (matches the dashboard's 3x3
/// card grid).
pub const DEFAULT_PAGE_SIZE: i64 = 9;

/// Maximum number of forms per listing page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Page-number pagination parameters (`?page=&limit=`).
///
/// Pages are 1-based; out-of-range values are clamped rather than rejected.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// Effective page number (>= 1).
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, clamped to `[1, MAX_PAGE_SIZE]`.
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset for the effective page.
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}
