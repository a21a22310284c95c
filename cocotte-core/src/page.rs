//! Page-window arithmetic shared by the listing endpoints.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: i64 = 12;
pub const MAX_PAGE_SIZE: i64 = 100;

/// A requested page window, already clamped to sane bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    /// Build a window from raw request values. Pages are 1-based; anything
    /// below 1 becomes 1 and the page size is capped at [`MAX_PAGE_SIZE`].
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Pagination {
        Pagination {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    /// Metadata for a page of a collection with `total` matching rows.
    pub fn page_info(&self, total: i64) -> PageInfo {
        let total = total.max(0);
        PageInfo {
            page: self.page,
            limit: self.limit,
            total,
            total_pages: (total + self.limit - 1) / self.limit,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination::new(None, None)
    }
}

/// What a listing response reports about the collection it pages over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(Pagination { page: 1, limit: 12 }.offset(), 0);
        assert_eq!(Pagination { page: 3, limit: 12 }.offset(), 24);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let info = Pagination { page: 1, limit: 10 }.page_info(25);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total, 25);
    }

    #[test]
    fn test_exact_multiple_does_not_overcount() {
        assert_eq!(Pagination { page: 1, limit: 10 }.page_info(30).total_pages, 3);
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        assert_eq!(Pagination { page: 1, limit: 10 }.page_info(0).total_pages, 0);
    }

    #[test]
    fn test_out_of_range_requests_are_clamped() {
        let p = Pagination::new(Some(0), Some(0));
        assert_eq!(p, Pagination { page: 1, limit: 1 });
        let p = Pagination::new(Some(-3), Some(100_000));
        assert_eq!(p, Pagination { page: 1, limit: MAX_PAGE_SIZE });
    }

    #[test]
    fn test_defaults() {
        let p = Pagination::new(None, None);
        assert_eq!(p, Pagination { page: 1, limit: DEFAULT_PAGE_SIZE });
    }
}
