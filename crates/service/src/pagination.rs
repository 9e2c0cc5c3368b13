//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and the skip/take conversion.

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub page_size: u32,
}

impl Pagination {
    /// `None` unless a page size was supplied; without one there is nothing to take.
    /// A missing page means the first page.
    pub fn from_query(page: Option<u32>, page_size: Option<u32>) -> Option<Self> {
        let page_size = page_size?;
        Some(Self { page: page.unwrap_or(1), page_size })
    }

    /// Convert to `(skip, take)`: skip `(page-1)*page_size`, take `page_size`.
    /// Page 0 is read as page 1.
    pub fn normalize(self) -> (u64, u64) {
        let page = self.page.max(1);
        let page_size = u64::from(self.page_size);
        ((u64::from(page) - 1) * page_size, page_size)
    }
}
