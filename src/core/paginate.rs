//! Pagination of an already-filtered result sequence

use serde::{Deserialize, Serialize};

const MAX_PER_PAGE: usize = 100;

/// A page request with clamped accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    page: usize,
    per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get page size, clamped to 1..=100
    pub fn per_page(&self) -> usize {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub per_page: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        // per_page is already clamped by PageRequest, but never divide by zero
        let per_page = per_page.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(per_page) };
        // Saturate so absurd page numbers yield an empty page, not a panic
        let start = (page.max(1) - 1).saturating_mul(per_page);

        Self {
            page: page.max(1),
            per_page,
            total,
            total_pages,
            has_next: start.saturating_add(per_page) < total,
            has_prev: page > 1,
        }
    }
}

/// One page of a result sequence plus its metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<R> {
    pub items: Vec<R>,
    pub meta: PageMeta,
}

/// Slice an already-filtered result sequence into one page.
///
/// Pages past the end yield an empty item list with correct metadata.
pub fn paginate<R: Clone>(results: &[R], request: PageRequest) -> Page<R> {
    let meta = PageMeta::new(request.page(), request.per_page(), results.len());
    let start = (meta.page - 1).saturating_mul(meta.per_page);
    let items = results
        .iter()
        .skip(start)
        .take(meta.per_page)
        .cloned()
        .collect();

    Page { items, meta }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), 1);

        let request = PageRequest::new(3, 500);
        assert_eq!(request.page(), 3);
        assert_eq!(request.per_page(), 100);
    }

    #[test]
    fn test_page_meta() {
        let meta = PageMeta::new(1, 20, 145);
        assert_eq!(meta.total, 145);
        assert_eq!(meta.total_pages, 8);
        assert!(!meta.has_prev);
        assert!(meta.has_next);
    }

    #[test]
    fn test_page_meta_empty_total() {
        let meta = PageMeta::new(1, 20, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_paginate_slices_in_order() {
        let results: Vec<u32> = (1..=45).collect();

        let page = paginate(&results, PageRequest::new(2, 20));
        assert_eq!(page.items.first(), Some(&21));
        assert_eq!(page.items.last(), Some(&40));
        assert_eq!(page.meta.total_pages, 3);
        assert!(page.meta.has_next);
        assert!(page.meta.has_prev);

        let last = paginate(&results, PageRequest::new(3, 20));
        assert_eq!(last.items.len(), 5);
        assert!(!last.meta.has_next);
    }

    #[test]
    fn test_paginate_huge_page_number_is_empty() {
        let results: Vec<u32> = (1..=5).collect();
        let page = paginate(&results, PageRequest::new(usize::MAX, 100));
        assert!(page.items.is_empty());
        assert_eq!(page.meta.page, usize::MAX);
        assert!(!page.meta.has_next);
        assert!(page.meta.has_prev);
    }

    #[test]
    fn test_paginate_past_the_end_is_empty() {
        let results: Vec<u32> = (1..=5).collect();
        let page = paginate(&results, PageRequest::new(9, 20));
        assert!(page.items.is_empty());
        assert_eq!(page.meta.total, 5);
        assert!(!page.meta.has_next);
        assert!(page.meta.has_prev);
    }
}
