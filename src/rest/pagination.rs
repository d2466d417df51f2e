//! Page-number pagination for list endpoints.
//!
//! Every list endpoint of the panel answers with a `meta.pagination` block.
//! [`PaginationCursor`] is the immutable value built from that block. It
//! describes one page and never fetches anything itself: to move on, call the
//! listing operation again with [`PaginationCursor::next_page`].
//!
//! # Example
//!
//! ```rust
//! use pterodactyl_api::clients::RawPagination;
//! use pterodactyl_api::rest::{resolve_page, PaginationCursor};
//!
//! let cursor = PaginationCursor::new(&RawPagination {
//!     total: 32,
//!     count: 10,
//!     per_page: 10,
//!     current_page: 1,
//!     total_pages: 4,
//! });
//!
//! assert!(cursor.has_next_page());
//! assert_eq!(cursor.next_page(), Some(2));
//! assert_eq!(resolve_page(None), 1);
//! ```

use crate::clients::RawPagination;

/// Metadata describing one page of a list response.
///
/// All entities hydrated from the same list call carry an identical copy of
/// the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationCursor {
    current_page: u32,
    total_pages: u32,
    total_items: u64,
    items_per_page: u32,
    count: u32,
}

impl PaginationCursor {
    /// Builds a cursor from the raw `meta.pagination` block.
    #[must_use]
    pub const fn new(raw: &RawPagination) -> Self {
        Self {
            current_page: raw.current_page,
            total_pages: raw.total_pages,
            total_items: raw.total,
            items_per_page: raw.per_page,
            count: raw.count,
        }
    }

    /// One-indexed number of this page.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Number of entities across all pages.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Page size the panel used for this listing.
    #[must_use]
    pub const fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    /// Number of entities on this page.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Returns `true` if a page follows this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` if a page precedes this one.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    /// The page number to request next, if any.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_next_page() {
            Some(self.current_page + 1)
        } else {
            None
        }
    }

    /// The page number to request for the previous page, if any.
    #[must_use]
    pub const fn prev_page(&self) -> Option<u32> {
        if self.has_prev_page() {
            Some(self.current_page - 1)
        } else {
            None
        }
    }
}

impl From<RawPagination> for PaginationCursor {
    fn from(raw: RawPagination) -> Self {
        Self::new(&raw)
    }
}

/// Resolves the page number a listing call requests.
///
/// `None` and `Some(0)` both resolve to page `1`. The panel numbers pages
/// from one, so a page `0` cannot be told apart from "no page given" and is
/// coerced rather than rejected.
#[must_use]
pub const fn resolve_page(page: Option<u32>) -> u32 {
    match page {
        None | Some(0) => 1,
        Some(page) => page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(current_page: u32, total_pages: u32) -> RawPagination {
        RawPagination {
            total: 95,
            count: 10,
            per_page: 10,
            current_page,
            total_pages,
        }
    }

    #[test]
    fn test_cursor_copies_raw_block() {
        let cursor = PaginationCursor::new(&raw(2, 10));

        assert_eq!(cursor.current_page(), 2);
        assert_eq!(cursor.total_pages(), 10);
        assert_eq!(cursor.total_items(), 95);
        assert_eq!(cursor.items_per_page(), 10);
        assert_eq!(cursor.count(), 10);
    }

    #[test]
    fn test_navigation_on_first_page() {
        let cursor = PaginationCursor::from(raw(1, 10));

        assert!(cursor.has_next_page());
        assert!(!cursor.has_prev_page());
        assert_eq!(cursor.next_page(), Some(2));
        assert_eq!(cursor.prev_page(), None);
    }

    #[test]
    fn test_navigation_on_last_page() {
        let cursor = PaginationCursor::from(raw(10, 10));

        assert!(!cursor.has_next_page());
        assert!(cursor.has_prev_page());
        assert_eq!(cursor.next_page(), None);
        assert_eq!(cursor.prev_page(), Some(9));
    }

    #[test]
    fn test_empty_listing_has_no_neighbours() {
        let cursor = PaginationCursor::from(RawPagination {
            total: 0,
            count: 0,
            per_page: 50,
            current_page: 1,
            total_pages: 0,
        });

        assert!(!cursor.has_next_page());
        assert!(!cursor.has_prev_page());
    }

    #[test]
    fn test_resolve_page_defaults_to_first_page() {
        assert_eq!(resolve_page(None), 1);
        assert_eq!(resolve_page(Some(0)), 1);
        assert_eq!(resolve_page(Some(1)), 1);
        assert_eq!(resolve_page(Some(3)), 3);
    }
}
