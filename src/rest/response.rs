//! Response wrapper for resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines
//! hydrated entities with the pagination cursor and request ID of the call
//! that produced them. The wrapper implements `Deref` for ergonomic access
//! to the inner data.
//!
//! # Deref Pattern
//!
//! ```rust,ignore
//! let response: ResourceResponse<Vec<Server>> = Server::all(&client, None).await?;
//!
//! for server in response.iter() {
//!     println!("{}", server.name);
//! }
//!
//! if let Some(next) = response.next_page() {
//!     let response = Server::all(&client, Some(next)).await?;
//! }
//! ```

use std::ops::{Deref, DerefMut};

use crate::rest::PaginationCursor;

/// A response from a resource operation.
///
/// # Type Parameters
///
/// * `T` - A single entity (e.g., `User`) or a page of them (`Vec<User>`).
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::clients::RawPagination;
/// use pterodactyl_api::rest::{PaginationCursor, ResourceResponse};
///
/// let cursor = PaginationCursor::new(&RawPagination {
///     total: 3,
///     count: 3,
///     per_page: 50,
///     current_page: 1,
///     total_pages: 1,
/// });
/// let response = ResourceResponse::new(vec!["a", "b", "c"], Some(cursor), None);
///
/// assert_eq!(response.len(), 3);
/// assert!(!response.has_next_page());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Option<PaginationCursor>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Option<PaginationCursor>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            request_id,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the pagination cursor of a list response.
    ///
    /// Single fetches carry no cursor.
    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationCursor> {
        self.pagination.as_ref()
    }

    /// Returns `true` if there is a next page of results.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_next_page())
    }

    /// Returns `true` if there is a previous page of results.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_prev_page())
    }

    /// Returns the page number to request next, if any.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.pagination.and_then(|p| p.next_page())
    }

    /// Returns the page number of the previous page, if any.
    #[must_use]
    pub fn prev_page(&self) -> Option<u32> {
        self.pagination.and_then(|p| p.prev_page())
    }

    /// Returns the request ID from the response headers.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maps the inner data to a new type, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            request_id: self.request_id,
        }
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::RawPagination;

    fn cursor(current_page: u32, total_pages: u32) -> PaginationCursor {
        PaginationCursor::new(&RawPagination {
            total: 120,
            count: 50,
            per_page: 50,
            current_page,
            total_pages,
        })
    }

    #[test]
    fn test_deref_exposes_inner_vec() {
        let response = ResourceResponse::new(vec![1, 2, 3], None, None);

        assert_eq!(response.len(), 3);
        assert_eq!(response[1], 2);
        assert_eq!(response.iter().sum::<i32>(), 6);
    }

    #[test]
    fn test_deref_mut_allows_modification() {
        let mut response = ResourceResponse::new(vec![1], None, None);
        response.push(2);
        assert_eq!(response.into_inner(), vec![1, 2]);
    }

    #[test]
    fn test_single_fetch_has_no_pagination() {
        let response = ResourceResponse::new("node", None, Some("req-1".to_string()));

        assert!(response.pagination().is_none());
        assert!(!response.has_next_page());
        assert!(!response.has_prev_page());
        assert_eq!(response.next_page(), None);
        assert_eq!(response.request_id(), Some("req-1"));
    }

    #[test]
    fn test_middle_page_navigation() {
        let response = ResourceResponse::new(Vec::<u8>::new(), Some(cursor(2, 3)), None);

        assert!(response.has_next_page());
        assert!(response.has_prev_page());
        assert_eq!(response.next_page(), Some(3));
        assert_eq!(response.prev_page(), Some(1));
    }

    #[test]
    fn test_map_preserves_metadata() {
        let response = ResourceResponse::new(vec![1, 2], Some(cursor(1, 3)), Some("r".to_string()));
        let mapped = response.map(|items| items.len());

        assert_eq!(*mapped, 2);
        assert_eq!(mapped.pagination().map(PaginationCursor::current_page), Some(1));
        assert_eq!(mapped.request_id(), Some("r"));
    }
}
