//! REST API client for the panel.
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `patch()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Path Normalization
//!
//! Paths are relative to `/api`. Leading and trailing slashes are stripped,
//! so `/application/users` and `application/users/` address the same route.

mod client;
mod errors;

pub use client::{RestClient, API_BASE_PATH};
pub use errors::RestError;
