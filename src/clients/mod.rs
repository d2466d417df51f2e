//! HTTP client types for panel API communication.
//!
//! This module provides the transport layer and the two client facades.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client that signs and sends requests
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response with the panel envelope stripped
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`rest::RestClient`]: Verb-per-method client rooted at `/api`
//! - [`AdminClient`]: Facade for application API keys
//! - [`UserClient`]: Facade for client API keys
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::clients::{HttpClient, HttpMethod};
//!
//! let client = HttpClient::new("/api", &config);
//! let response = client
//!     .call("application/locations", HttpMethod::Get, None, false)
//!     .await?;
//! println!("{}", response.data);
//! ```
//!
//! # Failures
//!
//! Every non-2xx answer becomes [`HttpError::Response`] carrying the
//! panel's error entries. Nothing is retried.

mod admin;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod user;

pub use admin::AdminClient;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, PANEL_ACCEPT, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PanelErrorDetail, PanelErrorMeta, RawPagination};
pub use user::UserClient;

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError, API_BASE_PATH};
