//! Resource infrastructure for the panel API.
//!
//! This module turns raw panel responses into typed entities and typed
//! changes into request bodies:
//!
//! - **[`PanelResource`] trait**: A standardized interface for CRUD operations
//! - **[`ReadOnlyResource`] marker trait**: Resources that only support reads
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper carrying pagination
//! - **[`PaginationCursor`]**: Page metadata of list responses
//! - **[`build_request`]**: Base-plus-changes request bodies for PATCH calls
//! - **[`PendingUpdate<T>`]**: Optimistic copy plus a confirmable request
//! - **Path building**: Nested resource paths
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! Individual resources (User, Server, ...) live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::clients::RestClient;
//! use pterodactyl_api::rest::PanelResource;
//! use pterodactyl_api::rest::resources::Server;
//!
//! let client = RestClient::new(&config);
//!
//! // List servers, page by page
//! let mut page = Server::all(&client, None).await?;
//! loop {
//!     for server in page.iter() {
//!         println!("- {}", server.name);
//!     }
//!     match page.next_page() {
//!         Some(next) => page = Server::all(&client, Some(next)).await?,
//!         None => break,
//!     }
//! }
//!
//! // Update with an optimistic copy
//! let server = Server::find(&client, 14).await?.into_inner();
//! let pending = server.set_memory(&client, 2048)?;
//! println!("Optimistic: {}", pending.optimistic().limits.memory);
//! let confirmed = pending.confirm().await?;
//! ```

mod errors;
mod pagination;
mod path;
mod request;
mod resource;
mod response;
mod tracking;

pub mod resources;

pub use errors::ResourceError;
pub use pagination::{resolve_page, PaginationCursor};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use request::{build_request, to_object, RequestBody};
pub use resource::{PanelResource, ReadOnlyResource};
pub(crate) use resource::page_query;
pub use response::ResourceResponse;
pub use tracking::{EntityChanges, PendingUpdate};
