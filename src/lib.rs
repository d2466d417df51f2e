//! # Pterodactyl API Rust Client
//!
//! A typed Rust client for the Pterodactyl game server panel, covering the
//! application API (administrator keys) and the client API (user keys).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PanelConfig`] and [`PanelConfigBuilder`]
//! - Validated newtypes for the panel URL and API key
//! - Async HTTP transport that unwraps the panel's response envelope
//! - Plain entity records with a shared [`rest::PanelResource`] trait
//! - Pagination cursors attached to every entity of a list call
//! - Partial updates with an optimistic copy and an explicit confirm step
//! - [`AdminClient`] and [`UserClient`] facades
//!
//! ## Quick Start
//!
//! ```rust
//! use pterodactyl_api::{ApiKey, PanelConfig, PanelUrl};
//!
//! let config = PanelConfig::builder()
//!     .panel_url(PanelUrl::new("https://panel.example.com").unwrap())
//!     .api_key(ApiKey::new("ptla_example").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Connecting
//!
//! [`AdminClient::connect`] and [`UserClient::connect`] perform one
//! request to verify the key. Use `new` to skip the check.
//!
//! ```rust,ignore
//! use pterodactyl_api::AdminClient;
//!
//! let admin = AdminClient::connect(&config).await?;
//! let page = admin.users(None).await?;
//! println!("{} of {} users", page.len(), page.pagination().map_or(0, |p| p.total_items()));
//! ```
//!
//! ## Updating Entities
//!
//! Updates never mutate the entity they start from. They return a pending
//! update holding the locally applied copy and the request:
//!
//! ```rust,ignore
//! use pterodactyl_api::rest::PanelResource;
//! use pterodactyl_api::rest::resources::User;
//!
//! let user = User::find(admin.rest(), 1).await?.into_inner();
//! let pending = user.set_email(admin.rest(), "new@example.com")?;
//! assert_eq!(pending.optimistic().email, "new@example.com");
//! let stored = pending.confirm().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Every failure reaches the caller unchanged

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, PanelConfig, PanelConfigBuilder, PanelUrl};
pub use error::{ConfigError, ConnectError};

// Re-export client types
pub use clients::{
    AdminClient, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, UserClient,
};
