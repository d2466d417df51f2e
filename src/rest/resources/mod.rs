//! Panel resources.
//!
//! # Application API (admin keys)
//!
//! - [`User`] - panel accounts
//! - [`Node`] - daemon hosts
//! - [`Location`] - groups of nodes
//! - [`Server`] - game servers, as the administrator sees them
//! - [`Nest`] / [`Egg`] - server templates (read-only)
//! - [`NodeAllocation`] - IP and port pairs of a node
//! - [`ServerDatabase`] - databases attached to a server
//!
//! # Client API (user keys)
//!
//! - [`ClientServer`] - servers the key's owner can access
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::rest::PanelResource;
//! use pterodactyl_api::rest::resources::{Egg, Nest};
//!
//! let nests = Nest::all(&client, None).await?;
//! for nest in nests.iter() {
//!     let eggs = Egg::all_in_nest(&client, nest.id, None).await?;
//!     println!("{}: {} eggs", nest.name, eggs.len());
//! }
//! ```

mod allocation;
mod client_server;
mod database;
mod egg;
mod location;
mod nest;
mod node;
mod server;
mod user;

pub use allocation::{NewAllocations, NodeAllocation};
pub use client_server::{
    ClientServer, PowerSignal, ServerUtilization, SftpDetails, Usage,
};
pub use database::{NewServerDatabase, ServerDatabase};
pub use egg::Egg;
pub use location::{Location, LocationChanges, NewLocation};
pub use nest::Nest;
pub use node::{AllocatedResources, NewNode, Node, NodeChanges};
pub use server::{
    FeatureLimits, FeatureLimitsPatch, LimitsPatch, NewServer, NewServerAllocation, Server,
    ServerBuildChanges, ServerContainer, ServerDetailsChanges, ServerLimits,
    ServerStartupChanges,
};
pub use user::{NewUser, User, UserChanges};
