//! Optimistic partial updates.
//!
//! Update operations never touch the caller's entity. They return a
//! [`PendingUpdate`], which holds two views of the same change:
//!
//! - [`PendingUpdate::optimistic`]: a copy of the entity with the changed
//!   fields applied locally, available before any I/O
//! - [`PendingUpdate::confirm`]: the single PATCH call, resolving to the
//!   entity the panel answered with
//!
//! The panel's answer is authoritative. It may differ from the optimistic
//! copy when the panel normalizes or rejects part of a change.
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::rest::resources::Location;
//!
//! let location = Location::find(&client, 3).await?.into_inner();
//!
//! let pending = location.set_long(&client, "Frankfurt am Main")?;
//! assert_eq!(pending.optimistic().long.as_deref(), Some("Frankfurt am Main"));
//!
//! let confirmed = pending.confirm().await?;
//! println!("Panel stored: {:?}", confirmed.long);
//! ```
//!
//! # Concurrency
//!
//! Nothing guards two pending updates prepared from clones of the same
//! entity. Each carries its own optimistic copy, and the panel applies the
//! PATCH calls in whatever order they arrive.

use serde::Serialize;
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::resource::single_response;
use crate::rest::{build_request, PanelResource, RequestBody, ResourceError, ResourceResponse};

/// A set of field changes for one update endpoint of an entity.
///
/// Implementors serialize only the fields that are set (remote names), and
/// apply the same fields to a local copy of the entity.
pub trait EntityChanges<T>: Serialize {
    /// Applies the changed fields to `entity`.
    fn apply_to(&self, entity: &mut T);
}

/// An update that has been computed but not yet sent.
#[derive(Debug)]
#[must_use = "a pending update does nothing until it is confirmed"]
pub struct PendingUpdate<'c, T> {
    client: &'c RestClient,
    path: String,
    body: RequestBody,
    optimistic: T,
}

impl<'c, T: PanelResource> PendingUpdate<'c, T> {
    /// Computes the request body and the optimistic copy for a change.
    ///
    /// `path` is the PATCH target relative to `/api`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the base or the changes
    /// cannot be serialized to JSON objects.
    pub fn prepare<B, C>(
        client: &'c RestClient,
        path: String,
        entity: &T,
        base: &B,
        changes: &C,
    ) -> Result<Self, ResourceError>
    where
        B: Serialize + ?Sized,
        C: EntityChanges<T>,
    {
        let body = build_request(base, changes)?;

        let mut optimistic = entity.clone();
        changes.apply_to(&mut optimistic);

        Ok(Self {
            client,
            path,
            body,
            optimistic,
        })
    }

    /// The entity as it will look if the panel accepts the change.
    pub const fn optimistic(&self) -> &T {
        &self.optimistic
    }

    /// The request body that [`confirm`](Self::confirm) will send.
    pub const fn body(&self) -> &RequestBody {
        &self.body
    }

    /// The PATCH target, relative to `/api`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Discards the request and keeps the optimistic copy.
    pub fn into_optimistic(self) -> T {
        self.optimistic
    }

    /// Sends the update and hydrates the panel's answer.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the entity no longer exists,
    /// [`ResourceError::ValidationFailed`] if the panel rejects the body, and
    /// the wrapped transport error for anything else.
    pub async fn confirm(self) -> Result<ResourceResponse<T>, ResourceError> {
        let id = self.optimistic.get_id().to_string();
        tracing::debug!(resource = T::NAME, %id, path = %self.path, "Confirming update");

        let response = self
            .client
            .patch(&self.path, Value::Object(self.body))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, T::NAME, Some(&id)))?;

        single_response(response)
    }
}
