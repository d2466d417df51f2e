//! Resource trait for panel entities.
//!
//! This module defines the [`PanelResource`] trait. Entities that implement
//! it gain `find()`, `all()`, `create()`, `delete()` and the update plumbing,
//! driven by the path table each resource declares.
//!
//! # Implementing a Resource
//!
//! 1. Define a plain record with serde derives
//! 2. Implement `PanelResource` with the resource's name and paths
//! 3. The trait provides default implementations for every operation
//!
//! An operation without a matching path fails with
//! [`ResourceError::PathResolutionFailed`] before any request is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::rest::PanelResource;
//! use pterodactyl_api::rest::resources::Node;
//!
//! let page = Node::all(&client, None).await?;
//! for node in page.iter() {
//!     println!("{} ({})", node.name, node.fqdn);
//! }
//!
//! let node = Node::find(&client, 2).await?;
//! node.delete(&client).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpResponse, RestClient};
use crate::rest::{
    build_path, get_path, resolve_page, to_object, EntityChanges, PaginationCursor,
    PendingUpdate, ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
};

/// A panel entity that can be fetched, listed, created, updated and deleted.
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name (e.g., "Server"), used in errors
/// - `PATHS`: Available paths for each supported operation
///
/// # Required Bounds
///
/// Entities are plain records: serializable, deserializable, cloneable, and
/// thread-safe.
#[allow(async_fn_in_trait)]
pub trait PanelResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the entity's identifier.
    type Id: Display + Clone + Send + Sync;

    /// The singular name of the resource.
    const NAME: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the entity's identifier.
    fn get_id(&self) -> Self::Id;

    /// Returns the pagination cursor attached by a list call.
    fn pagination(&self) -> Option<&PaginationCursor>;

    /// Attaches (or clears) the pagination cursor.
    fn attach_pagination(&mut self, cursor: Option<PaginationCursor>);

    /// IDs available for building this entity's own paths.
    ///
    /// Nested resources extend this with their parent's ID.
    fn path_ids(&self) -> HashMap<&'static str, String> {
        HashMap::from([("id", self.get_id().to_string())])
    }

    /// Builds an entity from a raw attribute bag.
    ///
    /// Missing optional fields stay `None`. Values are not validated.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Hydration`] if a required field is missing or
    /// has the wrong type.
    fn hydrate(raw: Value) -> Result<Self, ResourceError> {
        serde_json::from_value(raw).map_err(|e| ResourceError::Hydration {
            resource: Self::NAME,
            message: e.to_string(),
        })
    }

    /// Builds one page of entities, in the order the panel returned them.
    ///
    /// Every entity receives the same cursor.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Hydration`] if `raw` is not an array or any
    /// element fails to hydrate.
    fn hydrate_page(
        raw: Value,
        cursor: Option<PaginationCursor>,
    ) -> Result<Vec<Self>, ResourceError> {
        let Value::Array(items) = raw else {
            return Err(ResourceError::Hydration {
                resource: Self::NAME,
                message: format!("expected a list of attribute bags, got {raw}"),
            });
        };

        items
            .into_iter()
            .map(|item| {
                let mut entity = Self::hydrate(item)?;
                entity.attach_pagination(cursor);
                Ok(entity)
            })
            .collect()
    }

    /// Converts the entity back into an attribute bag.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if serialization fails.
    fn to_raw(&self) -> Result<Value, ResourceError> {
        serde_json::to_value(self).map_err(|e| ResourceError::Serialization {
            message: e.to_string(),
        })
    }

    /// Finds a single entity by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the entity doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource can
    /// only be found through a parent.
    async fn find(client: &RestClient, id: Self::Id) -> Result<ResourceResponse<Self>, ResourceError> {
        let ids = HashMap::from([("id", id.to_string())]);
        fetch_one(client, ResourceOperation::Find, &ids, &id.to_string()).await
    }

    /// Finds a single entity nested under a parent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the entity doesn't exist.
    async fn find_with_parent<P: Display + Send>(
        client: &RestClient,
        parent_name: &'static str,
        parent_id: P,
        id: Self::Id,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let ids = HashMap::from([("id", id.to_string()), (parent_name, parent_id.to_string())]);
        fetch_one(client, ResourceOperation::Find, &ids, &id.to_string()).await
    }

    /// Finds a single entity by the external ID assigned by another system.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no entity carries the ID.
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// external IDs.
    async fn find_by_external_id(
        client: &RestClient,
        external_id: &str,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let ids = HashMap::from([("external_id", external_id.to_string())]);
        fetch_one(client, ResourceOperation::FindByExternalId, &ids, external_id).await
    }

    /// Lists one page of entities.
    ///
    /// `None` and `Some(0)` request page 1 (see [`resolve_page`]).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource can
    /// only be listed through a parent.
    async fn all(
        client: &RestClient,
        page: Option<u32>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        fetch_page(client, &HashMap::new(), page).await
    }

    /// Lists one page of entities nested under a parent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no path nests the
    /// resource under `parent_name`.
    async fn all_with_parent<P: Display + Send>(
        client: &RestClient,
        parent_name: &'static str,
        parent_id: P,
        page: Option<u32>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let ids = HashMap::from([(parent_name, parent_id.to_string())]);
        fetch_page(client, &ids, page).await
    }

    /// Creates an entity from a set of creation options.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the panel rejects the
    /// options (422).
    async fn create<B: Serialize + Sync>(
        client: &RestClient,
        options: &B,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        post_create(client, &HashMap::new(), options).await
    }

    /// Creates an entity nested under a parent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the panel rejects the
    /// options (422).
    async fn create_with_parent<P: Display + Send, B: Serialize + Sync>(
        client: &RestClient,
        parent_name: &'static str,
        parent_id: P,
        options: &B,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let ids = HashMap::from([(parent_name, parent_id.to_string())]);
        post_create(client, &ids, options).await
    }

    /// Deletes the entity.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the entity doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource can't
    /// be deleted or a parent ID is unknown.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        remove(self, client, self.path_ids()).await
    }

    /// Deletes the entity through an explicitly given parent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the entity doesn't exist.
    async fn delete_with_parent<P: Display + Send>(
        &self,
        client: &RestClient,
        parent_name: &'static str,
        parent_id: P,
    ) -> Result<(), ResourceError> {
        let mut ids = self.path_ids();
        ids.insert(parent_name, parent_id.to_string());
        remove(self, client, ids).await
    }

    /// Prepares a partial update against the resource's update path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource can't
    /// be updated, or [`ResourceError::Serialization`] if the body can't be
    /// built.
    fn prepare_update<'c, B, C>(
        &self,
        client: &'c RestClient,
        base: &B,
        changes: &C,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError>
    where
        B: Serialize + ?Sized,
        C: EntityChanges<Self>,
    {
        let path = resolve_path::<Self>(ResourceOperation::Update, &self.path_ids())?;
        PendingUpdate::prepare(client, path, self, base, changes)
    }
}

/// Marker trait for resources that only support read operations.
///
/// Read-only resources declare only Find and All paths.
pub trait ReadOnlyResource: PanelResource {}

/// Resolves and builds the path of `operation` for the given IDs.
pub(crate) fn resolve_path<T: PanelResource>(
    operation: ResourceOperation,
    ids: &HashMap<&str, String>,
) -> Result<String, ResourceError> {
    let available_ids: Vec<&str> = ids.keys().copied().collect();
    let path = get_path(T::PATHS, operation, &available_ids).ok_or(
        ResourceError::PathResolutionFailed {
            resource: T::NAME,
            operation: operation.as_str(),
        },
    )?;

    Ok(build_path(path.template, ids))
}

/// Hydrates a single-entity response.
pub(crate) fn single_response<T: PanelResource>(
    response: HttpResponse,
) -> Result<ResourceResponse<T>, ResourceError> {
    let request_id = response.request_id().map(ToString::to_string);
    let entity = T::hydrate(response.data)?;
    Ok(ResourceResponse::new(entity, None, request_id))
}

/// Hydrates a list response, attaching its cursor to every entity.
pub(crate) fn page_response<T: PanelResource>(
    response: HttpResponse,
) -> Result<ResourceResponse<Vec<T>>, ResourceError> {
    let request_id = response.request_id().map(ToString::to_string);
    let cursor = response.pagination.map(PaginationCursor::from);
    let entities = T::hydrate_page(response.data, cursor)?;
    Ok(ResourceResponse::new(entities, cursor, request_id))
}

/// Builds the `?page=N` query for a listing call.
pub(crate) fn page_query(page: Option<u32>) -> HashMap<String, String> {
    HashMap::from([("page".to_string(), resolve_page(page).to_string())])
}

async fn fetch_one<T: PanelResource>(
    client: &RestClient,
    operation: ResourceOperation,
    ids: &HashMap<&str, String>,
    id: &str,
) -> Result<ResourceResponse<T>, ResourceError> {
    let path = resolve_path::<T>(operation, ids)?;

    let response = client
        .get(&path, None)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, T::NAME, Some(id)))?;

    single_response(response)
}

async fn fetch_page<T: PanelResource>(
    client: &RestClient,
    ids: &HashMap<&str, String>,
    page: Option<u32>,
) -> Result<ResourceResponse<Vec<T>>, ResourceError> {
    let path = resolve_path::<T>(ResourceOperation::All, ids)?;

    let response = client
        .get(&path, Some(page_query(page)))
        .await
        .map_err(|e| ResourceError::from_rest_error(e, T::NAME, None))?;

    page_response(response)
}

async fn post_create<T: PanelResource, B: Serialize + Sync>(
    client: &RestClient,
    ids: &HashMap<&str, String>,
    options: &B,
) -> Result<ResourceResponse<T>, ResourceError> {
    let path = resolve_path::<T>(ResourceOperation::Create, ids)?;
    let body = Value::Object(to_object(options)?);

    let response = client
        .post(&path, Some(body), false)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, T::NAME, None))?;

    single_response(response)
}

async fn remove<T: PanelResource>(
    entity: &T,
    client: &RestClient,
    ids: HashMap<&'static str, String>,
) -> Result<(), ResourceError> {
    let path = resolve_path::<T>(ResourceOperation::Delete, &ids)?;
    let id = entity.get_id().to_string();

    client
        .delete(&path)
        .await
        .map_err(|e| ResourceError::from_rest_error(e, T::NAME, Some(&id)))?;

    Ok(())
}
