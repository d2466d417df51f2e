//! Node allocation resource implementation.
//!
//! An allocation is an IP and port pair on a node that servers can bind to.
//! Allocations are addressed through their node. The panel does not return
//! the node ID in an allocation's attributes, so listing through
//! [`NodeAllocation::all_on_node`] records it on each entity; deleting an
//! allocation without it fails with
//! [`ResourceError::PathResolutionFailed`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::resource::resolve_path;
use crate::rest::{
    to_object, PaginationCursor, PanelResource, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse,
};

/// An IP and port pair of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAllocation {
    pub id: u64,
    pub ip: String,
    /// Display name used instead of the IP.
    #[serde(default)]
    pub alias: Option<String>,
    pub port: u16,
    #[serde(default)]
    pub notes: Option<String>,
    /// Whether a server uses the allocation.
    #[serde(default)]
    pub assigned: bool,
    /// ID of the node the allocation was listed from.
    #[serde(skip)]
    pub node_id: Option<u64>,
    #[serde(skip)]
    pub pagination: Option<PaginationCursor>,
}

/// Options for creating allocations.
///
/// Ports are strings so that ranges (`"25565-25570"`) can be given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewAllocations {
    pub ip: String,
    pub ports: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl NodeAllocation {
    /// Lists one page of a node's allocations.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the node doesn't exist.
    pub async fn all_on_node(
        client: &RestClient,
        node_id: u64,
        page: Option<u32>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let mut response = Self::all_with_parent(client, "node", node_id, page).await?;
        for allocation in response.iter_mut() {
            allocation.node_id = Some(node_id);
        }
        Ok(response)
    }

    /// Creates allocations on a node.
    ///
    /// The panel answers with an empty body, so nothing is returned; list
    /// the node's allocations to see the new entries.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the panel rejects the
    /// IP or a port.
    pub async fn create(
        client: &RestClient,
        node_id: u64,
        options: &NewAllocations,
    ) -> Result<(), ResourceError> {
        let ids = HashMap::from([("node", node_id.to_string())]);
        let path = resolve_path::<Self>(ResourceOperation::Create, &ids)?;
        let body = Value::Object(to_object(options)?);

        client
            .post(&path, Some(body), true)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        Ok(())
    }
}

impl PanelResource for NodeAllocation {
    type Id = u64;

    const NAME: &'static str = "NodeAllocation";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["node"],
            "application/nodes/{node}/allocations",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["node"],
            "application/nodes/{node}/allocations",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["node", "id"],
            "application/nodes/{node}/allocations/{id}",
        ),
    ];

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn pagination(&self) -> Option<&PaginationCursor> {
        self.pagination.as_ref()
    }

    fn attach_pagination(&mut self, cursor: Option<PaginationCursor>) {
        self.pagination = cursor;
    }

    fn path_ids(&self) -> HashMap<&'static str, String> {
        let mut ids = HashMap::from([("id", self.id.to_string())]);
        if let Some(node_id) = self.node_id {
            ids.insert("node", node_id.to_string());
        }
        ids
    }
}
