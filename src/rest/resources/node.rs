//! Node resource implementation.
//!
//! Nodes are the machines running the panel's daemon. Their update endpoint
//! expects the full set of connection and capacity fields on every call, so
//! each setter sends the node's current values alongside the change.
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::rest::PanelResource;
//! use pterodactyl_api::rest::resources::Node;
//!
//! let node = Node::find(&client, 1).await?.into_inner();
//! let node = node.set_maintenance_mode(&client, true)?.confirm().await?;
//!
//! let configuration = node.configuration(&client).await?;
//! println!("{}", configuration["api"]["port"]);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    EntityChanges, PaginationCursor, PanelResource, PendingUpdate, ResourceError,
    ResourceOperation, ResourcePath,
};

/// A daemon host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// The numeric ID of the node.
    pub id: u64,
    /// The node's UUID.
    pub uuid: String,
    /// Whether the node is available for automatic deployment.
    pub public: bool,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// The location the node belongs to.
    pub location_id: u64,
    /// Fully qualified domain name or IP address.
    pub fqdn: String,
    /// `http` or `https`.
    pub scheme: String,
    /// Whether the daemon sits behind a proxy that terminates TLS.
    pub behind_proxy: bool,
    /// Whether the node is in maintenance mode.
    pub maintenance_mode: bool,
    /// Total memory in MiB.
    pub memory: u64,
    /// Memory overallocation in percent (`-1` disables the check).
    pub memory_overallocate: i64,
    /// Total disk space in MiB.
    pub disk: u64,
    /// Disk overallocation in percent (`-1` disables the check).
    pub disk_overallocate: i64,
    /// Maximum upload size in MiB.
    pub upload_size: u64,
    /// Port the daemon listens on.
    pub daemon_listen: u16,
    /// Port of the daemon's SFTP server.
    pub daemon_sftp: u16,
    /// Directory server files are stored in.
    #[serde(default)]
    pub daemon_base: Option<String>,
    /// Resources already allocated to servers.
    #[serde(default)]
    pub allocated_resources: Option<AllocatedResources>,
    /// When the node was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the node was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Cursor of the list call this node came from.
    #[serde(skip)]
    pub pagination: Option<PaginationCursor>,
}

/// Memory and disk already handed out to servers on a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedResources {
    /// Allocated memory in MiB.
    pub memory: u64,
    /// Allocated disk space in MiB.
    pub disk: u64,
}

/// Options for creating a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewNode {
    pub name: String,
    pub location_id: u64,
    pub fqdn: String,
    pub scheme: String,
    pub memory: u64,
    pub memory_overallocate: i64,
    pub disk: u64,
    pub disk_overallocate: i64,
    pub upload_size: u64,
    pub daemon_sftp: u16,
    pub daemon_listen: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behind_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_base: Option<String>,
}

/// Changes for a node update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behind_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_overallocate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_overallocate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_sftp: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_listen: Option<u16>,
}

impl EntityChanges<Node> for NodeChanges {
    fn apply_to(&self, node: &mut Node) {
        if let Some(name) = &self.name {
            node.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            node.description = Some(description.clone());
        }
        if let Some(location_id) = self.location_id {
            node.location_id = location_id;
        }
        if let Some(fqdn) = &self.fqdn {
            node.fqdn.clone_from(fqdn);
        }
        if let Some(scheme) = &self.scheme {
            node.scheme.clone_from(scheme);
        }
        if let Some(behind_proxy) = self.behind_proxy {
            node.behind_proxy = behind_proxy;
        }
        if let Some(public) = self.public {
            node.public = public;
        }
        if let Some(maintenance_mode) = self.maintenance_mode {
            node.maintenance_mode = maintenance_mode;
        }
        if let Some(memory) = self.memory {
            node.memory = memory;
        }
        if let Some(memory_overallocate) = self.memory_overallocate {
            node.memory_overallocate = memory_overallocate;
        }
        if let Some(disk) = self.disk {
            node.disk = disk;
        }
        if let Some(disk_overallocate) = self.disk_overallocate {
            node.disk_overallocate = disk_overallocate;
        }
        if let Some(upload_size) = self.upload_size {
            node.upload_size = upload_size;
        }
        if let Some(daemon_sftp) = self.daemon_sftp {
            node.daemon_sftp = daemon_sftp;
        }
        if let Some(daemon_listen) = self.daemon_listen {
            node.daemon_listen = daemon_listen;
        }
    }
}

#[derive(Serialize)]
struct NodeUpdateBase<'a> {
    name: &'a str,
    description: Option<&'a str>,
    location_id: u64,
    fqdn: &'a str,
    scheme: &'a str,
    behind_proxy: bool,
    public: bool,
    maintenance_mode: bool,
    memory: u64,
    memory_overallocate: i64,
    disk: u64,
    disk_overallocate: i64,
    upload_size: u64,
    daemon_sftp: u16,
    daemon_listen: u16,
}

impl Node {
    fn update_base(&self) -> NodeUpdateBase<'_> {
        NodeUpdateBase {
            name: &self.name,
            description: self.description.as_deref(),
            location_id: self.location_id,
            fqdn: &self.fqdn,
            scheme: &self.scheme,
            behind_proxy: self.behind_proxy,
            public: self.public,
            maintenance_mode: self.maintenance_mode,
            memory: self.memory,
            memory_overallocate: self.memory_overallocate,
            disk: self.disk,
            disk_overallocate: self.disk_overallocate,
            upload_size: self.upload_size,
            daemon_sftp: self.daemon_sftp,
            daemon_listen: self.daemon_listen,
        }
    }

    /// Prepares an update of several fields at once.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn update<'c>(
        &self,
        client: &'c RestClient,
        changes: NodeChanges,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.prepare_update(client, &self.update_base(), &changes)
    }

    /// Prepares a rename.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_name<'c>(
        &self,
        client: &'c RestClient,
        name: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                name: Some(name.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares a description change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_description<'c>(
        &self,
        client: &'c RestClient,
        description: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                description: Some(description.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares moving the node to another location.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_location_id<'c>(
        &self,
        client: &'c RestClient,
        location_id: u64,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                location_id: Some(location_id),
                ..Default::default()
            },
        )
    }

    /// Prepares an FQDN change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_fqdn<'c>(
        &self,
        client: &'c RestClient,
        fqdn: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                fqdn: Some(fqdn.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares a scheme change (`http` or `https`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_scheme<'c>(
        &self,
        client: &'c RestClient,
        scheme: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                scheme: Some(scheme.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares toggling the behind-proxy flag.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_behind_proxy<'c>(
        &self,
        client: &'c RestClient,
        behind_proxy: bool,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                behind_proxy: Some(behind_proxy),
                ..Default::default()
            },
        )
    }

    /// Prepares toggling public visibility.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_public<'c>(
        &self,
        client: &'c RestClient,
        public: bool,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                public: Some(public),
                ..Default::default()
            },
        )
    }

    /// Prepares toggling maintenance mode.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_maintenance_mode<'c>(
        &self,
        client: &'c RestClient,
        maintenance_mode: bool,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                maintenance_mode: Some(maintenance_mode),
                ..Default::default()
            },
        )
    }

    /// Prepares a memory capacity change (MiB).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_memory<'c>(
        &self,
        client: &'c RestClient,
        memory: u64,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                memory: Some(memory),
                ..Default::default()
            },
        )
    }

    /// Prepares a memory overallocation change (percent).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_memory_overallocate<'c>(
        &self,
        client: &'c RestClient,
        memory_overallocate: i64,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                memory_overallocate: Some(memory_overallocate),
                ..Default::default()
            },
        )
    }

    /// Prepares a disk capacity change (MiB).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_disk<'c>(
        &self,
        client: &'c RestClient,
        disk: u64,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                disk: Some(disk),
                ..Default::default()
            },
        )
    }

    /// Prepares a disk overallocation change (percent).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_disk_overallocate<'c>(
        &self,
        client: &'c RestClient,
        disk_overallocate: i64,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                disk_overallocate: Some(disk_overallocate),
                ..Default::default()
            },
        )
    }

    /// Prepares an upload size change (MiB).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_upload_size<'c>(
        &self,
        client: &'c RestClient,
        upload_size: u64,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                upload_size: Some(upload_size),
                ..Default::default()
            },
        )
    }

    /// Prepares a daemon SFTP port change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_daemon_sftp<'c>(
        &self,
        client: &'c RestClient,
        daemon_sftp: u16,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                daemon_sftp: Some(daemon_sftp),
                ..Default::default()
            },
        )
    }

    /// Prepares a daemon listen port change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_daemon_listen<'c>(
        &self,
        client: &'c RestClient,
        daemon_listen: u16,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            NodeChanges {
                daemon_listen: Some(daemon_listen),
                ..Default::default()
            },
        )
    }

    /// Fetches the daemon configuration the panel generates for this node.
    ///
    /// The document is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the node no longer exists.
    pub async fn configuration(&self, client: &RestClient) -> Result<Value, ResourceError> {
        let path = format!("application/nodes/{}/configuration", self.id);

        let response = client
            .get(&path, None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&self.id.to_string())))?;

        Ok(response.body)
    }
}

impl PanelResource for Node {
    type Id = u64;

    const NAME: &'static str = "Node";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "application/nodes/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "application/nodes"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "application/nodes"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "application/nodes/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "application/nodes/{id}",
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use crate::rest::resources::test_support::offline_client;
    use serde_json::json;

    fn sample_raw() -> Value {
        json!({
            "id": 1,
            "uuid": "1046d1d1-b8ef-4771-82b1-2b5946d33397",
            "public": true,
            "name": "Test",
            "description": "Test node",
            "location_id": 1,
            "fqdn": "pterodactyl.file.properties",
            "scheme": "https",
            "behind_proxy": false,
            "maintenance_mode": false,
            "memory": 2048,
            "memory_overallocate": 0,
            "disk": 5000,
            "disk_overallocate": 0,
            "upload_size": 100,
            "daemon_listen": 8080,
            "daemon_sftp": 2022,
            "daemon_base": "/srv/daemon-data",
            "created_at": "2019-12-22T04:44:51+00:00",
            "updated_at": "2019-12-22T04:44:51+00:00",
            "allocated_resources": {"memory": 1024, "disk": 2000}
        })
    }

    #[test]
    fn test_node_hydration() {
        let node = Node::hydrate(sample_raw()).unwrap();

        assert_eq!(node.fqdn, "pterodactyl.file.properties");
        assert_eq!(node.daemon_listen, 8080);
        assert_eq!(node.daemon_sftp, 2022);
        assert_eq!(
            node.allocated_resources,
            Some(AllocatedResources {
                memory: 1024,
                disk: 2000
            })
        );
    }

    #[test]
    fn test_node_has_no_external_id_lookup() {
        assert!(get_path(Node::PATHS, ResourceOperation::FindByExternalId, &["external_id"]).is_none());
    }

    #[test]
    fn test_single_setter_sends_full_base() {
        let client = offline_client();
        let node = Node::hydrate(sample_raw()).unwrap();

        let pending = node.set_memory(&client, 4096).unwrap();
        let body = pending.body();

        assert_eq!(body.len(), 15);
        assert_eq!(body["memory"], 4096);
        assert_eq!(body["disk"], 5000);
        assert_eq!(body["daemon_listen"], 8080);
        assert!(body.get("uuid").is_none());
        assert_eq!(pending.optimistic().memory, 4096);
    }

    #[test]
    fn test_setter_accepting_strings() {
        let client = offline_client();
        let node = Node::hydrate(sample_raw()).unwrap();

        let pending = node.set_scheme(&client, "http").unwrap();
        assert_eq!(pending.body()["scheme"], "http");
        assert_eq!(pending.optimistic().scheme, "http");
        assert_eq!(node.scheme, "https");
    }
}
