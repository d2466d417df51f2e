//! Server resource implementation (client API).
//!
//! The client API addresses servers by their short `identifier` rather than
//! the numeric ID, and exposes live usage, console commands and power
//! signals. It is read-only otherwise.
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::rest::PanelResource;
//! use pterodactyl_api::rest::resources::{ClientServer, PowerSignal};
//!
//! let usage = ClientServer::utilization(&client, "1a7ce997").await?;
//! if usage.state == "offline" {
//!     let server = ClientServer::find(&client, "1a7ce997".to_string()).await?;
//!     server.set_power_state(&client, PowerSignal::Start).await?;
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{FeatureLimits, ServerLimits};
use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    PaginationCursor, PanelResource, ReadOnlyResource, ResourceError, ResourceOperation,
    ResourcePath,
};

const BYTES_PER_MIB: u64 = 1_048_576;

/// A server the key's owner can access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientServer {
    /// Short identifier; the ID used by every client path.
    pub identifier: String,
    /// The numeric ID used by the application API.
    pub internal_id: u64,
    pub uuid: String,
    pub name: String,
    /// Whether the key's owner owns the server (as opposed to a subuser).
    #[serde(default)]
    pub server_owner: bool,
    /// Name of the node the server runs on.
    pub node: String,
    pub sftp_details: SftpDetails,
    #[serde(default)]
    pub description: Option<String>,
    pub limits: ServerLimits,
    pub feature_limits: FeatureLimits,
    /// Startup command with variables substituted.
    #[serde(default)]
    pub invocation: Option<String>,
    #[serde(default)]
    pub docker_image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub is_installing: bool,
    #[serde(default)]
    pub is_transferring: bool,
    /// Cursor of the list call this server came from.
    #[serde(skip)]
    pub pagination: Option<PaginationCursor>,
}

/// Where to connect for SFTP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SftpDetails {
    pub ip: String,
    pub port: u16,
}

/// A power action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerSignal {
    Start,
    Stop,
    Restart,
    /// Stops the container without waiting for a graceful shutdown.
    Kill,
}

impl PowerSignal {
    /// Returns the signal as the panel names it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Kill => "kill",
        }
    }
}

impl fmt::Display for PowerSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A current value next to its limit.
///
/// A limit of zero means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Usage<T> {
    pub current: T,
    pub limit: T,
}

/// Live usage of a server combined with its configured limits.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerUtilization {
    /// Power state (`running`, `offline`, `starting`, `stopping`).
    pub state: String,
    pub is_suspended: bool,
    /// Memory in bytes.
    pub memory: Usage<u64>,
    /// CPU in percent of one core.
    pub cpu: Usage<f64>,
    /// Disk in bytes.
    pub disk: Usage<u64>,
    pub network_rx_bytes: u64,
    pub network_tx_bytes: u64,
    /// Uptime in milliseconds.
    pub uptime: u64,
}

#[derive(Deserialize)]
struct ResourceStats {
    current_state: String,
    #[serde(default)]
    is_suspended: bool,
    resources: ResourceUsage,
}

#[derive(Deserialize)]
struct ResourceUsage {
    memory_bytes: u64,
    cpu_absolute: f64,
    disk_bytes: u64,
    network_rx_bytes: u64,
    network_tx_bytes: u64,
    #[serde(default)]
    uptime: u64,
}

fn mib_to_bytes(mib: i64) -> u64 {
    u64::try_from(mib).unwrap_or(0).saturating_mul(BYTES_PER_MIB)
}

impl ServerUtilization {
    #[allow(clippy::cast_precision_loss)]
    fn from_parts(stats: ResourceStats, server: &ClientServer) -> Self {
        let usage = stats.resources;

        Self {
            state: stats.current_state,
            is_suspended: stats.is_suspended,
            memory: Usage {
                current: usage.memory_bytes,
                limit: mib_to_bytes(server.limits.memory),
            },
            cpu: Usage {
                current: usage.cpu_absolute,
                limit: server.limits.cpu.max(0) as f64,
            },
            disk: Usage {
                current: usage.disk_bytes,
                limit: mib_to_bytes(server.limits.disk),
            },
            network_rx_bytes: usage.network_rx_bytes,
            network_tx_bytes: usage.network_tx_bytes,
            uptime: usage.uptime,
        }
    }
}

impl ClientServer {
    /// Fetches live usage and limits of a server.
    ///
    /// The usage and the server details are requested concurrently; the
    /// first failure wins.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the key can't see the server.
    pub async fn utilization(
        client: &RestClient,
        identifier: &str,
    ) -> Result<ServerUtilization, ResourceError> {
        let stats_path = format!(
            "client/servers/{}/resources",
            urlencoding::encode(identifier)
        );

        let (response, server) = tokio::try_join!(
            async {
                client
                    .get(&stats_path, None)
                    .await
                    .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(identifier)))
            },
            Self::find(client, identifier.to_string()),
        )?;

        let stats: ResourceStats =
            serde_json::from_value(response.data).map_err(|e| ResourceError::Hydration {
                resource: "ServerUtilization",
                message: e.to_string(),
            })?;

        Ok(ServerUtilization::from_parts(stats, &server))
    }

    /// Sends a line to the server console.
    ///
    /// # Errors
    ///
    /// Returns the panel's error if the server is offline (usually 502).
    pub async fn send_command(
        &self,
        client: &RestClient,
        command: &str,
    ) -> Result<(), ResourceError> {
        self.post_action(client, "command", json!({ "command": command }))
            .await
    }

    /// Sends a power signal.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the key can't see the server.
    pub async fn set_power_state(
        &self,
        client: &RestClient,
        signal: PowerSignal,
    ) -> Result<(), ResourceError> {
        self.post_action(client, "power", json!({ "signal": signal }))
            .await
    }

    async fn post_action(
        &self,
        client: &RestClient,
        action: &str,
        body: serde_json::Value,
    ) -> Result<(), ResourceError> {
        let path = format!(
            "client/servers/{}/{action}",
            urlencoding::encode(&self.identifier)
        );
        tracing::debug!(identifier = %self.identifier, action, "Sending server action");

        client
            .post(&path, Some(body), true)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&self.identifier)))?;

        Ok(())
    }
}

impl PanelResource for ClientServer {
    type Id = String;

    const NAME: &'static str = "ClientServer";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "client/servers/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "client"),
    ];

    fn get_id(&self) -> Self::Id {
        self.identifier.clone()
    }

    fn pagination(&self) -> Option<&PaginationCursor> {
        self.pagination.as_ref()
    }

    fn attach_pagination(&mut self, cursor: Option<PaginationCursor>) {
        self.pagination = cursor;
    }
}

impl ReadOnlyResource for ClientServer {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;

    fn sample_server() -> ClientServer {
        ClientServer::hydrate(json!({
            "server_owner": true,
            "identifier": "1a7ce997",
            "internal_id": 5,
            "uuid": "1a7ce997-259b-452e-8b4e-cecc464142ca",
            "name": "Gaming",
            "node": "Test",
            "sftp_details": {"ip": "pterodactyl.file.properties", "port": 2022},
            "description": "Matt from Wii Sports",
            "limits": {
                "memory": 512,
                "swap": 0,
                "disk": 200,
                "io": 500,
                "cpu": 0,
                "threads": null
            },
            "invocation": "java -Xms128M -Xmx512M -jar server.jar",
            "docker_image": "quay.io/pterodactyl/core:java",
            "egg_features": ["eula"],
            "feature_limits": {"databases": 5, "allocations": 5, "backups": 2},
            "status": null,
            "is_suspended": false,
            "is_installing": false,
            "is_transferring": false,
            "relationships": {"allocations": {"object": "list", "data": []}}
        }))
        .unwrap()
    }

    #[test]
    fn test_client_server_is_identified_by_identifier() {
        let server = sample_server();

        assert_eq!(server.get_id(), "1a7ce997");
        assert_eq!(server.internal_id, 5);
        assert_eq!(server.sftp_details.port, 2022);
    }

    #[test]
    fn test_client_server_is_read_only() {
        assert!(get_path(ClientServer::PATHS, ResourceOperation::Find, &["id"]).is_some());
        assert!(get_path(ClientServer::PATHS, ResourceOperation::Update, &["id"]).is_none());
        assert!(get_path(ClientServer::PATHS, ResourceOperation::Delete, &["id"]).is_none());
        assert!(get_path(ClientServer::PATHS, ResourceOperation::Create, &[]).is_none());
    }

    #[test]
    fn test_utilization_converts_limits_to_bytes() {
        let stats: ResourceStats = serde_json::from_value(json!({
            "current_state": "running",
            "is_suspended": false,
            "resources": {
                "memory_bytes": 304_623_616_u64,
                "cpu_absolute": 12.5,
                "disk_bytes": 117_567_488_u64,
                "network_rx_bytes": 1024,
                "network_tx_bytes": 2048,
                "uptime": 60_000
            }
        }))
        .unwrap();

        let usage = ServerUtilization::from_parts(stats, &sample_server());

        assert_eq!(usage.state, "running");
        assert_eq!(usage.memory.limit, 512 * 1_048_576);
        assert_eq!(usage.disk.limit, 200 * 1_048_576);
        assert_eq!(usage.cpu.limit, 0.0);
        assert_eq!(usage.cpu.current, 12.5);
        assert_eq!(usage.uptime, 60_000);
    }

    #[test]
    fn test_mib_to_bytes_saturates_and_ignores_negative() {
        assert_eq!(mib_to_bytes(-1), 0);
        assert_eq!(mib_to_bytes(i64::MAX), u64::MAX);
        assert_eq!(mib_to_bytes(1), 1_048_576);
    }

    #[test]
    fn test_power_signal_serializes_lowercase() {
        assert_eq!(json!({"signal": PowerSignal::Kill}), json!({"signal": "kill"}));
        assert_eq!(PowerSignal::Restart.to_string(), "restart");
    }
}
