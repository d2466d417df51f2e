//! Server database resource implementation.
//!
//! Databases belong to a server and are addressed through it. Each entity
//! carries its server ID, so found or listed databases can be deleted
//! directly.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::resource::resolve_path;
use crate::rest::{
    PaginationCursor, PanelResource, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse,
};

/// A database attached to a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerDatabase {
    pub id: u64,
    /// ID of the owning server.
    pub server: u64,
    /// ID of the database host.
    pub host: u64,
    /// Database name.
    pub database: String,
    pub username: String,
    /// Hosts allowed to connect (`%` for any).
    pub remote: String,
    #[serde(default)]
    pub max_connections: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub pagination: Option<PaginationCursor>,
}

/// Options for creating a server database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewServerDatabase {
    /// Database name; the panel prefixes it with the server ID.
    pub database: String,
    pub remote: String,
    /// ID of the database host.
    pub host: u64,
}

impl ServerDatabase {
    /// Creates a database on a server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the name is taken or
    /// the server reached its database limit.
    pub async fn create_on_server(
        client: &RestClient,
        server_id: u64,
        options: &NewServerDatabase,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::create_with_parent(client, "server", server_id, options).await
    }

    /// Lists one page of a server's databases.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the server doesn't exist.
    pub async fn all_on_server(
        client: &RestClient,
        server_id: u64,
        page: Option<u32>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::all_with_parent(client, "server", server_id, page).await
    }

    /// Finds one database of a server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the server or the database
    /// doesn't exist.
    pub async fn find_on_server(
        client: &RestClient,
        server_id: u64,
        id: u64,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::find_with_parent(client, "server", server_id, id).await
    }

    /// Generates a new password for the database user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the database no longer exists.
    pub async fn reset_password(&self, client: &RestClient) -> Result<(), ResourceError> {
        let path = format!(
            "{}/reset-password",
            resolve_path::<Self>(ResourceOperation::Find, &self.path_ids())?
        );

        client
            .post(&path, None, true)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&self.id.to_string())))?;

        Ok(())
    }
}

impl PanelResource for ServerDatabase {
    type Id = u64;

    const NAME: &'static str = "ServerDatabase";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["server", "id"],
            "application/servers/{server}/databases/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["server"],
            "application/servers/{server}/databases",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["server"],
            "application/servers/{server}/databases",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["server", "id"],
            "application/servers/{server}/databases/{id}",
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
        HashMap::from([("id", self.id.to_string()), ("server", self.server.to_string())])
    }
}
