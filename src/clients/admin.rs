//! Application API facade.
//!
//! [`AdminClient`] holds the transport for an application API key
//! (`ptla_...`) and offers shortcuts for the common resource calls. Every
//! shortcut delegates to the resource type, so anything not covered here is
//! available through [`AdminClient::rest`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::{AdminClient, ApiKey, PanelConfig, PanelUrl};
//!
//! let config = PanelConfig::builder()
//!     .panel_url(PanelUrl::new("https://panel.example.com")?)
//!     .api_key(ApiKey::new("ptla_...")?)
//!     .build()?;
//!
//! let admin = AdminClient::connect(&config).await?;
//! for server in admin.servers(None).await?.iter() {
//!     println!("{} on node {}", server.name, server.node);
//! }
//! ```

use crate::clients::RestClient;
use crate::config::PanelConfig;
use crate::error::ConnectError;
use crate::rest::resources::{
    Egg, Location, Nest, NewAllocations, NewLocation, NewNode, NewServer, NewServerDatabase,
    NewUser, Node, NodeAllocation, Server, ServerDatabase, User,
};
use crate::rest::{PanelResource, ResourceError, ResourceResponse};

/// Path used by [`AdminClient::connect`] to check the key.
const SELF_TEST_PATH: &str = "application/users";

/// Client for the application (administrator) API.
#[derive(Debug)]
pub struct AdminClient {
    rest: RestClient,
}

impl AdminClient {
    /// Creates a client without contacting the panel.
    #[must_use]
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            rest: RestClient::new(config),
        }
    }

    /// Creates a client and checks that the panel accepts the key.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError`] with the panel's status code, or `0` if the
    /// panel could not be reached.
    pub async fn connect(config: &PanelConfig) -> Result<Self, ConnectError> {
        let client = Self::new(config);
        let panel = config.panel_url().as_ref();

        match client
            .rest
            .get(SELF_TEST_PATH, Some(crate::rest::page_query(None)))
            .await
        {
            Ok(_) => {
                tracing::info!(panel, api = "application", "Connected to panel");
                Ok(client)
            }
            Err(e) => {
                let error = ConnectError::from(e);
                tracing::warn!(panel, code = error.code, "Panel self-test failed");
                Err(error)
            }
        }
    }

    /// Returns the underlying REST client.
    #[must_use]
    pub const fn rest(&self) -> &RestClient {
        &self.rest
    }

    // Users

    /// Lists one page of users.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ResourceError`].
    pub async fn users(&self, page: Option<u32>) -> Result<ResourceResponse<Vec<User>>, ResourceError> {
        User::all(&self.rest, page).await
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the user doesn't exist.
    pub async fn user(&self, id: u64) -> Result<ResourceResponse<User>, ResourceError> {
        User::find(&self.rest, id).await
    }

    /// Finds a user by external ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no user carries the ID.
    pub async fn user_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<ResourceResponse<User>, ResourceError> {
        User::find_by_external_id(&self.rest, external_id).await
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the panel rejects the
    /// options.
    pub async fn create_user(&self, options: &NewUser) -> Result<ResourceResponse<User>, ResourceError> {
        User::create(&self.rest, options).await
    }

    // Nodes

    /// Lists one page of nodes.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ResourceError`].
    pub async fn nodes(&self, page: Option<u32>) -> Result<ResourceResponse<Vec<Node>>, ResourceError> {
        Node::all(&self.rest, page).await
    }

    /// Finds a node by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the node doesn't exist.
    pub async fn node(&self, id: u64) -> Result<ResourceResponse<Node>, ResourceError> {
        Node::find(&self.rest, id).await
    }

    /// Creates a node.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the panel rejects the
    /// options.
    pub async fn create_node(&self, options: &NewNode) -> Result<ResourceResponse<Node>, ResourceError> {
        Node::create(&self.rest, options).await
    }

    /// Lists one page of a node's allocations.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the node doesn't exist.
    pub async fn allocations(
        &self,
        node_id: u64,
        page: Option<u32>,
    ) -> Result<ResourceResponse<Vec<NodeAllocation>>, ResourceError> {
        NodeAllocation::all_on_node(&self.rest, node_id, page).await
    }

    /// Creates allocations on a node.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the panel rejects the
    /// options.
    pub async fn create_allocations(
        &self,
        node_id: u64,
        options: &NewAllocations,
    ) -> Result<(), ResourceError> {
        NodeAllocation::create(&self.rest, node_id, options).await
    }

    // Locations

    /// Lists one page of locations.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ResourceError`].
    pub async fn locations(
        &self,
        page: Option<u32>,
    ) -> Result<ResourceResponse<Vec<Location>>, ResourceError> {
        Location::all(&self.rest, page).await
    }

    /// Finds a location by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the location doesn't exist.
    pub async fn location(&self, id: u64) -> Result<ResourceResponse<Location>, ResourceError> {
        Location::find(&self.rest, id).await
    }

    /// Creates a location.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the panel rejects the
    /// options.
    pub async fn create_location(
        &self,
        options: &NewLocation,
    ) -> Result<ResourceResponse<Location>, ResourceError> {
        Location::create(&self.rest, options).await
    }

    // Servers

    /// Lists one page of servers.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ResourceError`].
    pub async fn servers(&self, page: Option<u32>) -> Result<ResourceResponse<Vec<Server>>, ResourceError> {
        Server::all(&self.rest, page).await
    }

    /// Finds a server by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the server doesn't exist.
    pub async fn server(&self, id: u64) -> Result<ResourceResponse<Server>, ResourceError> {
        Server::find(&self.rest, id).await
    }

    /// Finds a server by external ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no server carries the ID.
    pub async fn server_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<ResourceResponse<Server>, ResourceError> {
        Server::find_by_external_id(&self.rest, external_id).await
    }

    /// Creates a server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the panel rejects the
    /// options.
    pub async fn create_server(&self, options: &NewServer) -> Result<ResourceResponse<Server>, ResourceError> {
        Server::create(&self.rest, options).await
    }

    /// Lists one page of a server's databases.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the server doesn't exist.
    pub async fn databases(
        &self,
        server_id: u64,
        page: Option<u32>,
    ) -> Result<ResourceResponse<Vec<ServerDatabase>>, ResourceError> {
        ServerDatabase::all_on_server(&self.rest, server_id, page).await
    }

    /// Creates a database on a server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the panel rejects the
    /// options.
    pub async fn create_database(
        &self,
        server_id: u64,
        options: &NewServerDatabase,
    ) -> Result<ResourceResponse<ServerDatabase>, ResourceError> {
        ServerDatabase::create_on_server(&self.rest, server_id, options).await
    }

    // Nests and eggs

    /// Lists one page of nests.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ResourceError`].
    pub async fn nests(&self, page: Option<u32>) -> Result<ResourceResponse<Vec<Nest>>, ResourceError> {
        Nest::all(&self.rest, page).await
    }

    /// Finds a nest by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the nest doesn't exist.
    pub async fn nest(&self, id: u64) -> Result<ResourceResponse<Nest>, ResourceError> {
        Nest::find(&self.rest, id).await
    }

    /// Finds an egg of a nest.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the nest or the egg doesn't
    /// exist.
    pub async fn egg(&self, nest_id: u64, id: u64) -> Result<ResourceResponse<Egg>, ResourceError> {
        Egg::find_in_nest(&self.rest, nest_id, id).await
    }
}
