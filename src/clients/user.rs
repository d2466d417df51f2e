//! Client API facade.
//!
//! [`UserClient`] holds the transport for a client API key (`ptlc_...`),
//! which acts on behalf of a single panel user.

use crate::clients::RestClient;
use crate::config::PanelConfig;
use crate::error::ConnectError;
use crate::rest::resources::{ClientServer, ServerUtilization};
use crate::rest::{PanelResource, ResourceError, ResourceResponse};

/// Path used by [`UserClient::connect`] to check the key.
const SELF_TEST_PATH: &str = "client";

/// Client for the client (user) API.
#[derive(Debug)]
pub struct UserClient {
    rest: RestClient,
}

impl UserClient {
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
                tracing::info!(panel, api = "client", "Connected to panel");
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

    /// Lists one page of the servers the key's owner can access.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ResourceError`].
    pub async fn servers(
        &self,
        page: Option<u32>,
    ) -> Result<ResourceResponse<Vec<ClientServer>>, ResourceError> {
        ClientServer::all(&self.rest, page).await
    }

    /// Finds a server by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the key can't see the server.
    pub async fn server(&self, identifier: &str) -> Result<ResourceResponse<ClientServer>, ResourceError> {
        ClientServer::find(&self.rest, identifier.to_string()).await
    }

    /// Fetches live usage of a server.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the key can't see the server.
    pub async fn utilization(&self, identifier: &str) -> Result<ServerUtilization, ResourceError> {
        ClientServer::utilization(&self.rest, identifier).await
    }
}
