//! Configuration types for the Pterodactyl API client.
//!
//! # Overview
//!
//! - [`PanelConfig`]: The configuration shared by both client facades
//! - [`PanelConfigBuilder`]: A builder for constructing [`PanelConfig`] instances
//! - [`PanelUrl`]: A validated panel base URL
//! - [`ApiKey`]: A validated API key with masked debug output
//!
//! # Example
//!
//! ```rust
//! use pterodactyl_api::{ApiKey, PanelConfig, PanelUrl};
//!
//! let config = PanelConfig::builder()
//!     .panel_url(PanelUrl::new("https://panel.example.com").unwrap())
//!     .api_key(ApiKey::new("ptla_example").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.panel_url().as_ref(), "https://panel.example.com");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, PanelUrl};

use crate::error::ConfigError;

/// Configuration for a panel connection.
///
/// The same configuration type is used for the application API (admin keys)
/// and the client API (user keys); which API is used is decided by the
/// facade the configuration is handed to.
#[derive(Clone, Debug)]
pub struct PanelConfig {
    panel_url: PanelUrl,
    api_key: ApiKey,
    user_agent_prefix: Option<String>,
}

impl PanelConfig {
    /// Creates a new builder for constructing a `PanelConfig`.
    #[must_use]
    pub fn builder() -> PanelConfigBuilder {
        PanelConfigBuilder::new()
    }

    /// Returns the panel base URL.
    #[must_use]
    pub const fn panel_url(&self) -> &PanelUrl {
        &self.panel_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PanelConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PanelConfig>();
};

/// Builder for constructing [`PanelConfig`] instances.
///
/// `panel_url` and `api_key` are required.
#[derive(Debug, Default)]
pub struct PanelConfigBuilder {
    panel_url: Option<PanelUrl>,
    api_key: Option<ApiKey>,
    user_agent_prefix: Option<String>,
}

impl PanelConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the panel base URL (required).
    #[must_use]
    pub fn panel_url(mut self, url: PanelUrl) -> Self {
        self.panel_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PanelConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `panel_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<PanelConfig, ConfigError> {
        let panel_url = self
            .panel_url
            .ok_or(ConfigError::MissingRequiredField { field: "panel_url" })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(PanelConfig {
            panel_url,
            api_key,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_panel_url() {
        let result = PanelConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "panel_url" })
        ));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = PanelConfigBuilder::new()
            .panel_url(PanelUrl::new("https://panel.example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = PanelConfig::builder()
            .panel_url(PanelUrl::new("https://panel.example.com").unwrap())
            .api_key(ApiKey::new("ptlc_key").unwrap())
            .user_agent_prefix("MyBot/2.0")
            .build()
            .unwrap();

        assert_eq!(config.api_key().as_ref(), "ptlc_key");
        assert_eq!(config.user_agent_prefix(), Some("MyBot/2.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_key() {
        let config = PanelConfig::builder()
            .panel_url(PanelUrl::new("https://panel.example.com").unwrap())
            .api_key(ApiKey::new("ptla_topsecret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("PanelConfig"));
        assert!(!debug_str.contains("topsecret"));
    }
}
