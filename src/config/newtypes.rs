//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that a
//! misconfigured client fails before the first request is sent.

use crate::error::ConfigError;
use std::fmt;

/// A validated panel API key.
///
/// Both application keys (`ptla_...`) and client keys (`ptlc_...`) are
/// accepted; the panel decides what the key may access.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only `ApiKey(*****)`.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::ApiKey;
///
/// let key = ApiKey::new("ptla_secret").unwrap();
/// assert_eq!(key.as_ref(), "ptla_secret");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated base URL of a panel installation.
///
/// The URL must have an alphabetic scheme and a non-empty host. Trailing
/// slashes are removed so that paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use pterodactyl_api::PanelUrl;
///
/// let url = PanelUrl::new("https://panel.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://panel.example.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "panel.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl PanelUrl {
    /// Creates a new validated panel URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPanelUrl`] if the URL has no scheme,
    /// a non-alphabetic scheme, or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let url = raw.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidPanelUrl { url: raw.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for PanelUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for PanelUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("ptla_super_secret").unwrap();
        let debug_output = format!("{key:?}");
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super_secret"));
    }

    #[test]
    fn test_panel_url_strips_trailing_slashes() {
        let url = PanelUrl::new("https://panel.example.com//").unwrap();
        assert_eq!(url.as_ref(), "https://panel.example.com");
    }

    #[test]
    fn test_panel_url_accepts_port_and_path() {
        let url = PanelUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");

        let url = PanelUrl::new("https://example.com/panel").unwrap();
        assert_eq!(url.host_name(), "example.com");
        assert_eq!(url.to_string(), "https://example.com/panel");
    }

    #[test]
    fn test_panel_url_rejects_invalid() {
        assert!(PanelUrl::new("panel.example.com").is_err());
        assert!(PanelUrl::new("https://").is_err());
        assert!(PanelUrl::new("://panel.example.com").is_err());
        assert!(PanelUrl::new("ht1ps://panel.example.com").is_err());
        assert!(PanelUrl::new("https://:8080").is_err());
    }

    #[test]
    fn test_panel_url_error_reports_original_input() {
        let error = PanelUrl::new("not a url").unwrap_err();
        assert_eq!(
            error,
            ConfigError::InvalidPanelUrl {
                url: "not a url".to_string()
            }
        );
    }
}
