//! Client configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default base URL of the Respoke API.
pub const DEFAULT_BASE_URL: &str = "https://api.respoke.io/v1";

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("respoke-rs/", env!("CARGO_PKG_VERSION"));

/// Settings a client is constructed with. Immutable once handed to a client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL used for API requests.
    pub base_url: String,
    /// The application App-Secret, sent as the `App-Secret` header.
    pub app_secret: Option<String>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the App-Secret.
    #[must_use]
    pub fn with_app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Overrides [`DEFAULT_USER_AGENT`].
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_secret: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("app_secret", &self.app_secret.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.app_secret.is_none());
        assert!(config.user_agent.starts_with("respoke-rs/"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new()
            .with_base_url("https://localhost:2000")
            .with_app_secret("foo");
        assert_eq!(config.base_url, "https://localhost:2000");
        assert_eq!(config.app_secret.as_deref(), Some("foo"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"app_secret": "77269d84"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.app_secret.as_deref(), Some("77269d84"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::new().with_app_secret("super-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
