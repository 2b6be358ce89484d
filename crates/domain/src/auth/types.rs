//! Token request parameters

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Default App-Token lifetime in seconds (one day).
pub const DEFAULT_TOKEN_TTL: u64 = 86_400;

const fn default_ttl() -> u64 {
    DEFAULT_TOKEN_TTL
}

/// Parameters for requesting a token ID for an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokenRequest {
    /// The application ID that matches the App-Secret.
    pub app_id: String,
    /// The role ID to use for the given endpoint.
    pub role_id: String,
    /// The endpoint ID that is being authenticated.
    pub endpoint_id: String,
    /// Requested App-Token lifetime in seconds.
    #[serde(default = "default_ttl")]
    pub ttl: u64,
}

impl SessionTokenRequest {
    /// Creates a request with the default ttl.
    #[must_use]
    pub fn new(
        app_id: impl Into<String>,
        role_id: impl Into<String>,
        endpoint_id: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            role_id: role_id.into(),
            endpoint_id: endpoint_id.into(),
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Sets the requested ttl.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: u64) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns true if the caller asked for a ttl other than the default.
    #[must_use]
    pub const fn has_custom_ttl(&self) -> bool {
        self.ttl != DEFAULT_TOKEN_TTL
    }

    /// JSON body sent to `POST tokens`.
    ///
    /// The API always receives [`DEFAULT_TOKEN_TTL`]; the requested `ttl` is
    /// kept on the struct but not forwarded.
    #[must_use]
    pub fn to_body(&self) -> Value {
        json!({
            "appId": self.app_id,
            "endpointId": self.endpoint_id,
            "roleId": self.role_id,
            "ttl": DEFAULT_TOKEN_TTL,
        })
    }
}
