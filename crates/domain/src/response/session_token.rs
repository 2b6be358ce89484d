//! App-Token response of the second brokered authentication step

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response to a session token request (`POST session-tokens`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken {
    /// The token for use as an App-Token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Token request status information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any other fields returned by the API.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionToken {
    /// Builds the response object from a decoded JSON payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Returns true if the response carries a token.
    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }
}
