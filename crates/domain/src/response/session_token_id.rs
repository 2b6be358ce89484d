//! Token-id response of the first brokered authentication step

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response to a token request (`POST tokens`).
///
/// Carries the `tokenId` that is later exchanged for an App-Token. Every
/// field is optional; fields the API adds beyond the documented ones are
/// kept in [`SessionTokenId::extra`].
///
/// `createdAt` is coerced from an ISO-8601 string and `expiryTime` /
/// `createTime` from Unix epoch seconds into UTC instants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokenId {
    /// Token ID used to request an App-Token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    /// App ID the App-Token is associated with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Role ID the App-Token is assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    /// Endpoint ID the App-Token is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_id: Option<String>,
    /// Number of seconds the App-Token is valid for.
    #[serde(
        default,
        with = "super::coerce::seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ttl: Option<u64>,
    /// When the token request was made.
    #[serde(
        default,
        with = "super::coerce::iso8601_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// When the token expires.
    #[serde(
        default,
        with = "super::coerce::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_time: Option<DateTime<Utc>>,
    /// When the token was created.
    #[serde(
        default,
        with = "super::coerce::epoch_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_time: Option<DateTime<Utc>>,
    /// Any other fields returned by the API.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionTokenId {
    /// Builds the response object from a decoded JSON payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not an object or a timestamp
    /// field cannot be coerced.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Returns true if the response carries a token ID.
    #[must_use]
    pub const fn has_token_id(&self) -> bool {
        self.token_id.is_some()
    }

    /// Looks up a field the API returned outside the documented schema.
    #[must_use]
    pub fn extra_field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_payload() {
        let response = SessionTokenId::from_value(json!({})).unwrap();
        assert_eq!(response, SessionTokenId::default());
        assert!(!response.has_token_id());
    }

    #[test]
    fn test_coerces_created_at_to_utc() {
        let response =
            SessionTokenId::from_value(json!({"createdAt": "2015-01-02T21:30:57.714Z"})).unwrap();
        let created_at = response.created_at.expect("createdAt coerced");
        assert_eq!(created_at.timestamp(), 1_420_234_257);
        assert_eq!(created_at.timestamp_subsec_millis(), 714);
    }

    #[test]
    fn test_coerces_expiry_time_to_utc() {
        let response = SessionTokenId::from_value(json!({"expiryTime": 1_420_320_657})).unwrap();
        assert_eq!(
            response.expiry_time,
            Some(Utc.with_ymd_and_hms(2015, 1, 3, 21, 30, 57).unwrap())
        );
    }

    #[test]
    fn test_coerces_create_time_to_utc() {
        let response = SessionTokenId::from_value(json!({"createTime": 1_420_320_657})).unwrap();
        assert_eq!(
            response.create_time,
            Some(Utc.with_ymd_and_hms(2015, 1, 3, 21, 30, 57).unwrap())
        );
    }

    #[test]
    fn test_full_payload_keeps_unknown_fields() {
        let response = SessionTokenId::from_value(json!({
            "tokenId": "5e1e7b3a-0f1c-4a4e-9e62-3f0b2c1d9a11",
            "appId": "0cdf7bc1-45d1-420a-963e-c797a6f7ba61",
            "roleId": "47ea573f-5a78-42f4-927c-fe658bc00f91",
            "endpointId": "foo-bar-user",
            "ttl": 86400,
            "accountId": "acct-1",
        }))
        .unwrap();

        assert!(response.has_token_id());
        assert_eq!(response.endpoint_id.as_deref(), Some("foo-bar-user"));
        assert_eq!(response.ttl, Some(86_400));
        assert_eq!(response.extra_field("accountId"), Some(&json!("acct-1")));
        assert!(response.extra_field("tokenId").is_none());
    }

    #[test]
    fn test_ttl_accepts_float_seconds() {
        let response =
            SessionTokenId::from_value(json!({"ttl": 86400.0, "tokenId": "t"})).unwrap();
        assert_eq!(response.ttl, Some(86_400));
        assert_eq!(response.token_id.as_deref(), Some("t"));

        let written = serde_json::to_value(&response).unwrap();
        assert_eq!(written["ttl"], json!(86_400));
    }

    #[test]
    fn test_ttl_rejects_negative_seconds() {
        let result = SessionTokenId::from_value(json!({"ttl": -1.5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_coercion_is_idempotent() {
        let first = SessionTokenId::from_value(json!({
            "tokenId": "t-1",
            "createdAt": "2015-01-02T21:30:57.714Z",
            "expiryTime": 1_420_320_657,
            "createTime": 1_420_234_257,
        }))
        .unwrap();

        let written = serde_json::to_value(&first).unwrap();
        assert_eq!(written["createdAt"], json!("2015-01-02T21:30:57.714Z"));
        assert_eq!(written["expiryTime"], json!(1_420_320_657));

        let second = SessionTokenId::from_value(written).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_already_coerced_strings_are_accepted() {
        let response = SessionTokenId::from_value(json!({
            "expiryTime": "2015-01-03T21:30:57Z",
            "createdAt": 1_420_234_257,
        }))
        .unwrap();
        assert_eq!(
            response.expiry_time,
            Some(Utc.with_ymd_and_hms(2015, 1, 3, 21, 30, 57).unwrap())
        );
        assert_eq!(
            response.created_at,
            Some(Utc.with_ymd_and_hms(2015, 1, 2, 21, 30, 57).unwrap())
        );
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let result = SessionTokenId::from_value(json!({"createdAt": "not a time"}));
        assert!(result.is_err());
    }
}
