//! Role records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Permission rules of a role, keyed by permission name.
pub type Rules = Map<String, Value>;

/// A role as exchanged with the API.
///
/// The API returns permissions as top-level keys next to `id` and `name`;
/// every key other than those two is collected into `rules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    /// Server-assigned identifier.
    pub id: String,
    /// Role name.
    pub name: String,
    /// Permission rules.
    #[serde(flatten)]
    pub rules: Rules,
}

impl RoleRecord {
    /// Body for `POST roles`: the rules merged with `name`.
    ///
    /// `name` wins over a rule of the same key.
    #[must_use]
    pub fn creation_body(name: &str, rules: &Rules) -> Value {
        let mut body = rules.clone();
        body.insert("name".to_string(), Value::String(name.to_string()));
        Value::Object(body)
    }

    /// Body for `PUT roles/{id}`: the rules alone.
    #[must_use]
    pub fn update_body(rules: &Rules) -> Value {
        Value::Object(rules.clone())
    }
}
