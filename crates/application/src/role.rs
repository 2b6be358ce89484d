//! Role handle bound to a client

use std::fmt;

use respoke_domain::{RoleRecord, Rules};
use serde_json::Value;

use crate::client::Client;
use crate::error::ClientResult;
use crate::ports::HttpTransport;

/// A role fetched from or created through a [`Client`].
///
/// The handle borrows the client it came from and uses it to save or delete
/// the role. It is a plain value: two handles for the same role do not see
/// each other's changes until re-fetched.
pub struct Role<'c, T> {
    client: &'c Client<T>,
    id: String,
    name: String,
    rules: Rules,
}

impl<'c, T: HttpTransport> Role<'c, T> {
    /// Binds a role record to a client.
    #[must_use]
    pub fn new(client: &'c Client<T>, record: RoleRecord) -> Self {
        Self {
            client,
            id: record.id,
            name: record.name,
            rules: record.rules,
        }
    }

    /// Server-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Role name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Permission rules as currently held in memory.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Mutable access to the in-memory rules.
    pub const fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }

    /// Replaces the in-memory rules.
    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    /// Looks up a single rule.
    #[must_use]
    pub fn rule(&self, key: &str) -> Option<&Value> {
        self.rules.get(key)
    }

    /// Sets a single rule, returning the previous value.
    pub fn set_rule(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.rules.insert(key.into(), value.into())
    }

    /// The client this role is bound to.
    #[must_use]
    pub const fn client(&self) -> &'c Client<T> {
        self.client
    }

    /// Sends the in-memory rules to the API.
    ///
    /// Neither `id` nor `name` is sent, and the role is not re-fetched.
    ///
    /// # Errors
    ///
    /// See [`Client::update_role`].
    pub async fn save(&self) -> ClientResult<bool> {
        self.client.update_role(&self.id, &self.rules).await
    }

    /// Deletes the role on the server. The handle stays usable locally.
    ///
    /// # Errors
    ///
    /// See [`Client::delete_role`].
    pub async fn delete(&self) -> ClientResult<bool> {
        self.client.delete_role(&self.id).await
    }

    /// Snapshot of the role as a plain record.
    #[must_use]
    pub fn to_record(&self) -> RoleRecord {
        RoleRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<T> Clone for Role<'_, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client,
            id: self.id.clone(),
            name: self.name.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<T> fmt::Debug for Role<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Role")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
