//! Respoke API client.
//!
//! # Example
//!
//! One-step endpoint authentication:
//!
//! ```ignore
//! let client = Client::new(ClientConfig::new().with_app_secret(secret));
//! let request = SessionTokenRequest::new(app_id, role_id, "foo-bar-user");
//! let token = client.app_token(Some(&request)).await?;
//! ```
//!
//! The manual path calls [`Client::request_session_token_id`] and then
//! [`Client::request_session_token`]; the latter memoizes the App-Token, so
//! [`Client::app_token`] returns it afterwards without parameters.

use std::fmt;
use std::future;

use chrono::Utc;
use respoke_domain::{
    ApiRequest, ApiResponse, ClientConfig, DEFAULT_TOKEN_TTL, RoleRecord, Rules, SessionToken,
    SessionTokenId, SessionTokenRequest,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::sync::OnceCell;

use crate::auth::{TokenStatus, TokenStore};
use crate::error::{ClientError, ClientResult};
use crate::ports::HttpTransport;
use crate::role::Role;

/// Makes authenticated calls against the Respoke API.
///
/// The transport is created on the first request. The App-Token obtained by
/// the brokered authentication flow is memoized for the lifetime of the
/// client.
pub struct Client<T> {
    config: ClientConfig,
    transport: OnceCell<T>,
    tokens: TokenStore,
}

impl<T: HttpTransport> Client<T> {
    /// Creates a client. No connection is made until the first call.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: OnceCell::new(),
            tokens: TokenStore::new(),
        }
    }

    /// Creates a client around an already constructed transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport: OnceCell::from(transport),
            tokens: TokenStore::new(),
        }
    }

    /// Base URL used for API requests.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The configured App-Secret.
    #[must_use]
    pub fn app_secret(&self) -> Option<&str> {
        self.config.app_secret.as_deref()
    }

    /// The configuration this client was created with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The store holding the memoized App-Token.
    #[must_use]
    pub const fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    /// Returns the memoized App-Token, or obtains one.
    ///
    /// A memoized token is returned unconditionally, even if `request` is
    /// given. Otherwise, with a `request` the two-step exchange is performed
    /// and its token memoized; without one the result is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if either exchange step fails.
    pub async fn app_token(
        &self,
        request: Option<&SessionTokenRequest>,
    ) -> ClientResult<Option<String>> {
        if let Some(token) = self.tokens.get().await {
            tracing::debug!("reusing memoized App-Token");
            return Ok(Some(token));
        }
        let Some(request) = request else {
            return Ok(None);
        };

        let token_id = self.request_session_token_id(request).await?;
        let Some(id) = token_id.token_id.as_deref() else {
            return Err(ClientError::InvalidResponse(
                "token response carries no tokenId".to_string(),
            ));
        };
        let app_id = token_id.app_id.as_deref().unwrap_or(&request.app_id);

        let session = self.request_session_token(app_id, id).await?;
        self.tokens.set_expiry(token_id.expiry_time).await;
        Ok(session.token)
    }

    /// Status of the memoized App-Token at the current time.
    pub async fn app_token_status(&self) -> TokenStatus {
        self.tokens.status_at(Utc::now()).await
    }

    /// Requests a token ID for use in requesting the App-Token (`POST tokens`).
    ///
    /// The body always carries a ttl of [`DEFAULT_TOKEN_TTL`], whatever
    /// `request.ttl` says.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedServerError` on any status other than 200.
    pub async fn request_session_token_id(
        &self,
        request: &SessionTokenRequest,
    ) -> ClientResult<SessionTokenId> {
        if request.has_custom_ttl() {
            tracing::debug!(
                requested_ttl = request.ttl,
                sent_ttl = DEFAULT_TOKEN_TTL,
                "requested ttl is not forwarded"
            );
        }

        let api_request = ApiRequest::post(["tokens"], request.to_body());
        let response = self.send(&api_request).await?;
        if !response.is_ok() {
            return Err(unexpected(&api_request, response));
        }
        decode(&response)
    }

    /// Exchanges a token ID for the App-Token (`POST session-tokens`).
    ///
    /// The `token` field of the response body replaces the memoized
    /// App-Token before the status is checked, so a failed exchange clears
    /// it (or sets whatever token the error body carried).
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedServerError` on any status other than 200.
    pub async fn request_session_token(
        &self,
        app_id: &str,
        token_id: &str,
    ) -> ClientResult<SessionToken> {
        let api_request = ApiRequest::post(
            ["session-tokens"],
            json!({ "appId": app_id, "tokenId": token_id }),
        );
        let response = self.send(&api_request).await?;
        self.tokens.replace(response.field("token")).await;

        if !response.is_ok() {
            return Err(unexpected(&api_request, response));
        }
        decode(&response)
    }

    /// Lists the roles of the application (`GET roles`).
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedServerError` on any status other than 200.
    pub async fn roles(&self) -> ClientResult<Vec<Role<'_, T>>> {
        let api_request = ApiRequest::get(["roles"]);
        let response = self.send(&api_request).await?;
        if !response.is_ok() {
            return Err(unexpected(&api_request, response));
        }
        let records: Vec<RoleRecord> = decode(&response)?;
        Ok(records
            .into_iter()
            .map(|record| Role::new(self, record))
            .collect())
    }

    /// Creates a role (`POST roles`).
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedServerError` on any status other than 200.
    pub async fn create_role(&self, name: &str, rules: &Rules) -> ClientResult<Role<'_, T>> {
        let api_request = ApiRequest::post(["roles"], RoleRecord::creation_body(name, rules));
        let response = self.send(&api_request).await?;
        if !response.is_ok() {
            return Err(unexpected(&api_request, response));
        }
        Ok(Role::new(self, decode(&response)?))
    }

    /// Finds a role by ID (`GET roles/{id}`). Returns `None` on 404.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedServerError` on any other non-2xx status.
    pub async fn find_role(&self, id: &str) -> ClientResult<Option<Role<'_, T>>> {
        let api_request = ApiRequest::get(["roles", id]);
        let response = self.send(&api_request).await?;
        if response.is_not_found() {
            tracing::warn!(role_id = id, "role not found");
            return Ok(None);
        }
        if !response.is_success() {
            return Err(unexpected(&api_request, response));
        }
        Ok(Some(Role::new(self, decode(&response)?)))
    }

    /// Replaces the rules of a role (`PUT roles/{id}`).
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedServerError` on any non-2xx status.
    pub async fn update_role(&self, id: &str, rules: &Rules) -> ClientResult<bool> {
        let api_request = ApiRequest::put(["roles", id], RoleRecord::update_body(rules));
        let response = self.send(&api_request).await?;
        if !response.is_success() {
            return Err(unexpected(&api_request, response));
        }
        Ok(true)
    }

    /// Deletes a role (`DELETE roles/{id}`).
    ///
    /// Returns whether the API answered with a 2xx status; a rejected delete
    /// is `Ok(false)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if no response was obtained.
    pub async fn delete_role(&self, id: &str) -> ClientResult<bool> {
        let response = self.send(&ApiRequest::delete(["roles", id])).await?;
        let deleted = response.is_success();
        if !deleted {
            tracing::warn!(role_id = id, status = response.status, "role was not deleted");
        }
        Ok(deleted)
    }

    async fn send(&self, request: &ApiRequest) -> ClientResult<ApiResponse> {
        let transport = self
            .transport
            .get_or_try_init(|| future::ready(T::connect(&self.config)))
            .await?;

        tracing::debug!(method = %request.method, path = %request.path(), "sending request");
        let response = transport.execute(request).await?;
        tracing::debug!(status = response.status, path = %request.path(), "received response");
        Ok(response)
    }
}

fn unexpected(request: &ApiRequest, response: ApiResponse) -> ClientError {
    tracing::warn!(
        method = %request.method,
        path = %request.path(),
        status = response.status,
        "unexpected server response"
    );
    ClientError::UnexpectedServerError {
        status: response.status,
        body: response.body,
    }
}

fn decode<D: DeserializeOwned>(response: &ApiResponse) -> ClientResult<D> {
    response
        .json()
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

impl<T: HttpTransport> Default for Client<T> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("connected", &self.transport.initialized())
            .field("tokens", &self.tokens)
            .finish()
    }
}
