//! Respoke - client for the Respoke identity and authorization API.
//!
//! Obtains App-Tokens through brokered authentication and manages roles.
//!
//! ```no_run
//! use respoke::{Client, ClientConfig, SessionTokenRequest};
//!
//! # async fn run() -> respoke::ClientResult<()> {
//! let client = Client::new(
//!     ClientConfig::new().with_app_secret("77269d84-d7f3-49da-8eab-bd6686160035"),
//! );
//! let request = SessionTokenRequest::new(
//!     "0cdf7bc1-45d1-420a-963e-c797a6f7ba61",
//!     "47ea573f-5a78-42f4-927c-fe658bc00f91",
//!     "foo-bar-user",
//! );
//! let token = client.app_token(Some(&request)).await?;
//! # let _ = token;
//! # Ok(())
//! # }
//! ```

pub use respoke_application::{
    AppToken, ClientError, ClientResult, HttpTransport, TokenStatus, TokenStore, TransportError,
};
pub use respoke_domain::{
    ApiRequest, ApiResponse, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TOKEN_TTL, DomainError,
    HttpMethod, RoleRecord, Rules, SessionToken, SessionTokenId, SessionTokenRequest,
};
pub use respoke_infrastructure::ReqwestTransport;

/// Client bound to the reqwest transport.
pub type Client = respoke_application::Client<ReqwestTransport>;

/// Role handle bound to a [`Client`].
pub type Role<'c> = respoke_application::Role<'c, ReqwestTransport>;
