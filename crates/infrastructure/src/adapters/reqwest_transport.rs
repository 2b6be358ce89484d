//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port using the reqwest library.
//! It handles all HTTP communication with the Respoke API.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};
use respoke_application::{HttpTransport, TransportError};
use respoke_domain::{ApiRequest, ApiResponse, ClientConfig, HttpMethod};

/// Name of the header carrying the application secret.
pub const APP_SECRET_HEADER: &str = "App-Secret";

/// HTTP transport implementation using reqwest.
///
/// Every request carries the `App-Secret` header (when a secret is
/// configured) and sends its body as JSON. No timeout or retry policy is
/// applied.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Creates a transport for the given base URL and secret.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret is not a valid header value or the
    /// client cannot be created.
    pub fn new(
        base_url: Url,
        app_secret: Option<&str>,
        user_agent: &str,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        if let Some(secret) = app_secret {
            let mut value = HeaderValue::from_str(secret)
                .map_err(|e| TransportError::InvalidHeader(format!("{APP_SECRET_HEADER}: {e}")))?;
            value.set_sensitive(true);
            headers.insert(APP_SECRET_HEADER, value);
        }

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// The base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_connect() {
            return TransportError::ConnectionFailed(error.to_string());
        }
        if error.is_builder() {
            return TransportError::InvalidUrl(error.to_string());
        }
        if error.is_body() || error.is_decode() {
            return TransportError::Body(error.to_string());
        }
        TransportError::Other(error.to_string())
    }
}

impl HttpTransport for ReqwestTransport {
    fn connect(config: &ClientConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TransportError::InvalidUrl(format!("{e}: {}", config.base_url)))?;
        Self::new(base_url, config.app_secret.as_deref(), &config.user_agent)
    }

    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = request.url(&self.base_url)?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(format!("Failed to read body: {e}")))?;

        tracing::debug!(status, bytes = body.len(), "response body read");
        Ok(ApiResponse::new(status, body))
    }
}
