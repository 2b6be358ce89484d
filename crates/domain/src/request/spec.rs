//! Request specification type

use serde_json::Value;
use url::Url;

use super::HttpMethod;
use crate::error::{DomainError, DomainResult};

/// A single call against the Respoke API.
///
/// The path is kept as individual segments relative to the configured base
/// URL, so identifiers are percent-encoded when the final URL is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Path segments relative to the base URL
    pub segments: Vec<String>,
    /// JSON request body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without a body.
    #[must_use]
    pub fn new<I, S>(method: HttpMethod, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Get, segments)
    }

    /// Creates a POST request with a JSON body.
    #[must_use]
    pub fn post<I, S>(segments: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Post, segments).with_body(body)
    }

    /// Creates a PUT request with a JSON body.
    #[must_use]
    pub fn put<I, S>(segments: I, body: Value) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Put, segments).with_body(body)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(HttpMethod::Delete, segments)
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the relative path, e.g. `roles/abc`.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Builds the absolute URL by appending the path segments to `base`.
    ///
    /// The base path is preserved, so `https://api.respoke.io/v1` plus
    /// `tokens` yields `https://api.respoke.io/v1/tokens`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if `base` cannot be a base URL.
    pub fn url(&self, base: &Url) -> DomainResult<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| DomainError::InvalidUrl(base.to_string()))?
            .pop_if_empty()
            .extend(&self.segments);
        Ok(url)
    }
}
