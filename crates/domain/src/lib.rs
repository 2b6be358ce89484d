//! Respoke Domain - Core API types
//!
//! This crate defines the data exchanged with the Respoke API: client
//! configuration, request and response specifications, brokered
//! authentication payloads and role records.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod role;

pub use auth::{DEFAULT_TOKEN_TTL, SessionTokenRequest};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{DomainError, DomainResult};
pub use request::{ApiRequest, HttpMethod};
pub use response::{ApiResponse, SessionToken, SessionTokenId};
pub use role::{RoleRecord, Rules};
