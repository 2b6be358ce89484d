//! Respoke Application - Client and ports
//!
//! This crate defines the client layer with:
//! - Port traits (interfaces for the HTTP transport)
//! - The [`Client`] orchestrating brokered authentication and role calls
//! - App-Token memoization
//! - Client-level error handling

pub mod auth;
pub mod client;
pub mod error;
pub mod ports;
pub mod role;

#[cfg(test)]
mod test_support;

pub use auth::{AppToken, TokenStatus, TokenStore, token_preview};
pub use client::Client;
pub use error::{ClientError, ClientResult};
pub use ports::{HttpTransport, TransportError};
pub use role::Role;
