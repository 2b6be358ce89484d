//! Brokered authentication request types

mod types;

pub use types::{DEFAULT_TOKEN_TTL, SessionTokenRequest};
