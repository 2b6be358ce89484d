//! App-Token memoization.

mod token_store;

pub use token_store::{AppToken, TokenStatus, TokenStore, token_preview};
