//! Response types returned by the Respoke API

mod coerce;
mod session_token;
mod session_token_id;
mod spec;

pub use session_token::SessionToken;
pub use session_token_id::SessionTokenId;
pub use spec::ApiResponse;
