//! Consumer side of the REST API: a bearer-authenticated HTTP client and
//! the session that owns its credential.

pub use api::*;
pub use error::*;
pub use session::*;

mod api;
mod error;
mod session;
