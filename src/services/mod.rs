pub use auth::*;
pub use tokens::*;

mod auth;
mod tokens;
