//! Active display language and translated strings.
//!
//! The language is one of a closed set ([`Locale`]). It is resolved once at
//! startup from the persisted preference or the URL, and then changed only
//! through [`LocaleState::set`], which persists it. Lookups never fail: a key
//! that cannot be resolved comes back unchanged.

pub use catalog::*;
pub use keys::*;
pub use locale::*;
pub use state::*;

mod catalog;
mod keys;
mod locale;
mod state;
