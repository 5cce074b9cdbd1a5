//! Simple key-value persistence for client-side state.
//!
//! Two values live here: the preferred display language and the session's
//! bearer token. Neither is versioned; a key that was never written reads
//! as absent.

pub use file::*;
pub use memory::*;

mod file;
mod memory;

use thiserror::Error;

pub const LANGUAGE_KEY: &str = "maizul_language";
pub const TOKEN_KEY: &str = "maizul_token";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage format error: {0}")]
    Format(#[from] serde_json::Error),
}

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
