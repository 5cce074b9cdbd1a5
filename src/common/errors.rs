use thiserror::Error;
use uuid::Uuid;

use crate::models::UserIden;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User with {0} not found")]
    NotFound(UserIden),

    #[error("User with {0} already exists")]
    AlreadyExists(UserIden),

    #[error("Users cannot {0} their own account")]
    SelfModification(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("An unexpected error occurred")]
    Internal,
}

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Menu item {0} not found")]
    NotFound(Uuid),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
