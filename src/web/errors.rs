use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use maizul::common::{MenuError, UserError};
use maizul::services::TokenError;
use maizul::types::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Too many requests, try again later")]
    TooManyRequests,

    #[error("Internal server error")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        HttpResponse::build(status).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => {
                ApiError::NotFound("User not found".into())
            }
            UserError::AlreadyExists(_) => {
                ApiError::BadRequest("Username already exists".into())
            }
            UserError::SelfModification(action) => {
                ApiError::BadRequest(format!("Cannot {} yourself", action))
            }
            UserError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            UserError::Database(e) => {
                log::error!("Database error: {}", e);
                ApiError::Internal
            }
            UserError::Internal => ApiError::Internal,
        }
    }
}

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        match err {
            MenuError::NotFound(_) => {
                ApiError::NotFound("Menu item not found".into())
            }
            MenuError::InvalidRequest(msg) => ApiError::BadRequest(msg),
            MenuError::Database(e) => {
                log::error!("Database error: {}", e);
                ApiError::Internal
            }
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Creation(e) => {
                log::error!("Token creation failed: {}", e);
                ApiError::Internal
            }
            TokenError::Invalid(_) => {
                ApiError::Unauthorized("Invalid token".into())
            }
            TokenError::Expired => {
                ApiError::Unauthorized("Token expired".into())
            }
        }
    }
}
