use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use maizul::common::UserError;
use maizul::models::User;

use crate::web::errors::ApiError;
use crate::web::state::AppState;

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Template error: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Template error")
        }
    }
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolves the bearer token to an active account.
pub async fn current_user(
    req: &HttpRequest,
    state: &AppState,
) -> Result<User, ApiError> {
    let token = bearer_token(req)
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".into()))?;
    let claims = state.tokens.validate(token)?;

    let user = match state.db.get_user(&claims.sub.into()).await {
        Ok(u) => u,
        Err(UserError::NotFound(_)) => {
            return Err(ApiError::Unauthorized("User not found".into()));
        }
        Err(e) => return Err(e.into()),
    };

    if !user.can_sign_in() {
        return Err(ApiError::Unauthorized("User account is disabled".into()));
    }
    Ok(user)
}

pub async fn require_editor(
    req: &HttpRequest,
    state: &AppState,
) -> Result<User, ApiError> {
    let user = current_user(req, state).await?;
    if !user.role.is_editor() {
        return Err(ApiError::Forbidden("Editor access required".into()));
    }
    Ok(user)
}

pub async fn require_admin(
    req: &HttpRequest,
    state: &AppState,
) -> Result<User, ApiError> {
    let user = current_user(req, state).await?;
    if !user.role.is_admin() {
        return Err(ApiError::Forbidden("Admin access required".into()));
    }
    Ok(user)
}
