use actix_web::{HttpRequest, HttpResponse, get, post, web};

use maizul::common::UserError;
use maizul::services::PasswordManager;
use maizul::types::{LoginRequest, TokenResponse, UserPublic};

use crate::web::errors::ApiError;
use crate::web::helpers::{client_ip, current_user};
use crate::web::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    if !state.rate_limiter.check(&format!("login:{}", client_ip(&req))) {
        return Err(ApiError::TooManyRequests);
    }

    let LoginRequest { username, password } = body.into_inner();
    let username = username.trim();

    let user = match state.db.get_user(&username.into()).await {
        Ok(u) => u,
        Err(UserError::NotFound(_)) => {
            // Unknown usernames cost as much as a wrong password.
            PasswordManager::verify_against_dummy(&password);
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.into()));
        }
        Err(e) => return Err(e.into()),
    };

    let valid =
        PasswordManager::verify_password(&password, &user.password_hash)
            .unwrap_or_else(|e| {
                log::error!(
                    "Stored hash for user {} is unreadable: {}",
                    user.id,
                    e
                );
                false
            });
    if !valid {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    if !user.can_sign_in() {
        return Err(ApiError::Unauthorized(
            "User account is disabled".into(),
        ));
    }

    let token = state.tokens.issue(&user)?;
    log::info!("User '{}' signed in", user.username);

    Ok(HttpResponse::Ok().json(TokenResponse {
        token,
        user: user.into(),
    }))
}

#[get("/api/auth/me")]
pub async fn me(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user = current_user(&req, &state).await?;
    Ok(HttpResponse::Ok().json(UserPublic::from(user)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login).service(me);
}
