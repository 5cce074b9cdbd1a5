use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;
use serde_json::json;

use maizul::models::{UserCreate, UserRole};
use maizul::services::PasswordManager;
use maizul::types::{HealthStatus, SeedResponse};

use crate::web::errors::ApiError;
use crate::web::state::AppState;

#[get("/api")]
pub async fn status() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "app": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[get("/api/health")]
pub async fn health(state: web::Data<AppState>) -> impl Responder {
    let database = if state.db.ping().await {
        "connected"
    } else {
        "disconnected"
    };

    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".into(),
        database: database.into(),
        timestamp: Utc::now(),
    })
}

/// Builds the admin account to seed from configuration, if a password is set.
pub fn seed_admin(state: &AppState) -> Result<Option<UserCreate>, ApiError> {
    let Some(password) = state.config.seed_admin_password.as_deref() else {
        return Ok(None);
    };

    let password_hash = PasswordManager::hash_password(password).map_err(|e| {
        log::error!("Password hashing failed: {}", e);
        ApiError::Internal
    })?;

    Ok(Some(UserCreate {
        username: state.config.seed_admin_username.clone(),
        password_hash,
        role: UserRole::Admin,
    }))
}

#[post("/api/seed")]
pub async fn seed(
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let outcome =
        state.db.seed(seed_admin(&state)?).await.map_err(|e| {
            log::error!("Seeding failed: {}", e);
            ApiError::Internal
        })?;

    let message = if outcome.is_noop() {
        "Database already seeded"
    } else {
        "Database seeded successfully"
    };

    Ok(HttpResponse::Ok().json(SeedResponse {
        message: message.into(),
        admin_username: outcome.admin_created,
        menu_items_created: outcome.menu_items_created,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(status).service(health).service(seed);
}
