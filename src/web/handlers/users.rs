use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use maizul::common::UserError;
use maizul::models::{UserCreate, UserUpdate};
use maizul::services::PasswordManager;
use maizul::types::{UserCreateRequest, UserPublic, UserUpdateRequest};

use crate::web::errors::ApiError;
use crate::web::helpers::require_admin;
use crate::web::security::{PasswordValidator, validate_username};
use crate::web::state::AppState;

fn hash(password: &str) -> Result<String, ApiError> {
    PasswordValidator::validate(password).map_err(ApiError::BadRequest)?;
    PasswordManager::hash_password(password).map_err(|e| {
        log::error!("Password hashing failed: {}", e);
        ApiError::Internal
    })
}

#[get("/api/users")]
pub async fn list_users(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    require_admin(&req, &state).await?;

    let users: Vec<UserPublic> = state
        .db
        .list_users()
        .await?
        .into_iter()
        .map(UserPublic::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

#[post("/api/users")]
pub async fn create_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<UserCreateRequest>,
) -> Result<HttpResponse, ApiError> {
    let admin = require_admin(&req, &state).await?;
    let body = body.into_inner();

    validate_username(&body.username).map_err(ApiError::BadRequest)?;

    let user = state
        .db
        .add_user(&UserCreate {
            username: body.username.trim().to_string(),
            password_hash: hash(&body.password)?,
            role: body.role,
        })
        .await?;

    log::info!(
        "Admin '{}' created user '{}' ({})",
        admin.username,
        user.username,
        user.role
    );
    Ok(HttpResponse::Created().json(UserPublic::from(user)))
}

#[put("/api/users/{id}")]
pub async fn update_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<UserUpdateRequest>,
) -> Result<HttpResponse, ApiError> {
    let admin = require_admin(&req, &state).await?;
    let body = body.into_inner();

    if let Some(username) = &body.username {
        validate_username(username).map_err(ApiError::BadRequest)?;
    }

    let password_hash = match &body.password {
        Some(password) => Some(hash(password)?),
        None => None,
    };

    let update = UserUpdate {
        id: path.into_inner(),
        username: body.username,
        password_hash,
        role: body.role,
        is_active: body.is_active,
    };

    if update.deactivates(admin.id) {
        return Err(UserError::SelfModification("deactivate").into());
    }

    let user = state.db.update_user(&update).await?;
    Ok(HttpResponse::Ok().json(UserPublic::from(user)))
}

#[delete("/api/users/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let admin = require_admin(&req, &state).await?;
    let id = path.into_inner();

    if id == admin.id {
        return Err(UserError::SelfModification("delete").into());
    }

    let user = state.db.delete_user(&id.into()).await?;
    log::info!(
        "Admin '{}' deleted user '{}'",
        admin.username,
        user.username
    );

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
