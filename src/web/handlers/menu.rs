use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use uuid::Uuid;

use maizul::models::{
    MenuCategory, MenuItemCreate, MenuItemUpdate, MenuReorderEntry,
};
use maizul::types::MessageResponse;

use crate::web::errors::ApiError;
use crate::web::helpers::require_editor;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub available_only: Option<bool>,
}

#[get("/api/menu")]
pub async fn list_menu(
    state: web::Data<AppState>,
    query: web::Query<MenuQuery>,
) -> Result<HttpResponse, ApiError> {
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<MenuCategory>().map_err(|_| {
            ApiError::BadRequest(format!("Unknown category '{}'", raw))
        })?),
    };

    let items = state
        .db
        .list_menu(category, query.available_only.unwrap_or(true))
        .await?;

    Ok(HttpResponse::Ok().json(items))
}

#[get("/api/menu/{id}")]
pub async fn get_menu_item(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let item = state.db.get_menu_item(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

#[post("/api/menu")]
pub async fn create_menu_item(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<MenuItemCreate>,
) -> Result<HttpResponse, ApiError> {
    let editor = require_editor(&req, &state).await?;

    let item = state.db.add_menu_item(&body).await?;
    log::info!(
        "'{}' added menu item {} ({})",
        editor.username,
        item.id,
        item.name_es
    );

    Ok(HttpResponse::Created().json(item))
}

#[put("/api/menu/reorder")]
pub async fn reorder_menu(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<Vec<MenuReorderEntry>>,
) -> Result<HttpResponse, ApiError> {
    require_editor(&req, &state).await?;

    let moved = state.db.reorder_menu(&body).await?;
    if moved < body.len() as u64 {
        log::warn!(
            "Reorder skipped {} unknown item(s)",
            body.len() as u64 - moved
        );
    }

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Order updated successfully".into(),
    }))
}

#[put("/api/menu/{id}")]
pub async fn update_menu_item(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<MenuItemUpdate>,
) -> Result<HttpResponse, ApiError> {
    require_editor(&req, &state).await?;

    let item =
        state.db.update_menu_item(path.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(item))
}

#[delete("/api/menu/{id}")]
pub async fn delete_menu_item(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let editor = require_editor(&req, &state).await?;
    let id = path.into_inner();

    state.db.delete_menu_item(id).await?;
    log::info!("'{}' deleted menu item {}", editor.username, id);

    Ok(HttpResponse::NoContent().finish())
}

/// `reorder` must be registered ahead of `{id}` so it is not parsed as an
/// id.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_menu)
        .service(reorder_menu)
        .service(get_menu_item)
        .service(create_menu_item)
        .service(update_menu_item)
        .service(delete_menu_item);
}
