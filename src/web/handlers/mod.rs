pub mod auth;
pub mod menu;
pub mod public;
pub mod system;
pub mod users;

use actix_web::web;

use crate::web::errors::ApiError;

/// API routes first; the public `/{lang}` pages would otherwise shadow `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|_err, _req| {
        ApiError::NotFound("Not found".into()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(err.to_string()).into()
    }));

    system::configure(cfg);
    auth::configure(cfg);
    menu::configure(cfg);
    users::configure(cfg);
    public::configure(cfg);
}
