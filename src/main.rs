mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use maizul::config::Configuration;
use maizul::db::Database;
use maizul::i18n::Catalog;
use maizul::schedule::{
    DEFAULT_POLL_INTERVAL, PeriodWatcher, RestaurantClock, ServiceHours,
};
use maizul::services::TokenService;

use crate::web::middleware::SecurityHeaders;
use crate::web::security::RateLimiter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Configuration::from_env().map_err(std::io::Error::other)?;

    let db = Database::new(&config.database_url).await.map_err(|e| {
        log::error!("Failed to connect to database / run migrations: {}", e);
        std::io::Error::other(e)
    })?;

    let hours = ServiceHours::default();
    let clock = RestaurantClock::from_offset_minutes(config.utc_offset_minutes);

    let state = web::AppState {
        db,
        rate_limiter: Arc::new(RateLimiter::default()),
        tokens: Arc::new(TokenService::new(
            &config.jwt_secret,
            chrono::Duration::hours(config.jwt_expiration_hours),
        )),
        catalog: Catalog::embedded(),
        hours,
        period: Arc::new(PeriodWatcher::spawn(
            hours,
            clock,
            DEFAULT_POLL_INTERVAL,
        )),
        config: Arc::new(config),
    };

    match web::handlers::system::seed_admin(&state) {
        Ok(admin) => match state.db.seed(admin).await {
            Ok(outcome) if !outcome.is_noop() => log::info!(
                "Seeded database (admin: {:?}, menu items: {})",
                outcome.admin_created,
                outcome.menu_items_created
            ),
            Ok(_) => {}
            Err(e) => log::warn!(
                "Startup seeding failed, /api/seed can retry: {}",
                e
            ),
        },
        Err(e) => log::warn!("Startup seeding skipped: {}", e),
    }

    let bind_addr = state.config.bind_addr.clone();
    log::info!("Listening on {}", bind_addr);

    let state = Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .configure(web::handlers::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
