use std::sync::Arc;

use maizul::config::Configuration;
use maizul::db::Database;
use maizul::i18n::{Catalog, Locale};
use maizul::schedule::{PeriodWatcher, ServiceHours};
use maizul::services::TokenService;

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub rate_limiter: Arc<RateLimiter>,
    pub tokens: Arc<TokenService>,
    pub catalog: &'static Catalog,
    pub hours: ServiceHours,
    pub period: Arc<PeriodWatcher>,
    pub config: Arc<Configuration>,
}

impl AppState {
    pub fn default_locale(&self) -> Locale {
        self.config.default_locale
    }
}

#[cfg(test)]
impl AppState {
    pub const TEST_SECRET: &'static str = "handler-test-secret";

    /// State over `pool` with default hours and a fixed signing secret.
    pub fn for_tests(pool: sqlx::PgPool) -> Self {
        use maizul::schedule::{DEFAULT_POLL_INTERVAL, RestaurantClock};

        let hours = ServiceHours::default();
        let config = Configuration {
            database_url: String::new(),
            bind_addr: "127.0.0.1:0".into(),
            jwt_secret: Self::TEST_SECRET.into(),
            jwt_expiration_hours: 1,
            default_locale: Locale::Es,
            utc_offset_minutes: 0,
            seed_admin_username: "admin".into(),
            seed_admin_password: None,
        };

        Self {
            db: Database::from_pool(pool),
            rate_limiter: Arc::new(RateLimiter::default()),
            tokens: Arc::new(TokenService::new(
                Self::TEST_SECRET,
                chrono::Duration::hours(1),
            )),
            catalog: Catalog::embedded(),
            hours,
            period: Arc::new(PeriodWatcher::spawn(
                hours,
                RestaurantClock::from_offset_minutes(0),
                DEFAULT_POLL_INTERVAL,
            )),
            config: Arc::new(config),
        }
    }

    /// Pool that never connects; for paths rejected before any query.
    pub fn offline() -> Self {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgres://maizul@localhost/maizul")
            .unwrap();
        Self::for_tests(pool)
    }
}
