use std::env;
use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::i18n::Locale;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Configuration {
    pub database_url: String,
    pub bind_addr: String,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub default_locale: Locale,
    pub utc_offset_minutes: i32,
    pub seed_admin_username: String,
    pub seed_admin_password: Option<String>,
}

impl Configuration {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required =
            |key: &'static str| var(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: var("BIND_ADDR")
                .unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_hours: parse_or(
                "JWT_EXPIRATION_HOURS",
                var("JWT_EXPIRATION_HOURS"),
                24,
            )?,
            default_locale: parse_or(
                "DEFAULT_LANGUAGE",
                var("DEFAULT_LANGUAGE"),
                Locale::Es,
            )?,
            utc_offset_minutes: parse_or(
                "RESTAURANT_UTC_OFFSET_MINUTES",
                var("RESTAURANT_UTC_OFFSET_MINUTES"),
                -360,
            )?,
            seed_admin_username: var("SEED_ADMIN_USERNAME")
                .unwrap_or_else(|| "admin".to_string()),
            seed_admin_password: var("SEED_ADMIN_PASSWORD"),
        })
    }
}

fn parse_or<T>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        None => {
            log::info!("{} not set, using default", key);
            Ok(default)
        }
        Some(value) => {
            value.parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                reason: e.to_string(),
                value,
            })
        }
    }
}
