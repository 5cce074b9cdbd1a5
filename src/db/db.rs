use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use std::time::Duration;

use crate::models::{User, UserCreate, UserIden, UserRole, UserUpdate};

use crate::common::{GeneralError, UserError};
use crate::log_err;

#[derive(Clone)]
pub struct Database {
    pub pool: PgPool,
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
        }
        _ => false,
    }
}

fn split_iden(data: &UserIden) -> (Option<Uuid>, Option<String>) {
    match data {
        UserIden::Id(id) => (Some(*id), None),
        UserIden::Username(username) => (None, Some(username.clone())),
    }
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self, GeneralError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    pub async fn add_user(&self, data: &UserCreate) -> Result<User, UserError> {
        if data.username.trim().is_empty() {
            return Err(UserError::InvalidRequest(
                "Username is required".into(),
            ));
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            ON CONFLICT (username) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(data.username.trim())
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_optional(&self.pool)
        .await?;

        match user {
            Some(u) => Ok(u),
            None => Err(UserError::AlreadyExists(data.username.trim().into())),
        }
    }

    pub async fn get_user(&self, data: &UserIden) -> Result<User, UserError> {
        let (id, username) = split_iden(data);

        let result = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users WHERE id = $1 OR username = $2"#,
        )
        .bind(id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        result.ok_or_else(|| UserError::NotFound(data.clone()))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        let users = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users ORDER BY created_at ASC, username ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn any_admin(&self) -> Result<bool, UserError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM users WHERE role = $1)"#,
        )
        .bind(UserRole::Admin)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Applies the present fields of `data`; absent fields keep their value.
    pub async fn update_user(
        &self,
        data: &UserUpdate,
    ) -> Result<User, UserError> {
        if data.is_empty() {
            return self.get_user(&data.id.into()).await;
        }

        if data.username.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err(UserError::InvalidRequest(
                "Username is required".into(),
            ));
        }

        let result = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                username = COALESCE($2, username),
                password_hash = COALESCE($3, password_hash),
                role = COALESCE($4, role),
                is_active = COALESCE($5, is_active)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(data.id)
        .bind(data.username.as_deref().map(str::trim))
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(u)) => Ok(u),
            Ok(None) => Err(UserError::NotFound(data.id.into())),
            Err(e) if is_unique_violation(&e) => {
                let username = data.username.clone().unwrap_or_default();
                Err(UserError::AlreadyExists(username.into()))
            }
            Err(e) => {
                log_err!(&self.pool, (data.id, e.to_string()));
                Err(UserError::Database(e))
            }
        }
    }

    pub async fn delete_user(
        &self,
        data: &UserIden,
    ) -> Result<User, UserError> {
        let (id, username) = split_iden(data);

        let user = sqlx::query_as::<_, User>(
            r#"
            DELETE FROM users
            WHERE id = $1 OR username = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| UserError::NotFound(data.clone()))
    }
}
