use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use super::ClientError;
use crate::models::{
    MenuItem, MenuItemCreate, MenuItemUpdate, MenuReorderEntry,
};
use crate::types::{
    ErrorBody, LoginRequest, MessageResponse, TokenResponse,
    UserCreateRequest, UserPublic, UserUpdateRequest,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the restaurant API.
///
/// Every request goes through [`ApiClient::request`], which attaches the
/// current bearer token when one is held. Clones share the token.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// `base_url` includes the API prefix, e.g. `https://host/api`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http =
            reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = token;
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));

        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn failure(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.detail)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                } else {
                    body
                }
            });
        (status, detail)
    }

    async fn checked(builder: RequestBuilder) -> Result<Response, ClientError> {
        let response = builder.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let (status, detail) = Self::failure(response).await;
        Err(ClientError::from_status(status, detail))
    }

    async fn json<T: DeserializeOwned>(
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        Ok(Self::checked(builder).await?.json::<T>().await?)
    }

    pub async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<TokenResponse, ClientError> {
        let response = self
            .request(Method::POST, "/auth/login")
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.json().await?);
        }

        match Self::failure(response).await {
            (StatusCode::UNAUTHORIZED, detail) => {
                Err(ClientError::Auth(detail))
            }
            (status, detail) => Err(ClientError::from_status(status, detail)),
        }
    }

    pub async fn me(&self) -> Result<UserPublic, ClientError> {
        Self::json(self.request(Method::GET, "/auth/me")).await
    }

    pub async fn list_menu(
        &self,
        available_only: bool,
    ) -> Result<Vec<MenuItem>, ClientError> {
        let builder = self
            .request(Method::GET, "/menu")
            .query(&[("available_only", available_only)]);
        Self::json(builder).await
    }

    pub async fn get_menu_item(
        &self,
        id: Uuid,
    ) -> Result<MenuItem, ClientError> {
        Self::json(self.request(Method::GET, &format!("/menu/{}", id))).await
    }

    pub async fn create_menu_item(
        &self,
        data: &MenuItemCreate,
    ) -> Result<MenuItem, ClientError> {
        data.validate().map_err(ClientError::Validation)?;
        Self::json(self.request(Method::POST, "/menu").json(data)).await
    }

    pub async fn update_menu_item(
        &self,
        id: Uuid,
        data: &MenuItemUpdate,
    ) -> Result<MenuItem, ClientError> {
        data.validate().map_err(ClientError::Validation)?;
        let path = format!("/menu/{}", id);
        Self::json(self.request(Method::PUT, &path).json(data)).await
    }

    pub async fn delete_menu_item(&self, id: Uuid) -> Result<(), ClientError> {
        let path = format!("/menu/{}", id);
        Self::checked(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    pub async fn reorder_menu(
        &self,
        entries: &[MenuReorderEntry],
    ) -> Result<MessageResponse, ClientError> {
        let builder = self.request(Method::PUT, "/menu/reorder").json(entries);
        Self::json(builder).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserPublic>, ClientError> {
        Self::json(self.request(Method::GET, "/users")).await
    }

    pub async fn create_user(
        &self,
        data: &UserCreateRequest,
    ) -> Result<UserPublic, ClientError> {
        if data.username.trim().is_empty() || data.password.is_empty() {
            return Err(ClientError::Validation(
                "Username and password are required".into(),
            ));
        }
        Self::json(self.request(Method::POST, "/users").json(data)).await
    }

    pub async fn update_user(
        &self,
        id: Uuid,
        data: &UserUpdateRequest,
    ) -> Result<UserPublic, ClientError> {
        let path = format!("/users/{}", id);
        Self::json(self.request(Method::PUT, &path).json(data)).await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), ClientError> {
        let path = format!("/users/{}", id);
        Self::checked(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}
