use std::future::Future;
use std::sync::Arc;

use super::{ApiClient, ClientError};
use crate::storage::{KeyValueStore, TOKEN_KEY};
use crate::types::{LoginRequest, UserPublic, UserUpdateRequest};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated(UserPublic),
}

/// Holds the bearer credential and the profile it resolves to.
///
/// ```text
/// Anonymous --login / verify ok--> Authenticated
/// Authenticated --logout / verify fails / 401--> Anonymous
/// ```
///
/// Writes to the store are part of a transition and their errors are
/// returned. Removing the token never blocks sign-out; a failed removal is
/// only logged.
pub struct Session {
    client: ApiClient,
    store: Arc<dyn KeyValueStore>,
    profile: Option<UserPublic>,
}

impl Session {
    pub fn new(client: ApiClient, store: Arc<dyn KeyValueStore>) -> Self {
        client.set_token(None);
        Self {
            client,
            store,
            profile: None,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn profile(&self) -> Option<&UserPublic> {
        self.profile.as_ref()
    }

    pub fn state(&self) -> SessionState {
        match &self.profile {
            Some(profile) => SessionState::Authenticated(profile.clone()),
            None => SessionState::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(UserPublic::is_admin)
    }

    pub fn is_editor(&self) -> bool {
        self.profile.as_ref().is_some_and(UserPublic::is_editor)
    }

    /// Resolves a persisted token into a profile. Any failure drops the
    /// token and leaves the session anonymous.
    pub async fn verify(&mut self) -> Option<UserPublic> {
        let token = self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())?;
        self.client.set_token(Some(token));

        match self.client.me().await {
            Ok(profile) => {
                self.profile = Some(profile.clone());
                Some(profile)
            }
            Err(e) => {
                log::warn!("stored session rejected: {}", e);
                self.clear();
                None
            }
        }
    }

    /// On failure the session keeps whatever state it had before. A token
    /// that cannot be persisted fails the login with
    /// [`ClientError::Storage`].
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<UserPublic, ClientError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Username and password are required".into(),
            ));
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.client.login(&request).await?;

        self.store.set(TOKEN_KEY, &response.token)?;
        self.client.set_token(Some(response.token));
        self.profile = Some(response.user.clone());

        Ok(response.user)
    }

    pub fn logout(&mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        self.client.set_token(None);
        self.profile = None;
        if let Err(e) = self.store.remove(TOKEN_KEY) {
            log::warn!("failed to remove session token: {}", e);
        }
    }

    /// Demotes the session when a protected call reports the credential
    /// as rejected, then hands the result back.
    pub fn settle<T>(
        &mut self,
        result: Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        if matches!(result, Err(ClientError::SessionExpired)) {
            log::info!("session expired, signing out");
            self.clear();
        }
        result
    }

    /// Runs a protected call against the session's client.
    pub async fn call<T, F, Fut>(&mut self, f: F) -> Result<T, ClientError>
    where
        F: FnOnce(ApiClient) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        if !self.is_authenticated() {
            return Err(ClientError::SessionExpired);
        }
        let result = f(self.client.clone()).await;
        self.settle(result)
    }

    fn ensure_not_self(
        &self,
        target: &UserPublic,
        action: &str,
    ) -> Result<(), ClientError> {
        match &self.profile {
            Some(me) if me.id == target.id => {
                Err(ClientError::Validation(format!(
                    "You cannot {} your own account",
                    action
                )))
            }
            _ => Ok(()),
        }
    }

    /// Flips `is_active` on another account.
    pub async fn toggle_active(
        &mut self,
        target: &UserPublic,
    ) -> Result<UserPublic, ClientError> {
        self.ensure_not_self(target, "deactivate")?;

        let id = target.id;
        let update = UserUpdateRequest {
            is_active: Some(!target.is_active),
            ..Default::default()
        };
        self.call(
            |client| async move { client.update_user(id, &update).await },
        )
        .await
    }

    pub async fn delete_user(
        &mut self,
        target: &UserPublic,
    ) -> Result<(), ClientError> {
        self.ensure_not_self(target, "delete")?;

        let id = target.id;
        self.call(|client| async move { client.delete_user(id).await })
            .await
    }
}
