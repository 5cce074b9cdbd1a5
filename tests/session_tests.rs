mod common;

#[cfg(test)]
pub mod session_tests {
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::common::*;

    use maizul::client::*;
    use maizul::models::*;
    use maizul::storage::{KeyValueStore, MemoryStore, TOKEN_KEY};

    async fn setup() -> (MockServer, Arc<MemoryStore>, Session) {
        let server = MockServer::start().await;
        let store = Arc::new(MemoryStore::new());
        let client = ApiClient::new(format!("{}/api/", server.uri())).unwrap();
        let session = Session::new(client, store.clone());
        (server, store, session)
    }

    async fn mount_login(
        server: &MockServer,
        token: &str,
        role: UserRole,
    ) -> serde_json::Value {
        let user = user_public_json(&user_public(role));
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "token": token, "user": user })),
            )
            .mount(server)
            .await;
        user
    }

    #[tokio::test]
    async fn test_login_success_persists_token() {
        let (server, store, mut session) = setup().await;
        let user = mount_login(&server, "tok-1", UserRole::Admin).await;

        let profile = session.login(" admin ", "secret").await.unwrap();

        assert_eq!(profile.username, user["username"]);
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert!(session.is_editor());
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-1"));
        assert_eq!(session.client().token().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_login_fails_when_token_cannot_be_stored() {
        let server = MockServer::start().await;
        mount_login(&server, "tok-1", UserRole::Admin).await;
        let client = ApiClient::new(format!("{}/api/", server.uri())).unwrap();
        let store = Arc::new(ReadOnlyStore::with(&[]));
        let mut session = Session::new(client, store);

        let err = session.login("admin", "secret").await.unwrap_err();

        assert!(matches!(err, ClientError::Storage(_)));
        assert!(!session.is_authenticated());
        assert_eq!(session.client().token(), None);
    }

    #[tokio::test]
    async fn test_login_sends_trimmed_username() {
        let (server, _store, mut session) = setup().await;
        let user = user_public_json(&user_public(UserRole::Editor));
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({ "username": "maria", "password": "pw" })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "token": "t", "user": user })),
            )
            .expect(1)
            .mount(&server)
            .await;

        session.login("  maria ", "pw").await.unwrap();
        assert!(!session.is_admin());
        assert!(session.is_editor());
    }

    #[tokio::test]
    async fn test_login_rejected_leaves_session_anonymous() {
        let (server, store, mut session) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "detail": "Invalid credentials" })),
            )
            .mount(&server)
            .await;

        let err = session.login("admin", "wrong").await.unwrap_err();

        assert!(matches!(
            &err,
            ClientError::Auth(detail) if detail == "Invalid credentials"
        ));
        assert!(!session.is_authenticated());
        assert_eq!(session.state(), SessionState::Anonymous);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_login_requires_both_fields_before_network() {
        let (server, _store, mut session) = setup().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let err = session.login("   ", "pw").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }

    #[tokio::test]
    async fn test_verify_restores_persisted_session() {
        let (server, store, mut session) = setup().await;
        store.set(TOKEN_KEY, "good").unwrap();
        let user = user_public(UserRole::Editor);

        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .and(header("authorization", "Bearer good"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(user_public_json(&user)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let profile = session.verify().await;

        assert_eq!(profile.as_ref(), Some(&user));
        assert_eq!(session.state(), SessionState::Authenticated(user));
    }

    #[tokio::test]
    async fn test_verify_failure_clears_stale_token() {
        let (server, store, mut session) = setup().await;
        store.set(TOKEN_KEY, "stale").unwrap();

        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "detail": "Token expired" })),
            )
            .mount(&server)
            .await;

        assert_eq!(session.verify().await, None);
        assert!(!session.is_authenticated());
        assert!(session.profile().is_none());
        assert_eq!(session.client().token(), None);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_verify_without_token_skips_network() {
        let (server, _store, mut session) = setup().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        assert_eq!(session.verify().await, None);
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let (server, store, mut session) = setup().await;
        mount_login(&server, "tok-2", UserRole::Admin).await;
        session.login("admin", "secret").await.unwrap();

        session.logout();

        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.client().token(), None);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_protected_calls_carry_bearer_token() {
        let (server, _store, mut session) = setup().await;
        mount_login(&server, "tok-3", UserRole::Admin).await;
        session.login("admin", "secret").await.unwrap();

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .and(header("authorization", "Bearer tok-3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let users = session
            .call(|client| async move { client.list_users().await })
            .await
            .unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_response_demotes_session() {
        let (server, store, mut session) = setup().await;
        mount_login(&server, "tok-4", UserRole::Admin).await;
        session.login("admin", "secret").await.unwrap();

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "detail": "Token expired" })),
            )
            .mount(&server)
            .await;

        let err = session
            .call(|client| async move { client.list_users().await })
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::SessionExpired));
        assert!(!session.is_authenticated());
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_forbidden_keeps_session() {
        let (server, _store, mut session) = setup().await;
        mount_login(&server, "tok-5", UserRole::Editor).await;
        session.login("editor", "secret").await.unwrap();

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({
                        "detail": "Admin access required",
                    })),
            )
            .mount(&server)
            .await;

        let err = session
            .call(|client| async move { client.list_users().await })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Forbidden(detail) if detail == "Admin access required"
        ));
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_toggle_self_rejected_without_network() {
        let (server, _store, mut session) = setup().await;
        let me = user_public(UserRole::Admin);
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "token": "tok-6",
                        "user": user_public_json(&me),
                    })),
            )
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        session.login("admin", "secret").await.unwrap();

        let toggled = session.toggle_active(&me).await;
        assert!(matches!(toggled, Err(ClientError::Validation(_))));

        let deleted = session.delete_user(&me).await;
        assert!(matches!(deleted, Err(ClientError::Validation(_))));
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_toggle_other_user_flips_active_flag() {
        let (server, _store, mut session) = setup().await;
        mount_login(&server, "tok-7", UserRole::Admin).await;
        session.login("admin", "secret").await.unwrap();

        let other = user_public(UserRole::Editor);
        let mut updated = other.clone();
        updated.is_active = false;

        Mock::given(method("PUT"))
            .and(path(format!("/api/users/{}", other.id)))
            .and(body_json(json!({ "is_active": false })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(user_public_json(&updated)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = session.toggle_active(&other).await.unwrap();
        assert!(!result.is_active);
    }

    #[tokio::test]
    async fn test_calls_require_authentication() {
        let (_server, _store, mut session) = setup().await;

        let err = session
            .call(|client| async move { client.list_users().await })
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::SessionExpired));
    }

    #[tokio::test]
    async fn test_menu_listing_and_error_mapping() {
        let server = MockServer::start().await;
        let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();
        let item = menu_item(MenuCategory::Lunch, 1, &[MenuTag::Popular]);

        Mock::given(method("GET"))
            .and(path("/api/menu"))
            .and(query_param("available_only", "true"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([item])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/api/menu/{}", item.id)))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "detail": "Menu item not found" })),
            )
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let items = client.list_menu(true).await.unwrap();
        assert_eq!(items, vec![item.clone()]);

        let missing = client.get_menu_item(item.id).await.unwrap_err();
        assert!(matches!(
            missing,
            ClientError::NotFound(detail) if detail == "Menu item not found"
        ));

        let unavailable = client.delete_menu_item(item.id).await.unwrap_err();
        assert!(matches!(unavailable, ClientError::Api { status: 503, .. }));
        assert!(unavailable.is_retryable());
    }

    #[tokio::test]
    async fn test_invalid_menu_item_rejected_locally() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;
        let client = ApiClient::new(format!("{}/api", server.uri())).unwrap();

        let data = MenuItemCreate {
            category: MenuCategory::Dinner,
            name_es: "".into(),
            name_en: "Grilled Octopus".into(),
            description_es: String::new(),
            description_en: String::new(),
            price: -1.0,
            image: None,
            is_featured: false,
            is_available: true,
            sort_order: 0,
            tags: vec![],
        };

        let err = client.create_menu_item(&data).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
    }
}
