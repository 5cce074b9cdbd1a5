mod common;

#[cfg(test)]
pub mod auth_tests {
    use chrono::Duration;
    use uuid::Uuid;

    use super::common::*;

    use maizul::models::*;
    use maizul::services::*;

    fn user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            username: "maria".into(),
            password_hash: "unused".into(),
            role,
            is_active: true,
            created_at: fixed_time(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let service = TokenService::new("test-secret", Duration::hours(24));
        let user = user(UserRole::Editor);

        let token = service.issue(&user).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "maria");
        assert_eq!(claims.role, UserRole::Editor);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::new("test-secret", Duration::hours(-2));
        let token = service.issue(&user(UserRole::Admin)).unwrap();

        assert!(matches!(service.validate(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let issuer = TokenService::new("secret-a", Duration::hours(1));
        let verifier = TokenService::new("secret-b", Duration::hours(1));
        let token = issuer.issue(&user(UserRole::Admin)).unwrap();

        assert!(matches!(
            verifier.validate(&token),
            Err(TokenError::Invalid(_))
        ));
        assert!(matches!(
            verifier.validate("not-a-jwt"),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = PasswordManager::hash_password("Damian.01").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(PasswordManager::verify_password("Damian.01", &hash).unwrap());
        assert!(!PasswordManager::verify_password("damian.01", &hash).unwrap());
        assert!(
            PasswordManager::verify_password("Damian.01", "garbage").is_err()
        );
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = PasswordManager::hash_password("same").unwrap();
        let b = PasswordManager::hash_password("same").unwrap();
        assert_ne!(a, b);
    }
}
