use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sliding-window limiter keyed by an arbitrary string (client address).
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    hits: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: Mutex::new(HashMap::new()),
        }
    }

    /// Records an attempt for `key`; false once the window is full.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        let mut hits = self
            .hits
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = hits.entry(key.to_string()).or_default();
        entry.retain(|&at| now.saturating_duration_since(at) < self.window);

        if entry.len() >= self.max_requests {
            return false;
        }
        entry.push(now);

        hits.retain(|_, times| !times.is_empty());
        true
    }
}

/// Login attempts: 5 per client per 5 minutes.
impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(300))
    }
}

pub struct PasswordValidator;

impl PasswordValidator {
    const MIN_LENGTH: usize = 8;

    pub fn validate(password: &str) -> Result<(), String> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(format!(
                "Password must be at least {} characters",
                Self::MIN_LENGTH
            ));
        }

        let classes = [
            password.chars().any(char::is_uppercase),
            password.chars().any(char::is_lowercase),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_alphanumeric()),
        ];

        if classes.iter().filter(|&&met| met).count() < 3 {
            return Err(
                "Password must contain at least 3 of: uppercase, lowercase, digit, special character"
                    .to_string(),
            );
        }

        Ok(())
    }
}

pub fn validate_username(username: &str) -> Result<(), String> {
    let username = username.trim();

    if username.is_empty() {
        return Err("Username is required".into());
    }
    if username.len() > 64 {
        return Err("Username must be at most 64 characters".into());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(
            "Username may only contain letters, digits, '.', '_' and '-'"
                .into(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limiter_blocks_after_max_attempts() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));
        let now = Instant::now();

        assert!(limiter.check_at("ip", now));
        assert!(limiter.check_at("ip", now));
        assert!(!limiter.check_at("ip", now));
        assert!(limiter.check_at("other", now));
    }

    #[test]
    fn limiter_forgets_attempts_outside_window() {
        let limiter = RateLimiter::new(1, Duration::from_secs(10));
        let start = Instant::now();

        assert!(limiter.check_at("ip", start));
        assert!(!limiter.check_at("ip", start + Duration::from_secs(5)));
        assert!(limiter.check_at("ip", start + Duration::from_secs(11)));
    }

    #[test]
    fn password_rules() {
        assert!(PasswordValidator::validate("Damian.01").is_ok());
        assert!(PasswordValidator::validate("short1A").is_err());
        assert!(PasswordValidator::validate("alllowercase").is_err());
        assert!(PasswordValidator::validate("lowercase123").is_err());
        assert!(PasswordValidator::validate("Lowercase123").is_ok());
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("maria.g").is_ok());
        assert!(validate_username("   ").is_err());
        assert!(validate_username("two words").is_err());
        assert!(validate_username(&"a".repeat(65)).is_err());
    }
}
