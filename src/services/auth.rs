use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use std::sync::OnceLock;

const MEMORY_KIB: u32 = 64 * 1024;
const ITERATIONS: u32 = 3;
const LANES: u32 = 4;

pub struct PasswordManager;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();
static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        INSTANCE.get_or_init(|| {
            let params = Params::new(MEMORY_KIB, ITERATIONS, LANES, None)
                .expect("Invalid Argon2 parameters");

            Argon2::new(
                argon2::Algorithm::Argon2id,
                argon2::Version::V0x13,
                params,
            )
        })
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_password(
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        match Self::engine()
            .verify_password(password.as_bytes(), &parsed_hash)
        {
            Ok(_) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Burns the same work as a real verification so an unknown username
    /// answers in the same time as a wrong password.
    pub fn verify_against_dummy(password: &str) {
        let dummy = DUMMY_HASH.get_or_init(|| {
            Self::hash_password("maizul-dummy-password")
                .map_err(|e| {
                    log::error!("Failed to generate dummy hash: {}", e)
                })
                .ok()
        });

        if let Some(hash) = dummy {
            let _ = Self::verify_password(password, hash);
        }
    }
}
