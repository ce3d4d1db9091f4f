use crate::application_port::{AccountError, CredentialHasher};
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Argon2id with the crate defaults (m=19456 KiB, t=2, p=1) and a random
/// salt per hash. The cost is the interactive-login tunable; raising it
/// means re-hashing on next successful login, which is out of scope here.
pub struct Argon2PasswordHasher;

#[async_trait::async_trait]
impl CredentialHasher for Argon2PasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, AccountError> {
        let salt = argon2::password_hash::SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AccountError::Internal(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    async fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, AccountError> {
        // A stored hash that fails to parse is treated as a mismatch, not
        // an error, so both outcomes share one path.
        let Ok(parsed) = PasswordHash::new(password_hash) else {
            return Ok(false);
        };

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
