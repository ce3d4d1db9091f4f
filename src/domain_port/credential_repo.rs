use crate::application_port::*;
use crate::domain_model::*;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Sole owner of persisted user rows. Usernames are compared byte-exact;
/// uniqueness is enforced by the store, not checked by callers first.
#[async_trait::async_trait]
pub trait CredentialRepo: Send + Sync {
    /// Insert a row and return the store-assigned id. A username collision
    /// is `AccountError::Conflict`.
    async fn create(&self, username: &str, password_hash: &str) -> Result<UserId, AccountError>;

    /// Point lookup for login. The returned record carries the password
    /// hash and must not travel past the account service.
    async fn find_by_username(&self, username: &str)
    -> Result<Option<UserRecord>, AccountError>;

    /// Idempotent delete; an absent id yields `Ok(0)`.
    async fn delete_by_id(&self, id: UserId) -> Result<u64, AccountError>;
}
