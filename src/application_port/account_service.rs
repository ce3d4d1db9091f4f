use crate::domain_model::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("duplicate username")]
    Conflict,
    #[error("user not found")]
    NotFound,
    #[error("invalid password")]
    Unauthorized,
    #[error("store error: {0}")]
    Store(String),
    #[error("signing error: {0}")]
    Signing(String),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccessToken(pub String);

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user_id: UserId,
    pub access_token: AccessToken,
    pub expires_at: DateTime<Utc>,
}

/// Issues signed, self-contained session tokens. Holds no record of what it
/// issued; expiration lives inside the token and is checked by whoever
/// verifies it.
#[async_trait::async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, user: UserId) -> Result<(AccessToken, DateTime<Utc>), AccountError>;
}

#[async_trait::async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, AccountError>;

    /// A malformed stored hash verifies `false` instead of erroring, so the
    /// failure path is indistinguishable from a wrong password.
    async fn verify_password(&self, password: &str, password_hash: &str)
    -> Result<bool, AccountError>;
}

#[async_trait::async_trait]
pub trait AccountService: Send + Sync {
    async fn register(&self, request: RegisterInput) -> Result<UserId, AccountError>;
    async fn login(&self, request: LoginInput) -> Result<LoginResult, AccountError>;

    /// Returns the number of rows removed; deleting an unknown id is a
    /// no-op yielding zero.
    async fn delete_user(&self, user_id: UserId) -> Result<u64, AccountError>;
}
