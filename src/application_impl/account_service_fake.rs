use crate::application_port::*;
use crate::domain_model::UserId;
use chrono::{Duration, Utc};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[derive(Debug)]
pub struct FakeAccountService;

impl FakeAccountService {
    pub fn new() -> Self {
        Self
    }
}

// Minimal fake implementation for basic use only.
// Extend to simulate more error cases and configurable responses when needed.
#[async_trait::async_trait]
impl AccountService for FakeAccountService {
    async fn register(&self, request: RegisterInput) -> Result<UserId, AccountError> {
        Ok(get_fake_id(&request.username))
    }

    async fn login(&self, request: LoginInput) -> Result<LoginResult, AccountError> {
        Ok(LoginResult {
            user_id: get_fake_id(&request.username),
            access_token: AccessToken(format!("fake-access-token:{}", request.username)),
            expires_at: Utc::now() + Duration::days(1),
        })
    }

    async fn delete_user(&self, _user_id: UserId) -> Result<u64, AccountError> {
        Ok(1)
    }
}

fn get_fake_id(username: &str) -> UserId {
    let mut hasher = DefaultHasher::new();
    username.hash(&mut hasher);
    UserId((hasher.finish() & 0x7fff_ffff) as i64)
}
