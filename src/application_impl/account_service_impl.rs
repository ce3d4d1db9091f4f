use crate::application_port::*;
use crate::domain_model::UserId;
use crate::domain_port::CredentialRepo;
use std::sync::Arc;
use tracing::debug;

/// Orchestrates the credential store, hasher, and token issuer. Holds no
/// per-request state; every operation runs to completion independently.
pub struct RealAccountService {
    credential_repo: Arc<dyn CredentialRepo>,
    credential_hasher: Arc<dyn CredentialHasher>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl RealAccountService {
    pub fn new(
        credential_repo: Arc<dyn CredentialRepo>,
        credential_hasher: Arc<dyn CredentialHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            credential_repo,
            credential_hasher,
            token_issuer,
        }
    }
}

#[async_trait::async_trait]
impl AccountService for RealAccountService {
    async fn register(&self, request: RegisterInput) -> Result<UserId, AccountError> {
        let RegisterInput { username, password } = request;

        let password_hash = self.credential_hasher.hash_password(&password).await?;
        let user_id = self
            .credential_repo
            .create(&username, &password_hash)
            .await?;

        Ok(user_id)
    }

    async fn login(&self, request: LoginInput) -> Result<LoginResult, AccountError> {
        let LoginInput { username, password } = request;

        // Lookup strictly precedes verification; an unknown username and a
        // wrong password are distinct failures at this boundary.
        let rec = self
            .credential_repo
            .find_by_username(&username)
            .await?
            .ok_or(AccountError::NotFound)?;

        let ok = self
            .credential_hasher
            .verify_password(&password, &rec.password_hash)
            .await?;
        if !ok {
            return Err(AccountError::Unauthorized);
        }

        let (access_token, expires_at) = self.token_issuer.issue(rec.id).await?;

        Ok(LoginResult {
            user_id: rec.id,
            access_token,
            expires_at,
        })
    }

    async fn delete_user(&self, user_id: UserId) -> Result<u64, AccountError> {
        let removed = self.credential_repo.delete_by_id(user_id).await?;
        if removed == 0 {
            debug!(%user_id, "delete for an id with no row");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_impl::{Argon2PasswordHasher, JwtHs256Issuer, TokenConfig};
    use crate::domain_port::UserRecord;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    struct MemoryCredentialRepo {
        state: Mutex<RepoState>,
    }

    struct RepoState {
        next_id: i64,
        rows: HashMap<String, UserRecord>,
    }

    impl MemoryCredentialRepo {
        fn new() -> Self {
            MemoryCredentialRepo {
                state: Mutex::new(RepoState {
                    next_id: 1,
                    rows: HashMap::new(),
                }),
            }
        }

        fn rows_for(&self, username: &str) -> usize {
            let state = self.state.lock().unwrap();
            state.rows.values().filter(|r| r.username == username).count()
        }

        fn stored_hash(&self, username: &str) -> Option<String> {
            let state = self.state.lock().unwrap();
            state.rows.get(username).map(|r| r.password_hash.clone())
        }
    }

    #[async_trait::async_trait]
    impl CredentialRepo for MemoryCredentialRepo {
        async fn create(
            &self,
            username: &str,
            password_hash: &str,
        ) -> Result<UserId, AccountError> {
            let mut state = self.state.lock().unwrap();
            if state.rows.contains_key(username) {
                return Err(AccountError::Conflict);
            }
            let id = UserId(state.next_id);
            state.next_id += 1;
            state.rows.insert(
                username.to_string(),
                UserRecord {
                    id,
                    username: username.to_string(),
                    password_hash: password_hash.to_string(),
                    created_at: Utc::now(),
                },
            );
            Ok(id)
        }

        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<UserRecord>, AccountError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.get(username).cloned())
        }

        async fn delete_by_id(&self, id: UserId) -> Result<u64, AccountError> {
            let mut state = self.state.lock().unwrap();
            let before = state.rows.len();
            state.rows.retain(|_, r| r.id != id);
            Ok((before - state.rows.len()) as u64)
        }
    }

    fn service(repo: Arc<MemoryCredentialRepo>) -> RealAccountService {
        RealAccountService::new(
            repo,
            Arc::new(Argon2PasswordHasher),
            Arc::new(JwtHs256Issuer::new(TokenConfig {
                ttl: Duration::from_secs(24 * 60 * 60),
                signing_key: b"test-signing-key".to_vec(),
            })),
        )
    }

    fn creds(username: &str, password: &str) -> RegisterInput {
        RegisterInput {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_then_login_round_trip() {
        let repo = Arc::new(MemoryCredentialRepo::new());
        let service = service(repo.clone());

        let user_id = service.register(creds("alice", "s3cr3t")).await.unwrap();

        let result = service
            .login(LoginInput {
                username: "alice".to_string(),
                password: "s3cr3t".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.user_id, user_id);
        assert!(!result.access_token.0.is_empty());
        assert!(result.expires_at > Utc::now());
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_unauthorized() {
        let repo = Arc::new(MemoryCredentialRepo::new());
        let service = service(repo);

        service.register(creds("alice", "s3cr3t")).await.unwrap();

        let err = service
            .login(LoginInput {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::Unauthorized));
    }

    #[tokio::test]
    async fn login_for_unknown_user_is_not_found() {
        let repo = Arc::new(MemoryCredentialRepo::new());
        let service = service(repo);

        let err = service
            .login(LoginInput {
                username: "nobody".to_string(),
                password: "whatever".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AccountError::NotFound));
    }

    #[tokio::test]
    async fn duplicate_register_conflicts_and_keeps_one_row() {
        let repo = Arc::new(MemoryCredentialRepo::new());
        let service = service(repo.clone());

        service.register(creds("alice", "s3cr3t")).await.unwrap();
        let err = service.register(creds("alice", "other")).await.unwrap_err();

        assert!(matches!(err, AccountError::Conflict));
        assert_eq!(repo.rows_for("alice"), 1);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_a_zero_count_no_op() {
        let repo = Arc::new(MemoryCredentialRepo::new());
        let service = service(repo.clone());

        let user_id = service.register(creds("alice", "s3cr3t")).await.unwrap();

        assert_eq!(service.delete_user(UserId(999_999)).await.unwrap(), 0);
        assert_eq!(service.delete_user(user_id).await.unwrap(), 1);
        assert_eq!(service.delete_user(user_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn stored_hash_is_never_the_plaintext() {
        let repo = Arc::new(MemoryCredentialRepo::new());
        let service = service(repo.clone());

        service.register(creds("alice", "s3cr3t")).await.unwrap();

        let hash = repo.stored_hash("alice").unwrap();
        assert_ne!(hash, "s3cr3t");
        assert!(hash.starts_with("$argon2"));
    }
}
