use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_mysql::*;
use crate::logger::*;
use crate::settings::Settings;
use sqlx::{MySql, Pool};
use std::sync::Arc;
use std::time::Duration;

pub struct Server {
    pub account_service: Arc<dyn AccountService>,
    pool: Pool<MySql>,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let pool = Pool::<MySql>::connect(&settings.database.dsn).await?;

        let credential_repo: Arc<dyn CredentialRepo> =
            Arc::new(MySqlCredentialRepo::new(pool.clone()));

        let credential_hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2PasswordHasher {});

        // The signing key never lives in a settings file; the fallback is a
        // dev-only convenience.
        let key = std::env::var("JWT_SIGNING_KEY")
            .unwrap_or_else(|_| "my-dev-secret-key".to_string())
            .into_bytes();
        let token_issuer: Arc<dyn TokenIssuer> = Arc::new(JwtHs256Issuer::new(TokenConfig {
            ttl: Duration::from_secs(settings.auth.token_ttl_secs),
            signing_key: key,
        }));

        let account_service: Arc<dyn AccountService> = match settings.account.backend.as_str() {
            "fake" => Arc::new(FakeAccountService::new()),
            "real" => Arc::new(RealAccountService::new(
                credential_repo,
                credential_hasher,
                token_issuer,
            )),
            other => return Err(anyhow::anyhow!("Unknown account backend: {}", other)),
        };

        info!("server started");

        Ok(Self {
            account_service,
            pool,
        })
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        self.pool.close().await;
    }
}
