use super::util::is_dup_key;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

pub struct MySqlCredentialRepo {
    pool: MySqlPool,
}

impl MySqlCredentialRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlCredentialRepo { pool }
    }

    fn row_to_record(row: MySqlRow) -> Result<UserRecord, AccountError> {
        let id: UserId = row
            .try_get("id")
            .map_err(|e| AccountError::Store(e.to_string()))?;
        let username: String = row
            .try_get("username")
            .map_err(|e| AccountError::Store(e.to_string()))?;
        let password_hash: String = row
            .try_get("password")
            .map_err(|e| AccountError::Store(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| AccountError::Store(e.to_string()))?;

        Ok(UserRecord {
            id,
            username,
            password_hash,
            created_at,
        })
    }
}

#[async_trait::async_trait]
impl CredentialRepo for MySqlCredentialRepo {
    async fn create(&self, username: &str, password_hash: &str) -> Result<UserId, AccountError> {
        let result = sqlx::query(
            r#"
INSERT INTO users (username, password)
VALUES (?, ?)
"#,
        )
        .bind(username)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_dup_key(&e) {
                AccountError::Conflict
            } else {
                AccountError::Store(e.to_string())
            }
        })?;

        Ok(UserId(result.last_insert_id() as i64))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, AccountError> {
        let row_opt: Option<MySqlRow> = sqlx::query(
            r#"
SELECT id, username, password, created_at
FROM users
WHERE username = ?
"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::Store(e.to_string()))?;

        row_opt.map(Self::row_to_record).transpose()
    }

    async fn delete_by_id(&self, id: UserId) -> Result<u64, AccountError> {
        let result = sqlx::query(
            r#"
DELETE FROM users
WHERE id = ?
"#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AccountError::Store(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
