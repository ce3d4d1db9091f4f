use crate::application_port::{AccessToken, AccountError, TokenIssuer};
use crate::domain_model::UserId;
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub ttl: Duration,
    pub signing_key: Vec<u8>,
}

/// Claims carried by an access token. `sub` is the user id in decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

pub struct JwtHs256Issuer {
    cfg: TokenConfig,
}

impl JwtHs256Issuer {
    pub fn new(cfg: TokenConfig) -> Self {
        JwtHs256Issuer { cfg }
    }
}

#[async_trait::async_trait]
impl TokenIssuer for JwtHs256Issuer {
    async fn issue(&self, user: UserId) -> Result<(AccessToken, DateTime<Utc>), AccountError> {
        let iat_dt = Utc::now();
        let exp_dt = iat_dt + self.cfg.ttl;
        let claims = AccessClaims {
            sub: user.to_string(),
            exp: exp_dt.timestamp(),
            iat: iat_dt.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.cfg.signing_key),
        )
        .map_err(|e| AccountError::Signing(e.to_string()))?;

        Ok((AccessToken(token), exp_dt))
    }
}

/// Decode-side counterpart for whatever party verifies tokens with the
/// shared secret. Signature and expiration are both checked.
pub fn decode_access_token(token: &str, signing_key: &[u8]) -> Result<AccessClaims, AccountError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<AccessClaims>(token, &DecodingKey::from_secret(signing_key), &validation)
        .map_err(|e| AccountError::Signing(e.to_string()))?;
    Ok(data.claims)
}
