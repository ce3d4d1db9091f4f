use crate::application_port::*;
use serde::Serialize;
use std::convert::Infallible;
use thiserror::Error;
use tracing::warn;
use warp::http::StatusCode;
use warp::{Rejection, reject};

#[derive(Debug, Clone, Error)]
pub enum ApiErrorCode {
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("registration failed: duplicate username")]
    DuplicateUsername,
    #[error("Internal error")]
    InternalError,
}

impl ApiErrorCode {
    /// Internal detail is logged here and never reaches the response body.
    pub fn internal<E: std::fmt::Display>(error: E) -> ApiErrorCode {
        warn!("Internal error: {}", error);
        ApiErrorCode::InternalError
    }
}

impl reject::Reject for ApiErrorCode {}

impl From<AccountError> for ApiErrorCode {
    fn from(error: AccountError) -> Self {
        match error {
            AccountError::NotFound => ApiErrorCode::UserNotFound,
            AccountError::Unauthorized => ApiErrorCode::InvalidPassword,
            AccountError::Conflict => ApiErrorCode::DuplicateUsername,
            AccountError::Store(e) => ApiErrorCode::internal(e),
            AccountError::Signing(e) => ApiErrorCode::internal(e),
            AccountError::Internal(e) => ApiErrorCode::internal(e),
        }
    }
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

pub async fn recover_error(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, json) = if let Some(code) = err.find::<ApiErrorCode>() {
        match code {
            ApiErrorCode::UserNotFound => (
                StatusCode::NOT_FOUND,
                warp::reply::json(&MessageBody {
                    message: code.to_string(),
                }),
            ),
            ApiErrorCode::InvalidPassword => (
                StatusCode::UNAUTHORIZED,
                warp::reply::json(&MessageBody {
                    message: code.to_string(),
                }),
            ),
            ApiErrorCode::DuplicateUsername | ApiErrorCode::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                warp::reply::json(&ErrorBody {
                    error: code.to_string(),
                }),
            ),
        }
    } else if err.find::<warp::filters::body::BodyDeserializeError>().is_some() {
        (
            StatusCode::BAD_REQUEST,
            warp::reply::json(&ErrorBody {
                error: "invalid request body".to_string(),
            }),
        )
    } else if err.is_not_found() {
        (
            StatusCode::NOT_FOUND,
            warp::reply::json(&ErrorBody {
                error: "not found".to_string(),
            }),
        )
    } else {
        warn!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            warp::reply::json(&ErrorBody {
                error: "internal error".to_string(),
            }),
        )
    };

    Ok(warp::reply::with_status(json, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_errors_map_to_documented_codes() {
        assert!(matches!(
            ApiErrorCode::from(AccountError::NotFound),
            ApiErrorCode::UserNotFound
        ));
        assert!(matches!(
            ApiErrorCode::from(AccountError::Unauthorized),
            ApiErrorCode::InvalidPassword
        ));
        assert!(matches!(
            ApiErrorCode::from(AccountError::Conflict),
            ApiErrorCode::DuplicateUsername
        ));
        assert!(matches!(
            ApiErrorCode::from(AccountError::Store("dropped connection".to_string())),
            ApiErrorCode::InternalError
        ));
        assert!(matches!(
            ApiErrorCode::from(AccountError::Signing("no key".to_string())),
            ApiErrorCode::InternalError
        ));
    }

    #[test]
    fn internal_code_hides_detail() {
        let code = ApiErrorCode::internal("driver said: table users is gone");
        assert_eq!(code.to_string(), "Internal error");
    }
}
