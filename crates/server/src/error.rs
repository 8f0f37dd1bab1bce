//! Unified error handling at the request boundary.
//!
//! Provides a unified `AppError` type that logs failures before responding
//! to the client. All route handlers should return `Result<T, AppError>`.
//! No failure is fatal to the process; every I/O failure surfaces to the
//! caller as a JSON error body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::AuthError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Record store operation failed.
    #[error("store error: {0}")]
    Repository(#[from] RepositoryError),

    /// Credential verification failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::CredentialRead(_) | AuthError::CredentialParse(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request error");
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Repository(err) => match err {
                RepositoryError::Unavailable(_) => "failed to open the record store",
                RepositoryError::Query(_) => "database error",
                RepositoryError::Write(_) => "failed to write to the record store",
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "invalid username or password",
                AuthError::CredentialRead(_) | AuthError::CredentialParse(_) => {
                    "failed to read the user list"
                }
            },
        };

        (
            status,
            Json(ErrorBody {
                error: message.to_owned(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_store_errors_are_internal() {
        let err = AppError::Repository(RepositoryError::Unavailable(sqlx::Error::PoolClosed));
        assert_eq!(get_status(err), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::Repository(RepositoryError::Query(sqlx::Error::PoolClosed));
        assert_eq!(get_status(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_credentials_are_unauthorized() {
        let err = AppError::Auth(AuthError::InvalidCredentials);
        assert_eq!(get_status(err), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_unreadable_user_list_is_internal() {
        let err = AppError::Auth(AuthError::CredentialRead(std::io::Error::other("gone")));
        assert_eq!(get_status(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
