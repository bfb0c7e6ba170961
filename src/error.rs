use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Error type produced by caller-supplied verify/issue operations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error response returned to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier
    pub error: &'static str,
    /// Human-readable error message
    pub message: &'static str,
}

/// Construction-time configuration problems.
///
/// These are surfaced by [`crate::strategy::RememberMeBuilder::build`],
/// before any cookie option merging happens.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("remember me cookie authentication strategy requires a verify function")]
    MissingVerifier,

    #[error("remember me cookie authentication strategy requires an issue function")]
    MissingIssuer,
}

/// Backend failures surfaced while authenticating a request.
///
/// A stale or missing cookie is not an error; both degrade to a pass
/// outcome. Only the verify and issue operations erroring out end up here,
/// carrying the caller's error value unchanged.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("token verification failed: {0}")]
    Verification(#[source] BoxError),

    #[error("token issuance failed: {0}")]
    Issuance(#[source] BoxError),

    #[error("no remembered user on this request")]
    NotRemembered,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AuthError::Verification(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "verification_error",
                "Token verification failed",
            ),
            AuthError::Issuance(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "issuance_error",
                "Token issuance failed",
            ),
            AuthError::NotRemembered => (
                StatusCode::UNAUTHORIZED,
                "not_remembered",
                "No remembered user on this request",
            ),
        };

        let error_response = ErrorResponse { error, message };

        (status, axum::Json(error_response)).into_response()
    }
}

/// Crate result alias. The error parameter is defaulted so the alias can
/// also spell seam results like `Result<String, BoxError>` when glob-imported
/// through the prelude.
pub type Result<T, E = AuthError> = std::result::Result<T, E>;
