use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Both cases share one message so callers cannot probe which emails exist.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that already belongs to a user.
    ///
    /// Raised both by the existence pre-check and by the unique index on the
    /// normalized email. Results in a 400 Bad Request response.
    #[error("User with this email already exists")]
    EmailTaken,

    /// Protected endpoint called without an `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature, issuer, audience or expiry checks.
    ///
    /// Results in a 401 Unauthorized response; the underlying reason is only logged.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `EmailTaken` → 400 Bad Request with "User with this email already exists"
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
///
/// Token failures are logged at debug level while the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::EmailTaken => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            Self::InvalidToken(err) => {
                tracing::debug!(error = %err, "Rejected bearer token");
                (StatusCode::UNAUTHORIZED, "Invalid or expired token".to_string())
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
