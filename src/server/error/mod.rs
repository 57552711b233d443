//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;

use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    model::api::{ErrorDto, UnexpectedErrorDto, ValidationErrorDto},
    server::error::{auth::AuthError, config::ConfigError},
};

/// Message returned with every 500 response; details only go to the log.
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "An unexpected error occurred. We are looking into this.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError`
/// handle their own response mapping, while generic variants provide standard HTTP
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in an opaque 500 response with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Socket bind or serve failure at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Password hashing failure.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// Request body failed field validation.
    ///
    /// Results in 400 Bad Request listing every failing field.
    ///
    /// # Fields
    /// - Field name (camelCase) mapped to its validation messages
    #[error("One or more validation errors occurred")]
    Validation(BTreeMap<String, Vec<String>>),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in an opaque 500 response. The provided message is only logged.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Maps a write failure caused by a missing region or difficulty to a 400.
    ///
    /// Any other database error is passed through unchanged.
    pub fn from_walk_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => Self::BadRequest(
                "Referenced region or difficulty does not exist".to_string(),
            ),
            _ => Self::DbErr(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::from_rejection("body", rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::from_rejection("query", rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::from_rejection("path", rejection.status(), rejection.body_text())
    }
}

impl AppError {
    /// Reports a client-side extractor rejection as a validation failure on `part`.
    ///
    /// Rejections axum classifies as server errors stay internal.
    fn from_rejection(part: &str, status: StatusCode, message: String) -> Self {
        if !status.is_client_error() {
            return Self::InternalError(message);
        }

        let mut fields = BTreeMap::new();
        fields.insert(part.to_string(), vec![message]);

        Self::Validation(fields)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `Validation` variants
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types, with a correlation id
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "One or more validation errors occurred".to_string(),
                    fields,
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Generates a correlation id, logs it together with the full error, and returns only the
/// id and a static message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();
        tracing::error!(%error_id, error = %self.0, "Unexpected error");

        unexpected_error_response(error_id)
    }
}

/// Builds the opaque 500 body shared by error conversion and panic recovery.
pub fn unexpected_error_response(error_id: Uuid) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(UnexpectedErrorDto {
            id: error_id,
            message: UNEXPECTED_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response()
}
