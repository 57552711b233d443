use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{AuthResponseDto, LoginDto, RegisterDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::validation::ValidatedJson,
        model::user::User,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user and signs them in immediately by returning a token.
///
/// # Arguments
/// - `state` - Application state with database and token service
/// - `payload` - Username, email and password
///
/// # Returns
/// - `200 OK` - Token plus the stored username and email
/// - `400 Bad Request` - Validation failed or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Registered and signed in", body = AuthResponseDto),
        (status = 400, description = "Invalid data or email already registered", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, state.hash_cost)
        .register(payload.username, payload.email, payload.password)
        .await?;

    Ok((StatusCode::OK, Json(auth_response(&state, user)?)))
}

/// Sign in with email and password.
///
/// Email lookup ignores letter case. Unknown email and wrong password produce
/// the same 401 response.
///
/// # Returns
/// - `200 OK` - Token plus the stored username and email
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Invalid email or password
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = AuthResponseDto),
        (status = 400, description = "Malformed body", body = ValidationErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, state.hash_cost)
        .login(&payload.email, payload.password)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    tracing::info!(user_id = %user.id, "User signed in");

    Ok((StatusCode::OK, Json(auth_response(&state, user)?)))
}

fn auth_response(state: &AppState, user: User) -> Result<AuthResponseDto, AppError> {
    let token = state.tokens.generate(&user)?;

    Ok(AuthResponseDto {
        token,
        username: user.username,
        email: user.email,
    })
}
