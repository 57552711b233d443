use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::rule::not_blank;

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    #[validate(
        custom(function = "not_blank", message = "Username is required."),
        length(max = 100, message = "Username must be at most 100 characters.")
    )]
    #[schema(example = "hiker")]
    pub username: String,

    #[validate(
        email(message = "Email must be a valid email address."),
        length(max = 100, message = "Email must be at most 100 characters.")
    )]
    #[schema(example = "hiker@example.com")]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[validate(custom(function = "not_blank", message = "Email is required."))]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "Password is required."))]
    pub password: String,
}

/// Returned by both register and login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub token: String,
    pub username: String,
    pub email: String,
}
