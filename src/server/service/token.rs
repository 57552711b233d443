//! JWT issuance and verification.
//!
//! Tokens are HS256-signed and carry the user id, username and email. Every token
//! is valid for seven days from issuance and is bound to the configured issuer and
//! audience.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Lifetime of an issued token.
pub const TOKEN_LIFETIME_DAYS: i64 = 7;

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub nameid: String,
    /// Username.
    pub unique_name: String,
    pub email: String,
    /// Subject; the user's email.
    pub sub: String,
    /// Unique token id.
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

/// Signs and verifies tokens with one shared secret.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
}

impl TokenService {
    /// Creates a token service for the given secret, issuer and audience.
    pub fn new(secret: &[u8], issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        let issuer = issuer.into();
        let audience = audience.into();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&issuer]);
        validation.set_audience(&[&audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer,
            audience,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.jwt_key.as_bytes(),
            &config.jwt_issuer,
            &config.jwt_audience,
        )
    }

    /// Issues a token for the user, valid for seven days from now.
    pub fn generate(&self, user: &User) -> Result<String, AppError> {
        self.generate_at(user, Utc::now())
    }

    /// Issues a token as if it had been created at `issued_at`.
    pub fn generate_at(&self, user: &User, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            nameid: user.id.to_string(),
            unique_name: user.username.clone(),
            email: user.email.clone(),
            sub: user.email.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(TOKEN_LIFETIME_DAYS)).timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to sign token: {}", e)))
    }

    /// Checks signature, issuer, audience and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }
}
