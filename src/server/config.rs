use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// HS256 keys shorter than this are rejected at startup.
const MIN_JWT_KEY_LEN: usize = 32;

pub struct Config {
    pub database_url: String,

    pub jwt_key: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,

    /// bcrypt cost for new password hashes.
    pub bcrypt_cost: u32,

    pub bind_address: String,
    /// Allowed browser origin; `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_key = required("JWT_KEY")?;
        if jwt_key.len() < MIN_JWT_KEY_LEN {
            return Err(ConfigError::InvalidValue {
                name: "JWT_KEY".to_string(),
                reason: format!("must be at least {} bytes", MIN_JWT_KEY_LEN),
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_key,
            jwt_issuer: required("JWT_ISSUER")?,
            jwt_audience: required("JWT_AUDIENCE")?,
            bcrypt_cost: bcrypt_cost()?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|o| !o.is_empty()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn bcrypt_cost() -> Result<u32, ConfigError> {
    let Ok(raw) = std::env::var("BCRYPT_COST") else {
        return Ok(bcrypt::DEFAULT_COST);
    };

    raw.parse::<u32>()
        .ok()
        .filter(|cost| (4..=31).contains(cost))
        .ok_or_else(|| ConfigError::InvalidValue {
            name: "BCRYPT_COST".to_string(),
            reason: format!("'{}' is not a number between 4 and 31", raw),
        })
}
