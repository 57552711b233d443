//! User domain models and parameters.
//!
//! Users authenticate with email and password. The password hash never leaves the
//! service layer and is not part of any DTO.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Display name.
    pub username: String,
    /// Email exactly as submitted at registration.
    pub email: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
    /// Time of the most recent successful login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
            last_login_at: entity.last_login_at,
        }
    }
}

/// Parameters for inserting a user whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Lower-cases an email for case-insensitive comparison and storage.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
