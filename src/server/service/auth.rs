//! Registration and login.
//!
//! Passwords are hashed with bcrypt on the blocking thread pool. Email uniqueness is
//! checked up front and enforced again by the unique index on the normalized email,
//! so concurrent registrations with the same address cannot both succeed.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    hash_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates an auth service hashing new passwords with the given bcrypt cost.
    pub fn new(db: &'a DatabaseConnection, hash_cost: u32) -> Self {
        Self { db, hash_cost }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `username` - Display name
    /// - `email` - Email as submitted; uniqueness ignores letter case
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::AuthErr(AuthError::EmailTaken))` - Email already registered
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<User, AppError> {
        if self.user_exists(&email).await? {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(password, self.hash_cost).await?;

        let user = UserRepository::new(self.db)
            .create(CreateUserParam {
                username,
                email,
                password_hash,
            })
            .await
            .map_err(map_unique_violation)?;

        tracing::info!(user_id = %user.id, "Registered user");

        Ok(user)
    }

    /// Checks credentials and records the login.
    ///
    /// # Arguments
    /// - `email` - Email in any letter case
    /// - `password` - Plaintext password
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Credentials valid; `last_login_at` updated
    /// - `Ok(None)` - Unknown email or wrong password
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn login(&self, email: &str, password: String) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            // Unknown emails cost one bcrypt hash, like a password check.
            hash_password(password, self.hash_cost).await?;
            return Ok(None);
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            tracing::debug!(user_id = %user.id, "Rejected login with wrong password");
            return Ok(None);
        }

        let user = user_repo.update_last_login(user.id, Utc::now()).await?;

        Ok(Some(user))
    }

    /// Returns whether an account exists for the email, ignoring letter case.
    pub async fn user_exists(&self, email: &str) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).exists_by_email(email).await?)
    }
}

fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::EmailTaken.into(),
        _ => err.into(),
    }
}

async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
        .map_err(AppError::from)
}

async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))?
        .map_err(AppError::from)
}
