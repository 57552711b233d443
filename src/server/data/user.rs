//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Email lookups go through the lower-cased `normalized_email` column, which carries a
//! unique index.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::user::{normalize_email, CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user with a fresh id and the current time as creation time.
    ///
    /// # Arguments
    /// - `param` - Username, email as submitted, and the password hash
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert; a unique constraint violation
    ///   means the normalized email is already registered
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            username: ActiveValue::Set(param.username),
            normalized_email: ActiveValue::Set(normalize_email(&param.email)),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            last_login_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    /// Finds a user by email, ignoring letter case.
    ///
    /// # Arguments
    /// - `email` - Email in any letter case
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with this email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::NormalizedEmail.eq(normalize_email(email)))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Checks whether any user is registered with this email, ignoring letter case.
    ///
    /// # Arguments
    /// - `email` - Email in any letter case
    ///
    /// # Returns
    /// - `Ok(true)` - Email is taken
    /// - `Ok(false)` - Email is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::NormalizedEmail.eq(normalize_email(email)))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records a successful login.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `at` - Login time
    ///
    /// # Returns
    /// - `Ok(User)` - The user with `last_login_at` updated
    /// - `Err(DbErr::RecordNotUpdated)` - No user with this id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            last_login_at: ActiveValue::Set(Some(at)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(user))
    }
}
