//! Difficulty factory for creating test difficulty entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test difficulties with customizable fields.
///
/// Production data only ever holds the three seeded difficulties; tests that
/// run on entity-created tables use this factory instead.
pub struct DifficultyFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    name: String,
}

impl<'a> DifficultyFactory<'a> {
    /// Creates a new DifficultyFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - name: `"Difficulty {n}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: Uuid::new_v4(),
            name: format!("Difficulty {}", next_id()),
        }
    }

    /// Sets a fixed id, e.g. one of the seeded difficulty ids.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the difficulty name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the difficulty entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::difficulty::Model)` - Created difficulty entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::difficulty::Model, DbErr> {
        entity::difficulty::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a difficulty with default values.
///
/// Shorthand for `DifficultyFactory::new(db).build().await`.
pub async fn create_difficulty(
    db: &DatabaseConnection,
) -> Result<entity::difficulty::Model, DbErr> {
    DifficultyFactory::new(db).build().await
}
