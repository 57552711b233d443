//! Walk factory for creating test walk entities.
//!
//! Walks reference a region and a difficulty. When either is not provided,
//! the factory creates a default one before inserting the walk.

use crate::factory::{
    difficulty::create_difficulty, helpers::next_id, region::create_region,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test walks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::walk::WalkFactory;
///
/// let walk = WalkFactory::new(&db)
///     .region_id(region.id)
///     .difficulty_id(difficulty.id)
///     .name("Hampta Pass")
///     .length_in_km(26.0)
///     .build()
///     .await?;
/// ```
pub struct WalkFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    length_in_km: f64,
    walk_image_url: Option<String>,
    region_id: Option<Uuid>,
    difficulty_id: Option<Uuid>,
}

impl<'a> WalkFactory<'a> {
    /// Creates a new WalkFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Walk {n}"`
    /// - description: `"Description {n}"`
    /// - length_in_km: `5.0`
    /// - walk_image_url: `None`
    /// - region_id / difficulty_id: created on build when not set
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Walk {}", id),
            description: format!("Description {}", id),
            length_in_km: 5.0,
            walk_image_url: None,
            region_id: None,
            difficulty_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn length_in_km(mut self, length_in_km: f64) -> Self {
        self.length_in_km = length_in_km;
        self
    }

    pub fn walk_image_url(mut self, url: Option<String>) -> Self {
        self.walk_image_url = url;
        self
    }

    /// Sets the region the walk belongs to.
    pub fn region_id(mut self, region_id: Uuid) -> Self {
        self.region_id = Some(region_id);
        self
    }

    /// Sets the walk difficulty.
    pub fn difficulty_id(mut self, difficulty_id: Uuid) -> Self {
        self.difficulty_id = Some(difficulty_id);
        self
    }

    /// Builds and inserts the walk entity into the database.
    ///
    /// Creates a region and/or difficulty first if none were provided.
    ///
    /// # Returns
    /// - `Ok(entity::walk::Model)` - Created walk entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::walk::Model, DbErr> {
        let region_id = match self.region_id {
            Some(id) => id,
            None => create_region(self.db).await?.id,
        };
        let difficulty_id = match self.difficulty_id {
            Some(id) => id,
            None => create_difficulty(self.db).await?.id,
        };

        entity::walk::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            length_in_km: ActiveValue::Set(self.length_in_km),
            walk_image_url: ActiveValue::Set(self.walk_image_url),
            region_id: ActiveValue::Set(region_id),
            difficulty_id: ActiveValue::Set(difficulty_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a walk with default values, including a fresh region and difficulty.
///
/// Shorthand for `WalkFactory::new(db).build().await`.
pub async fn create_walk(db: &DatabaseConnection) -> Result<entity::walk::Model, DbErr> {
    WalkFactory::new(db).build().await
}
