//! Region factory for creating test region entities.
//!
//! This module provides factory methods for creating region entities with
//! sensible defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test regions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::region::RegionFactory;
///
/// let region = RegionFactory::new(&db)
///     .code("HP")
///     .name("Himachal Pradesh")
///     .build()
///     .await?;
/// ```
pub struct RegionFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    region_image_url: Option<String>,
}

impl<'a> RegionFactory<'a> {
    /// Creates a new RegionFactory with default values.
    ///
    /// Defaults:
    /// - code: `"R{n}"` where n is auto-incremented
    /// - name: `"Region {n}"`
    /// - region_image_url: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RegionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("R{}", id),
            name: format!("Region {}", id),
            region_image_url: None,
        }
    }

    /// Sets the region code.
    ///
    /// # Arguments
    /// - `code` - Short region code, e.g. `"HP"`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the region name.
    ///
    /// # Arguments
    /// - `name` - Display name for the region
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the image URL.
    ///
    /// # Arguments
    /// - `url` - Optional absolute image URL
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn region_image_url(mut self, url: Option<String>) -> Self {
        self.region_image_url = url;
        self
    }

    /// Builds and inserts the region entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::region::Model)` - Created region entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::region::Model, DbErr> {
        entity::region::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            region_image_url: ActiveValue::Set(self.region_image_url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a region with default values.
///
/// Shorthand for `RegionFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::region::Model)` - Created region entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_region(db: &DatabaseConnection) -> Result<entity::region::Model, DbErr> {
    RegionFactory::new(db).build().await
}
