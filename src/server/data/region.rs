//! Region data repository for database operations.
//!
//! Plain CRUD over the `regions` table. Deleting a region cascades to its walks
//! through the foreign key declared in the migration.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::region::{CreateRegionParam, Region, UpdateRegionParam};

/// Repository providing database operations for regions.
pub struct RegionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionRepository<'a> {
    /// Creates a new RegionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RegionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all regions ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Region>)` - Every region, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Region>, DbErr> {
        let regions = entity::prelude::Region::find()
            .order_by_asc(entity::region::Column::Name)
            .all(self.db)
            .await?;

        Ok(regions.into_iter().map(Region::from_entity).collect())
    }

    /// Gets a region by id.
    ///
    /// # Arguments
    /// - `id` - Region id
    ///
    /// # Returns
    /// - `Ok(Some(Region))` - Region found
    /// - `Ok(None)` - No region with this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>, DbErr> {
        let region = entity::prelude::Region::find_by_id(id).one(self.db).await?;

        Ok(region.map(Region::from_entity))
    }

    /// Creates a region with a freshly generated id.
    ///
    /// # Arguments
    /// - `param` - Code, name and optional image URL
    ///
    /// # Returns
    /// - `Ok(Region)` - The created region
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateRegionParam) -> Result<Region, DbErr> {
        let region = entity::region::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            code: ActiveValue::Set(param.code),
            name: ActiveValue::Set(param.name),
            region_image_url: ActiveValue::Set(param.region_image_url),
        }
        .insert(self.db)
        .await?;

        Ok(Region::from_entity(region))
    }

    /// Overwrites code, name and image URL of an existing region.
    ///
    /// # Arguments
    /// - `param` - Region id and the new field values
    ///
    /// # Returns
    /// - `Ok(Some(Region))` - The updated region
    /// - `Ok(None)` - No region with this id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateRegionParam) -> Result<Option<Region>, DbErr> {
        let Some(existing) = entity::prelude::Region::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut region: entity::region::ActiveModel = existing.into();
        region.code = ActiveValue::Set(param.code);
        region.name = ActiveValue::Set(param.name);
        region.region_image_url = ActiveValue::Set(param.region_image_url);

        let updated = region.update(self.db).await?;

        Ok(Some(Region::from_entity(updated)))
    }

    /// Deletes a region and returns it as it was before deletion.
    ///
    /// Walks in the region are removed by the cascading foreign key.
    ///
    /// # Arguments
    /// - `id` - Region id
    ///
    /// # Returns
    /// - `Ok(Some(Region))` - The deleted region
    /// - `Ok(None)` - No region with this id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<Option<Region>, DbErr> {
        let Some(existing) = entity::prelude::Region::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Region::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(Region::from_entity(existing)))
    }
}
