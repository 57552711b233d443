use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::region::RegionRepository,
    error::AppError,
    model::region::{CreateRegionParam, Region, UpdateRegionParam},
};

pub struct RegionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all regions
    pub async fn get_all(&self) -> Result<Vec<Region>, AppError> {
        let regions = RegionRepository::new(self.db).get_all().await?;

        tracing::debug!(count = regions.len(), "Fetched regions");

        Ok(regions)
    }

    /// Gets a region by id, failing with 404 when absent
    pub async fn get_by_id(&self, id: Uuid) -> Result<Region, AppError> {
        RegionRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No region found with given id!".to_string()))
    }

    /// Creates a new region
    pub async fn create(&self, param: CreateRegionParam) -> Result<Region, AppError> {
        let region = RegionRepository::new(self.db).create(param).await?;

        tracing::info!(region_id = %region.id, code = %region.code, "Created region");

        Ok(region)
    }

    /// Overwrites a region, failing with 404 when absent
    pub async fn update(&self, param: UpdateRegionParam) -> Result<Region, AppError> {
        let region = RegionRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No region found with given id to update!".to_string())
            })?;

        tracing::info!(region_id = %region.id, "Updated region");

        Ok(region)
    }

    /// Deletes a region and its walks, returning the deleted region
    pub async fn delete(&self, id: Uuid) -> Result<Region, AppError> {
        let region = RegionRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No region found with given id to delete!".to_string())
            })?;

        tracing::info!(region_id = %region.id, "Deleted region");

        Ok(region)
    }
}
