use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::walk::WalkRepository,
    error::AppError,
    model::walk::{CreateWalkParam, UpdateWalkParam, Walk, WalkQuery},
};

pub struct WalkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one filtered, sorted page of walks; an empty page is not an error
    pub async fn get_all(&self, query: WalkQuery) -> Result<Vec<Walk>, AppError> {
        let walks = WalkRepository::new(self.db).get_all(query).await?;

        tracing::debug!(count = walks.len(), "Fetched walks");

        Ok(walks)
    }

    /// Gets a walk by id, failing with 404 when absent
    pub async fn get_by_id(&self, id: Uuid) -> Result<Walk, AppError> {
        WalkRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No walk found with given id!".to_string()))
    }

    /// Creates a walk; unknown region or difficulty ids fail with 400
    pub async fn create(&self, param: CreateWalkParam) -> Result<Walk, AppError> {
        let walk = WalkRepository::new(self.db)
            .create(param)
            .await
            .map_err(AppError::from_walk_write)?;

        tracing::info!(walk_id = %walk.id, region_id = %walk.region.id, "Created walk");

        Ok(walk)
    }

    /// Overwrites a walk, failing with 404 when absent and 400 on unknown references
    pub async fn update(&self, param: UpdateWalkParam) -> Result<Walk, AppError> {
        let walk = WalkRepository::new(self.db)
            .update(param)
            .await
            .map_err(AppError::from_walk_write)?
            .ok_or_else(|| {
                AppError::NotFound("No walk found with given id to update!".to_string())
            })?;

        tracing::info!(walk_id = %walk.id, "Updated walk");

        Ok(walk)
    }

    /// Deletes a walk, returning it as it was
    pub async fn delete(&self, id: Uuid) -> Result<Walk, AppError> {
        let walk = WalkRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("No walk found with given id to delete!".to_string())
            })?;

        tracing::info!(walk_id = %walk.id, "Deleted walk");

        Ok(walk)
    }
}
