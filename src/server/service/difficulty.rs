use sea_orm::DatabaseConnection;

use crate::server::{
    data::difficulty::DifficultyRepository, error::AppError, model::difficulty::Difficulty,
};

pub struct DifficultyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DifficultyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Difficulty>, AppError> {
        Ok(DifficultyRepository::new(self.db).get_all().await?)
    }
}
