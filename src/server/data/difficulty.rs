use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::difficulty::Difficulty;

pub struct DifficultyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DifficultyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every difficulty ordered by id, which for the seeded rows is Easy, Medium, Hard
    pub async fn get_all(&self) -> Result<Vec<Difficulty>, DbErr> {
        let difficulties = entity::prelude::Difficulty::find()
            .order_by_asc(entity::difficulty::Column::Id)
            .all(self.db)
            .await?;

        Ok(difficulties
            .into_iter()
            .map(Difficulty::from_entity)
            .collect())
    }
}
