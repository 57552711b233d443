//! Difficulty domain model.

use uuid::Uuid;

use crate::model::difficulty::DifficultyDto;

/// One of the fixed difficulty grades a walk can have.
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub id: Uuid,
    pub name: String,
}

impl Difficulty {
    pub fn into_dto(self) -> DifficultyDto {
        DifficultyDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::difficulty::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
