//! Region domain models and parameters.
//!
//! Provides the region domain model used by the service layer together with the
//! parameter types for create and update operations.

use uuid::Uuid;

use crate::model::region::{AddRegionDto, RegionDto, UpdateRegionDto};

/// Geographic region grouping walks.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Short region code such as `HP`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Optional absolute image URL.
    pub region_image_url: Option<String>,
}

impl Region {
    /// Converts the region domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `RegionDto` - The converted region DTO
    pub fn into_dto(self) -> RegionDto {
        RegionDto {
            id: self.id,
            code: self.code,
            name: self.name,
            region_image_url: self.region_image_url,
        }
    }

    /// Converts an entity model to a region domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Region` - The converted region domain model
    pub fn from_entity(entity: entity::region::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            region_image_url: entity.region_image_url,
        }
    }
}

/// Parameters for creating a new region; the id is assigned on insert.
#[derive(Debug, Clone)]
pub struct CreateRegionParam {
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}

impl CreateRegionParam {
    pub fn from_dto(dto: AddRegionDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            region_image_url: blank_to_none(dto.region_image_url),
        }
    }
}

/// Parameters for overwriting every mutable field of an existing region.
#[derive(Debug, Clone)]
pub struct UpdateRegionParam {
    /// Region to update; never changed.
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}

impl UpdateRegionParam {
    pub fn from_dto(id: Uuid, dto: UpdateRegionDto) -> Self {
        Self {
            id,
            code: dto.code,
            name: dto.name,
            region_image_url: blank_to_none(dto.region_image_url),
        }
    }
}

/// Stores a blank image URL as absent.
pub(crate) fn blank_to_none(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}
