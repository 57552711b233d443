//! Walk domain models, parameters and listing query.
//!
//! Besides the walk model itself this module turns the raw listing query string
//! into a typed [`WalkQuery`]: filter and sort selectors are matched
//! case-insensitively, unknown selectors are dropped, and pagination values are
//! clamped into their valid range.

use uuid::Uuid;

use crate::{
    model::walk::{AddWalkDto, UpdateWalkDto, WalkDto, WalkQueryDto, WalkV1Dto, WalkV2Dto},
    server::model::{difficulty::Difficulty, region::blank_to_none, region::Region},
};

/// Page size used when the client does not ask for one, and the largest allowed.
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Highest page number whose row offset still fits a signed 64-bit SQL offset.
pub const MAX_PAGE_NUMBER: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// Walk together with the region and difficulty it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub region: Region,
    pub difficulty: Difficulty,
}

impl Walk {
    /// Converts a walk entity and its joined relations to the domain model.
    ///
    /// # Arguments
    /// - `walk` - Walk row
    /// - `region` - Region row referenced by `walk.region_id`
    /// - `difficulty` - Difficulty row referenced by `walk.difficulty_id`
    ///
    /// # Returns
    /// - `Walk` - The converted walk domain model
    pub fn from_entity(
        walk: entity::walk::Model,
        region: entity::region::Model,
        difficulty: entity::difficulty::Model,
    ) -> Self {
        Self {
            id: walk.id,
            name: walk.name,
            description: walk.description,
            length_in_km: walk.length_in_km,
            walk_image_url: walk.walk_image_url,
            region: Region::from_entity(region),
            difficulty: Difficulty::from_entity(difficulty),
        }
    }

    /// Full representation with nested region and difficulty.
    pub fn into_dto(self) -> WalkDto {
        WalkDto {
            id: self.id,
            name: self.name,
            description: self.description,
            length_in_km: self.length_in_km,
            walk_image_url: self.walk_image_url,
            region: self.region.into_dto(),
            difficulty: self.difficulty.into_dto(),
        }
    }

    /// Version 1 listing shape, exposing `lengthInKm`.
    pub fn into_v1_dto(self) -> WalkV1Dto {
        WalkV1Dto {
            id: self.id,
            name: self.name,
            description: self.description,
            length_in_km: self.length_in_km,
        }
    }

    /// Version 2 listing shape, exposing `length`.
    pub fn into_v2_dto(self) -> WalkV2Dto {
        WalkV2Dto {
            id: self.id,
            name: self.name,
            description: self.description,
            length: self.length_in_km,
        }
    }
}

/// Parameters for creating a new walk; the id is assigned on insert.
#[derive(Debug, Clone)]
pub struct CreateWalkParam {
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub region_id: Uuid,
    pub difficulty_id: Uuid,
}

impl CreateWalkParam {
    pub fn from_dto(dto: AddWalkDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            length_in_km: dto.length_in_km,
            walk_image_url: blank_to_none(dto.walk_image_url),
            region_id: dto.region_id,
            difficulty_id: dto.difficulty_id,
        }
    }
}

/// Parameters for overwriting every mutable field of an existing walk.
#[derive(Debug, Clone)]
pub struct UpdateWalkParam {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub region_id: Uuid,
    pub difficulty_id: Uuid,
}

impl UpdateWalkParam {
    pub fn from_dto(id: Uuid, dto: UpdateWalkDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            length_in_km: dto.length_in_km,
            walk_image_url: blank_to_none(dto.walk_image_url),
            region_id: dto.region_id,
            difficulty_id: dto.difficulty_id,
        }
    }
}

/// Column a walk listing can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Name,
    Description,
}

impl FilterField {
    /// Matches `Name` / `Description` in any letter case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("name") {
            Some(Self::Name)
        } else if value.eq_ignore_ascii_case("description") {
            Some(Self::Description)
        } else {
            None
        }
    }
}

/// Column a walk listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Length,
}

impl SortField {
    /// Matches `Name` / `Length` in any letter case.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("name") {
            Some(Self::Name)
        } else if value.eq_ignore_ascii_case("length") {
            Some(Self::Length)
        } else {
            None
        }
    }
}

/// Substring filter on one column; letter case is ignored for ASCII letters only,
/// matching SQLite's `LOWER()`.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkFilter {
    pub field: FilterField,
    /// Search text with ASCII letters lower-cased.
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkSort {
    pub field: SortField,
    pub ascending: bool,
}

/// Typed walk listing query.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkQuery {
    pub filter: Option<WalkFilter>,
    pub sort: Option<WalkSort>,
    /// 1-based page number.
    pub page_number: u64,
    /// Rows per page, within `1..=MAX_PAGE_SIZE`.
    pub page_size: u64,
}

impl Default for WalkQuery {
    fn default() -> Self {
        Self {
            filter: None,
            sort: None,
            page_number: 1,
            page_size: MAX_PAGE_SIZE,
        }
    }
}

impl WalkQuery {
    /// Builds a typed query from raw query string values.
    ///
    /// A filter needs both a known `filter_on` and a non-blank `filter_query`;
    /// otherwise filtering is disabled. An unknown `sort_by` disables sorting.
    pub fn from_dto(dto: WalkQueryDto) -> Self {
        let filter = match (
            dto.filter_on.as_deref().and_then(FilterField::parse),
            dto.filter_query,
        ) {
            (Some(field), Some(query)) if !query.trim().is_empty() => Some(WalkFilter {
                field,
                query: query.to_ascii_lowercase(),
            }),
            _ => None,
        };

        let sort = dto
            .sort_by
            .as_deref()
            .and_then(SortField::parse)
            .map(|field| WalkSort {
                field,
                ascending: dto.is_ascending.unwrap_or(true),
            });

        Self {
            filter,
            sort,
            page_number: dto.page_number.unwrap_or(1).clamp(1, MAX_PAGE_NUMBER),
            page_size: dto.page_size.unwrap_or(MAX_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }
}
