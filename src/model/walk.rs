use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::model::{difficulty::DifficultyDto, region::RegionDto, rule::not_blank};

/// Full walk representation including its region and difficulty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub region: RegionDto,
    pub difficulty: DifficultyDto,
}

/// Walk summary returned by `GET /api/v1/walks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkV1Dto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
}

/// Walk summary returned by `GET /api/v2/walks`; the length field is renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WalkV2Dto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub length: f64,
}

/// Body of `POST /api/walks`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkDto {
    #[validate(
        custom(function = "not_blank", message = "Name is required."),
        length(max = 100, message = "Name must be at most 100 characters.")
    )]
    #[schema(example = "Triund Trek")]
    pub name: String,

    #[validate(
        custom(function = "not_blank", message = "Description is required."),
        length(max = 1000, message = "Description must be at most 1000 characters.")
    )]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "LengthInKm must be greater than zero."))]
    #[schema(example = 9.0)]
    pub length_in_km: f64,

    pub walk_image_url: Option<String>,
    pub difficulty_id: Uuid,
    pub region_id: Uuid,
}

/// Body of `PUT /api/walks/{id}`; every mutable field is overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkDto {
    #[validate(
        custom(function = "not_blank", message = "Name is required."),
        length(max = 100, message = "Name must be at most 100 characters.")
    )]
    pub name: String,

    #[validate(
        custom(function = "not_blank", message = "Description is required."),
        length(max = 1000, message = "Description must be at most 1000 characters.")
    )]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "LengthInKm must be greater than zero."))]
    pub length_in_km: f64,

    pub walk_image_url: Option<String>,
    pub difficulty_id: Uuid,
    pub region_id: Uuid,
}

/// Query string accepted by every walk listing endpoint.
///
/// Unknown `filterOn` / `sortBy` values are ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct WalkQueryDto {
    /// Field to filter on: `Name` or `Description` (case-insensitive)
    pub filter_on: Option<String>,
    /// Substring to look for; ASCII letters match case-insensitively
    pub filter_query: Option<String>,
    /// Field to sort by: `Name` or `Length` (case-insensitive)
    pub sort_by: Option<String>,
    /// Sort direction (default: true)
    pub is_ascending: Option<bool>,
    /// 1-based page number (default: 1)
    pub page_number: Option<u64>,
    /// Items per page, at most 1000 (default: 1000)
    pub page_size: Option<u64>,
}
