use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::model::rule::{absolute_url, not_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}

/// Body of `POST /api/regions`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddRegionDto {
    #[validate(
        custom(function = "not_blank", message = "Region code is required."),
        length(max = 10, message = "Region code must be at most 10 characters.")
    )]
    #[schema(example = "HP")]
    pub code: String,

    #[validate(
        custom(function = "not_blank", message = "Region name is required."),
        length(max = 100, message = "Region name must be at most 100 characters.")
    )]
    #[schema(example = "Himachal Pradesh")]
    pub name: String,

    #[validate(custom(function = "absolute_url", message = "RegionImageUrl must be a valid URL."))]
    pub region_image_url: Option<String>,
}

/// Body of `PUT /api/regions/{id}`; every mutable field is overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionDto {
    #[validate(
        custom(function = "not_blank", message = "Region code is required."),
        length(max = 10, message = "Region code must be at most 10 characters.")
    )]
    pub code: String,

    #[validate(
        custom(function = "not_blank", message = "Region name is required."),
        length(max = 100, message = "Region name must be at most 100 characters.")
    )]
    pub name: String,

    #[validate(custom(function = "absolute_url", message = "RegionImageUrl must be a valid URL."))]
    pub region_image_url: Option<String>,
}
