use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        region::{AddRegionDto, RegionDto, UpdateRegionDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthUser,
            validation::{ValidatedJson, ValidatedPath},
        },
        model::region::{CreateRegionParam, UpdateRegionParam},
        service::region::RegionService,
        state::AppState,
    },
};

/// Tag for grouping region endpoints in OpenAPI documentation
pub static REGION_TAG: &str = "region";

/// Get all regions.
///
/// Returns every region ordered by name. An empty store yields an empty list.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Returns
/// - `200 OK` - List of regions
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/regions",
    tag = REGION_TAG,
    responses(
        (status = 200, description = "List of regions", body = Vec<RegionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_regions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let regions = RegionService::new(&state.db).get_all().await?;

    let dtos: Vec<RegionDto> = regions.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a region by id.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Region id
///
/// # Returns
/// - `200 OK` - The region
/// - `404 Not Found` - No region with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/regions/{id}",
    tag = REGION_TAG,
    params(
        ("id" = Uuid, Path, description = "Region id")
    ),
    responses(
        (status = 200, description = "The region", body = RegionDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_region_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let region = RegionService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(region.into_dto())))
}

/// Create a new region.
///
/// The id is assigned by the server and returned in the body along with a
/// `Location` header pointing at the new resource.
///
/// # Access Control
/// - `Authenticated` - Requires a valid bearer token
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Region code, name and optional image URL
///
/// # Returns
/// - `201 Created` - The created region
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/regions",
    tag = REGION_TAG,
    request_body = AddRegionDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully created region", body = RegionDto),
        (status = 400, description = "Invalid region data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_region(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(payload): ValidatedJson<AddRegionDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(user = %user.claims.nameid, "Creating region");

    let region = RegionService::new(&state.db)
        .create(CreateRegionParam::from_dto(payload))
        .await?;

    let location = format!("/api/regions/{}", region.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(region.into_dto()),
    ))
}

/// Update a region.
///
/// Overwrites code, name and image URL. The id cannot change.
///
/// # Access Control
/// - `Authenticated` - Requires a valid bearer token
///
/// # Returns
/// - `200 OK` - The updated region
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No region with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/regions/{id}",
    tag = REGION_TAG,
    params(
        ("id" = Uuid, Path, description = "Region id")
    ),
    request_body = UpdateRegionDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully updated region", body = RegionDto),
        (status = 400, description = "Invalid region data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_region(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateRegionDto>,
) -> Result<impl IntoResponse, AppError> {
    let region = RegionService::new(&state.db)
        .update(UpdateRegionParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(region.into_dto())))
}

/// Delete a region.
///
/// Walks in the region are removed with it.
///
/// # Access Control
/// - `Authenticated` - Requires a valid bearer token
///
/// # Returns
/// - `200 OK` - The deleted region
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No region with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/regions/{id}",
    tag = REGION_TAG,
    params(
        ("id" = Uuid, Path, description = "Region id")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully deleted region", body = RegionDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_region(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let region = RegionService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(region.into_dto())))
}
