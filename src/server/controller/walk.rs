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
        walk::{AddWalkDto, UpdateWalkDto, WalkDto, WalkQueryDto, WalkV1Dto, WalkV2Dto},
    },
    server::{
        error::AppError,
        middleware::validation::{ValidatedJson, ValidatedPath, ValidatedQuery},
        model::walk::{CreateWalkParam, UpdateWalkParam, Walk, WalkQuery},
        service::walk::WalkService,
        state::AppState,
    },
};

/// Tag for grouping walk endpoints in OpenAPI documentation
pub static WALK_TAG: &str = "walk";

/// Get walks with optional filtering, sorting and pagination.
///
/// Unknown `filterOn` or `sortBy` values are ignored. An empty page is
/// returned as an empty list.
///
/// # Returns
/// - `200 OK` - Page of walks with their region and difficulty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/walks",
    tag = WALK_TAG,
    params(WalkQueryDto),
    responses(
        (status = 200, description = "Page of walks", body = Vec<WalkDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_walks(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<WalkQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let walks = fetch_walks(&state, query).await?;

    let dtos: Vec<WalkDto> = walks.into_iter().map(|w| w.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get walks in the v1 shape, with the length as `lengthInKm`.
#[utoipa::path(
    get,
    path = "/api/v1/walks",
    tag = WALK_TAG,
    params(WalkQueryDto),
    responses(
        (status = 200, description = "Page of walks (v1)", body = Vec<WalkV1Dto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_walks_v1(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<WalkQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let walks = fetch_walks(&state, query).await?;

    let dtos: Vec<WalkV1Dto> = walks.into_iter().map(|w| w.into_v1_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get walks in the v2 shape, with the length as `length`.
#[utoipa::path(
    get,
    path = "/api/v2/walks",
    tag = WALK_TAG,
    params(WalkQueryDto),
    responses(
        (status = 200, description = "Page of walks (v2)", body = Vec<WalkV2Dto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_walks_v2(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<WalkQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let walks = fetch_walks(&state, query).await?;

    let dtos: Vec<WalkV2Dto> = walks.into_iter().map(|w| w.into_v2_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Catches `/api/{version}/walks` for versions other than v1 and v2.
pub async fn unsupported_walks_version(ValidatedPath(version): ValidatedPath<String>) -> AppError {
    tracing::debug!(%version, "Rejected unsupported API version");

    AppError::NotFound("Unsupported API version".to_string())
}

async fn fetch_walks(state: &AppState, query: WalkQueryDto) -> Result<Vec<Walk>, AppError> {
    WalkService::new(&state.db)
        .get_all(WalkQuery::from_dto(query))
        .await
}

/// Get a walk by id.
///
/// # Returns
/// - `200 OK` - The walk with its region and difficulty
/// - `404 Not Found` - No walk with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/walks/{id}",
    tag = WALK_TAG,
    params(
        ("id" = Uuid, Path, description = "Walk id")
    ),
    responses(
        (status = 200, description = "The walk", body = WalkDto),
        (status = 404, description = "Walk not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_walk_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let walk = WalkService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(walk.into_dto())))
}

/// Create a new walk.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Returns
/// - `201 Created` - The created walk
/// - `400 Bad Request` - Field validation failed or region/difficulty unknown
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/walks",
    tag = WALK_TAG,
    request_body = AddWalkDto,
    responses(
        (status = 201, description = "Successfully created walk", body = WalkDto),
        (status = 400, description = "Invalid walk data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_walk(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddWalkDto>,
) -> Result<impl IntoResponse, AppError> {
    let walk = WalkService::new(&state.db)
        .create(CreateWalkParam::from_dto(payload))
        .await?;

    let location = format!("/api/walks/{}", walk.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(walk.into_dto()),
    ))
}

/// Update a walk.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Returns
/// - `200 OK` - The updated walk
/// - `400 Bad Request` - Field validation failed or region/difficulty unknown
/// - `404 Not Found` - No walk with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/walks/{id}",
    tag = WALK_TAG,
    params(
        ("id" = Uuid, Path, description = "Walk id")
    ),
    request_body = UpdateWalkDto,
    responses(
        (status = 200, description = "Successfully updated walk", body = WalkDto),
        (status = 400, description = "Invalid walk data", body = ValidationErrorDto),
        (status = 404, description = "Walk not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_walk(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateWalkDto>,
) -> Result<impl IntoResponse, AppError> {
    let walk = WalkService::new(&state.db)
        .update(UpdateWalkParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(walk.into_dto())))
}

/// Delete a walk.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Returns
/// - `200 OK` - The deleted walk
/// - `404 Not Found` - No walk with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/walks/{id}",
    tag = WALK_TAG,
    params(
        ("id" = Uuid, Path, description = "Walk id")
    ),
    responses(
        (status = 200, description = "Successfully deleted walk", body = WalkDto),
        (status = 404, description = "Walk not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_walk(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let walk = WalkService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(walk.into_dto())))
}
