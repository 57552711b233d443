use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, difficulty::DifficultyDto},
    server::{error::AppError, service::difficulty::DifficultyService, state::AppState},
};

pub static DIFFICULTY_TAG: &str = "difficulty";

/// Get the fixed list of difficulties.
#[utoipa::path(
    get,
    path = "/api/difficulties",
    tag = DIFFICULTY_TAG,
    responses(
        (status = 200, description = "All difficulties", body = Vec<DifficultyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_difficulties(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let difficulties = DifficultyService::new(&state.db).get_all().await?;

    let dtos: Vec<DifficultyDto> = difficulties.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
