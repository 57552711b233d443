use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Generic error body for client errors (400, 401, 404).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error body for a request that failed field validation.
///
/// `fields` maps each camelCase field name to every message it failed with.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub fields: BTreeMap<String, Vec<String>>,
}

/// Opaque body returned for every unexpected server failure.
///
/// The `id` is the correlation id written to the server log alongside the full error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UnexpectedErrorDto {
    pub id: Uuid,
    pub message: String,
}

/// Body of the health endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
