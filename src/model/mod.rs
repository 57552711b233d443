//! Wire-format DTOs shared by every endpoint.
//!
//! These types define the JSON contract of the API. Request DTOs carry their
//! validation rules, response DTOs are built from server domain models.

pub mod api;
pub mod auth;
pub mod difficulty;
pub mod region;
pub mod rule;
pub mod walk;
