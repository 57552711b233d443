//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Password hashing, credential checks, token issuance
//! - **Error Mapping**: Turning missing rows and constraint violations into `AppError`s
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod difficulty;
pub mod region;
pub mod token;
pub mod walk;
