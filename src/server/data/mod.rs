//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod difficulty;
pub mod region;
pub mod user;
pub mod walk;

#[cfg(test)]
mod test;
