//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests of mapping and DTO
//! conversion. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let region = fixture::region::entity();
//!
//! let walk = fixture::walk::entity_builder()
//!     .region_id(region.id)
//!     .length_in_km(12.5)
//!     .build();
//! ```

pub mod difficulty;
pub mod region;
pub mod walk;

pub use difficulty::entity as difficulty_entity;
pub use region::{entity as region_entity, entity_builder as region_entity_builder};
pub use walk::{entity as walk_entity, entity_builder as walk_entity_builder};
