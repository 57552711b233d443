//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships, so a walk
//! created without an explicit region or difficulty gets fresh ones of its own.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let region = factory::create_region(&db).await?;
//!
//!     // Create with all dependencies
//!     let (region, difficulty, walk) = factory::helpers::create_walk_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let walk = factory::walk::WalkFactory::new(&db)
//!     .region_id(region.id)
//!     .name("Triund Trek")
//!     .length_in_km(9.0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `difficulty` - Create difficulty entities
//! - `region` - Create region entities
//! - `walk` - Create walk entities, with region and difficulty when not provided
//! - `user` - Create user entities with a real bcrypt hash
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod difficulty;
pub mod helpers;
pub mod region;
pub mod user;
pub mod walk;

// Re-export commonly used factory functions for concise usage
pub use difficulty::create_difficulty;
pub use region::create_region;
pub use user::create_user;
pub use walk::create_walk;
