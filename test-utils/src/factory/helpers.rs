//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique suffix generation and convenience methods for creating
//! entities with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// suffix so names and emails never collide within a test.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a walk together with the region and difficulty it references.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((region, difficulty, walk))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_walk_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::region::Model,
        entity::difficulty::Model,
        entity::walk::Model,
    ),
    DbErr,
> {
    let region = super::region::create_region(db).await?;
    let difficulty = super::difficulty::create_difficulty(db).await?;
    let walk = super::walk::WalkFactory::new(db)
        .region_id(region.id)
        .difficulty_id(difficulty.id)
        .build()
        .await?;

    Ok((region, difficulty, walk))
}
