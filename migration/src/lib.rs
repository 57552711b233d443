pub use sea_orm_migration::prelude::*;

mod m20251011_000001_create_difficulty_table;
mod m20251011_000002_create_region_table;
mod m20251011_000003_create_walk_table;
mod m20251018_000004_create_user_table;

pub use m20251011_000001_create_difficulty_table::{EASY_ID, HARD_ID, MEDIUM_ID};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251011_000001_create_difficulty_table::Migration),
            Box::new(m20251011_000002_create_region_table::Migration),
            Box::new(m20251011_000003_create_walk_table::Migration),
            Box::new(m20251018_000004_create_user_table::Migration),
        ]
    }
}
