//! `SeaORM` Entity definitions for the trails database.

pub mod prelude;

pub mod difficulty;
pub mod region;
pub mod user;
pub mod walk;
