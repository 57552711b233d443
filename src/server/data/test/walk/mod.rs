use crate::server::{
    data::walk::WalkRepository,
    model::walk::{
        CreateWalkParam, FilterField, SortField, UpdateWalkParam, WalkFilter, WalkQuery, WalkSort,
    },
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
