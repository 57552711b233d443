use crate::server::{
    data::region::RegionRepository,
    model::region::{CreateRegionParam, UpdateRegionParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
