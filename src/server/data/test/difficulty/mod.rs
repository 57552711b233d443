use crate::server::data::difficulty::DifficultyRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get_all;
