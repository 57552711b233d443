use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use chrono::Utc;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod exists_by_email;
mod find_by_email;
mod update_last_login;
