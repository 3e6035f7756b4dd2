use crate::server::{
    data::level_config::LevelConfigRepository,
    model::level::{default_levels, CreateLevelConfigParam, UpdateLevelConfigParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod exists_by_level;
mod get_all;
