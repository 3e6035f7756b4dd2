use crate::server::{
    error::{level::LevelTableError, AppError},
    model::level::{CreateLevelConfigParam, UpdateLevelConfigParam},
    service::level::LevelService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_id;
mod resolve;
mod seed_defaults;

fn create_param(level: i32, min_exp: i64) -> CreateLevelConfigParam {
    CreateLevelConfigParam {
        level,
        min_exp,
        badge_name: format!("Level {}", level),
        badge_icon: "⭐".to_string(),
    }
}

fn update_param(id: i32, level: i32, min_exp: i64) -> UpdateLevelConfigParam {
    UpdateLevelConfigParam {
        id,
        level,
        min_exp,
        badge_name: format!("Level {}", level),
        badge_icon: "⭐".to_string(),
    }
}
