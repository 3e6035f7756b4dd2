use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A level tier as shown to users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LevelDto {
    pub level: i32,
    pub min_exp: i64,
    pub badge_name: String,
    pub badge_icon: String,
}

/// A stored level configuration row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LevelConfigDto {
    pub id: i32,
    pub level: i32,
    pub min_exp: i64,
    pub badge_name: String,
    pub badge_icon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLevelConfigDto {
    pub level: i32,
    pub min_exp: i64,
    pub badge_name: String,
    pub badge_icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateLevelConfigDto {
    pub level: i32,
    pub min_exp: i64,
    pub badge_name: String,
    pub badge_icon: String,
}

/// A user's EXP balance with the level it resolves to.
///
/// `is_default` is set when no configured level matched and the built-in
/// level 1 badge is shown instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserLevelDto {
    pub current_exp: i64,
    pub level: i32,
    pub badge_name: String,
    pub badge_icon: String,
    pub is_default: bool,
    pub next_level: Option<LevelDto>,
    pub exp_to_next_level: Option<i64>,
}
