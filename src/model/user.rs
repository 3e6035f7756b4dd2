use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntryDto {
    pub rank: u64,
    pub user_id: i32,
    pub name: String,
    pub exp: i64,
    pub level: i32,
    pub badge_name: String,
    pub badge_icon: String,
}
