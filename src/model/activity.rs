use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Activity report sent by another service after its own action succeeded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordActivityDto {
    pub user_id: i32,
    /// One of `chat_ai`, `upload_article`, `forum_comment`.
    pub activity_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityRuleDto {
    pub activity_type: String,
    pub description: String,
    pub points: i64,
    /// Maximum awards per day, absent when uncapped.
    pub daily_limit: Option<i32>,
}
