use std::sync::Arc;

use crate::server::{
    error::{gamification::GamificationError, AppError},
    model::gamification::{
        ActivityRule, ActivityRules, ActivityType, AwardOutcome, GamificationConfig,
    },
    service::gamification::GamificationService,
};
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod award_exp;
mod day_boundary;

/// Stored balance of a user.
async fn balance(db: &DatabaseConnection, user_id: i32) -> Result<i64, DbErr> {
    let user = entity::prelude::User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", user_id)))?;

    Ok(user.exp)
}

/// History entries of a user.
async fn history(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<entity::exp_history::Model>, DbErr> {
    entity::prelude::ExpHistory::find()
        .filter(entity::exp_history::Column::UserId.eq(user_id))
        .all(db)
        .await
}

/// Stored counter value, 0 when no row exists.
async fn counter(
    db: &DatabaseConnection,
    user_id: i32,
    activity: ActivityType,
    day: NaiveDate,
) -> Result<i32, DbErr> {
    let row = entity::prelude::UserActivity::find_by_id((
        user_id,
        activity.as_str().to_string(),
        day,
    ))
    .one(db)
    .await?;

    Ok(row.map(|r| r.count).unwrap_or(0))
}
