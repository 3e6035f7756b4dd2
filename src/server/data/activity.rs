//! Daily activity counter repository.
//!
//! Each row counts how many awards a user received for one activity type on one
//! activity day. The composite primary key (user, activity type, day) is the conflict
//! target for the conditional upsert that enforces daily limits.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ConnectionTrait, DbErr, EntityTrait,
};

use crate::server::model::gamification::ActivityType;

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Increments the counter for a user, activity and day if it is still below the limit.
    ///
    /// Issues a single `INSERT ... ON CONFLICT DO UPDATE ... WHERE count < limit`. A
    /// missing row is created with a count of 1; an existing row is only incremented while
    /// below `limit`. Because the check and the increment are one statement, concurrent
    /// callers for the same key can never both pass the check.
    ///
    /// # Arguments
    /// - `user_id` - User receiving the award
    /// - `activity` - Activity being awarded
    /// - `day` - Activity day the award counts towards
    /// - `limit` - Maximum count for the day, `None` when uncapped
    /// - `now` - Timestamp written to `created_at`/`updated_at`
    ///
    /// # Returns
    /// - `Ok(true)` - Counter created or incremented
    /// - `Ok(false)` - Counter already at the limit; nothing written
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn try_increment(
        &self,
        user_id: i32,
        activity: ActivityType,
        day: NaiveDate,
        limit: Option<i32>,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let current_count = Expr::col((
            entity::prelude::UserActivity,
            entity::user_activity::Column::Count,
        ));

        let mut on_conflict = OnConflict::columns([
            entity::user_activity::Column::UserId,
            entity::user_activity::Column::ActivityType,
            entity::user_activity::Column::ActivityDate,
        ]);
        on_conflict
            .value(
                entity::user_activity::Column::Count,
                current_count.clone().add(1),
            )
            .value(entity::user_activity::Column::UpdatedAt, Expr::val(now));

        if let Some(limit) = limit {
            on_conflict.action_and_where(current_count.lt(limit));
        }

        let rows_affected = entity::prelude::UserActivity::insert(
            entity::user_activity::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                activity_type: ActiveValue::Set(activity.as_str().to_string()),
                activity_date: ActiveValue::Set(day),
                count: ActiveValue::Set(1),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            },
        )
        .on_conflict(on_conflict)
        .exec_without_returning(self.db)
        .await?;

        Ok(rows_affected > 0)
    }

    /// Gets the number of awards a user received for an activity on a day.
    ///
    /// # Returns
    /// - `Ok(count)` - Current counter value, 0 when no award was made that day
    /// - `Err(DbErr)` - Database error during query
    #[cfg(test)]
    pub async fn get_count(
        &self,
        user_id: i32,
        activity: ActivityType,
        day: NaiveDate,
    ) -> Result<i32, DbErr> {
        let entity = entity::prelude::UserActivity::find_by_id((
            user_id,
            activity.as_str().to_string(),
            day,
        ))
        .one(self.db)
        .await?;

        Ok(entity.map(|row| row.count).unwrap_or(0))
    }
}
