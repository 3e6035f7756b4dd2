//! Daily activity counter factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating daily activity counters.
///
/// Use this to put a user at or near a daily limit before exercising the engine.
pub struct UserActivityFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    activity_type: String,
    activity_date: NaiveDate,
    count: i32,
}

impl<'a> UserActivityFactory<'a> {
    /// Creates a new factory with a count of 1.
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: i32,
        activity_type: impl Into<String>,
        activity_date: NaiveDate,
    ) -> Self {
        Self {
            db,
            user_id,
            activity_type: activity_type.into(),
            activity_date,
            count: 1,
        }
    }

    pub fn count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    pub async fn build(self) -> Result<entity::user_activity::Model, DbErr> {
        let now = Utc::now();
        entity::user_activity::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            activity_type: ActiveValue::Set(self.activity_type),
            activity_date: ActiveValue::Set(self.activity_date),
            count: ActiveValue::Set(self.count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a counter with the given count.
pub async fn create_user_activity(
    db: &DatabaseConnection,
    user_id: i32,
    activity_type: &str,
    activity_date: NaiveDate,
    count: i32,
) -> Result<entity::user_activity::Model, DbErr> {
    UserActivityFactory::new(db, user_id, activity_type, activity_date)
        .count(count)
        .build()
        .await
}
