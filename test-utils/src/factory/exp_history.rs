//! EXP history factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating history entries.
///
/// Inserting history directly does not touch the user's balance; use the engine when a
/// test needs both to agree.
///
/// # Example
///
/// ```rust,ignore
/// let entry = ExpHistoryFactory::new(&db, user.id)
///     .activity_type("forum_comment")
///     .points(5)
///     .created_at(yesterday)
///     .build()
///     .await?;
/// ```
pub struct ExpHistoryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    activity_type: String,
    points: i64,
    description: String,
    created_at: DateTime<Utc>,
}

impl<'a> ExpHistoryFactory<'a> {
    /// Creates a new factory.
    ///
    /// Defaults:
    /// - activity_type: `"upload_article"`
    /// - points: `20`
    /// - description: `"Published a new article"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            activity_type: "upload_article".to_string(),
            points: 20,
            description: "Published a new article".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn activity_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = activity_type.into();
        self
    }

    pub fn points(mut self, points: i64) -> Self {
        self.points = points;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::exp_history::Model, DbErr> {
        entity::exp_history::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            activity_type: ActiveValue::Set(self.activity_type),
            points: ActiveValue::Set(self.points),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a history entry for an activity at a given time.
pub async fn create_exp_history(
    db: &DatabaseConnection,
    user_id: i32,
    activity_type: &str,
    points: i64,
    created_at: DateTime<Utc>,
) -> Result<entity::exp_history::Model, DbErr> {
    ExpHistoryFactory::new(db, user_id)
        .activity_type(activity_type)
        .points(points)
        .created_at(created_at)
        .build()
        .await
}
