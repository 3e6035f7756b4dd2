//! Level configuration factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Factory for creating level configuration rows.
///
/// # Example
///
/// ```rust,ignore
/// let level = LevelConfigFactory::new(&db, 2, 100)
///     .badge_name("Explorer")
///     .build()
///     .await?;
/// ```
pub struct LevelConfigFactory<'a> {
    db: &'a DatabaseConnection,
    level: i32,
    min_exp: i64,
    badge_name: String,
    badge_icon: String,
}

impl<'a> LevelConfigFactory<'a> {
    /// Creates a new factory for the given level number and threshold.
    ///
    /// Defaults:
    /// - badge_name: `"Level {level}"`
    /// - badge_icon: `"⭐"`
    pub fn new(db: &'a DatabaseConnection, level: i32, min_exp: i64) -> Self {
        Self {
            db,
            level,
            min_exp,
            badge_name: format!("Level {}", level),
            badge_icon: "⭐".to_string(),
        }
    }

    pub fn badge_name(mut self, badge_name: impl Into<String>) -> Self {
        self.badge_name = badge_name.into();
        self
    }

    pub fn badge_icon(mut self, badge_icon: impl Into<String>) -> Self {
        self.badge_icon = badge_icon.into();
        self
    }

    /// Builds and inserts the level configuration.
    ///
    /// # Returns
    /// - `Ok(entity::level_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert, including a duplicate level number
    pub async fn build(self) -> Result<entity::level_config::Model, DbErr> {
        let now = Utc::now();
        entity::level_config::ActiveModel {
            level: ActiveValue::Set(self.level),
            min_exp: ActiveValue::Set(self.min_exp),
            badge_name: ActiveValue::Set(self.badge_name),
            badge_icon: ActiveValue::Set(self.badge_icon),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a level with a generated badge.
pub async fn create_level(
    db: &DatabaseConnection,
    level: i32,
    min_exp: i64,
) -> Result<entity::level_config::Model, DbErr> {
    LevelConfigFactory::new(db, level, min_exp).build().await
}

/// Inserts the standard eight-level table from `fixture::level_config::standard_table()`.
///
/// # Returns
/// - `Ok(Vec<entity::level_config::Model>)` - Inserted rows, lowest level first
/// - `Err(DbErr)` - Database error during insert
pub async fn create_default_levels(
    db: &DatabaseConnection,
) -> Result<Vec<entity::level_config::Model>, DbErr> {
    let mut created = Vec::new();
    for row in fixture::level_config::standard_table() {
        let model = LevelConfigFactory::new(db, row.level, row.min_exp)
            .badge_name(row.badge_name)
            .badge_icon(row.badge_icon)
            .build()
            .await?;
        created.push(model);
    }

    Ok(created)
}
