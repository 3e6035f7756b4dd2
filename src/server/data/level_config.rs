//! Level configuration data repository.
//!
//! This module provides the `LevelConfigRepository` for the admin-managed level table.
//! Rows are converted to `LevelConfig` domain models at this boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::level::{
    CreateLevelConfigParam, Level, LevelConfig, UpdateLevelConfigParam,
};

/// Repository providing database operations for level configurations.
pub struct LevelConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelConfigRepository<'a> {
    /// Creates a new LevelConfigRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LevelConfigRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every level configuration ordered by level number.
    ///
    /// # Returns
    /// - `Ok(Vec<LevelConfig>)` - All configured levels, lowest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<LevelConfig>, DbErr> {
        let entities = entity::prelude::LevelConfig::find()
            .order_by_asc(entity::level_config::Column::Level)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LevelConfig::from_entity).collect())
    }

    /// Gets a level configuration by ID.
    ///
    /// # Returns
    /// - `Ok(Some(LevelConfig))` - Configuration found
    /// - `Ok(None)` - No configuration with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<LevelConfig>, DbErr> {
        let entity = entity::prelude::LevelConfig::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(LevelConfig::from_entity))
    }

    /// Checks whether a level number is already configured.
    ///
    /// # Arguments
    /// - `level` - Level number to look for
    /// - `exclude_id` - Configuration ID to ignore, used when updating a row in place
    ///
    /// # Returns
    /// - `Ok(true)` - Another row already uses this level number
    /// - `Ok(false)` - Level number is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists_by_level(
        &self,
        level: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::LevelConfig::find()
            .filter(entity::level_config::Column::Level.eq(level));

        if let Some(id) = exclude_id {
            query = query.filter(entity::level_config::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Creates a level configuration.
    ///
    /// # Returns
    /// - `Ok(LevelConfig)` - The created configuration
    /// - `Err(DbErr)` - Database error during insert, including a duplicate level number
    pub async fn create(&self, param: CreateLevelConfigParam) -> Result<LevelConfig, DbErr> {
        let now = Utc::now();
        let entity = entity::level_config::ActiveModel {
            level: ActiveValue::Set(param.level),
            min_exp: ActiveValue::Set(param.min_exp),
            badge_name: ActiveValue::Set(param.badge_name),
            badge_icon: ActiveValue::Set(param.badge_icon),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LevelConfig::from_entity(entity))
    }

    /// Updates every field of a level configuration.
    ///
    /// # Returns
    /// - `Ok(LevelConfig)` - The updated configuration
    /// - `Err(DbErr::RecordNotFound)` - No configuration with that ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, param: UpdateLevelConfigParam) -> Result<LevelConfig, DbErr> {
        let entity = entity::prelude::LevelConfig::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Level config with id {} not found", param.id))
            })?;

        let mut active_model: entity::level_config::ActiveModel = entity.into();
        active_model.level = ActiveValue::Set(param.level);
        active_model.min_exp = ActiveValue::Set(param.min_exp);
        active_model.badge_name = ActiveValue::Set(param.badge_name);
        active_model.badge_icon = ActiveValue::Set(param.badge_icon);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(LevelConfig::from_entity(entity))
    }

    /// Deletes a level configuration.
    ///
    /// # Returns
    /// - `Ok(true)` - Configuration deleted
    /// - `Ok(false)` - No configuration with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LevelConfig::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts configured levels.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::LevelConfig::find().count(self.db).await
    }

    /// Inserts a batch of levels in one statement.
    ///
    /// Does nothing when `levels` is empty.
    pub async fn insert_many(&self, levels: Vec<Level>) -> Result<(), DbErr> {
        if levels.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = levels
            .into_iter()
            .map(|level| entity::level_config::ActiveModel {
                level: ActiveValue::Set(level.level),
                min_exp: ActiveValue::Set(level.min_exp),
                badge_name: ActiveValue::Set(level.badge_name),
                badge_icon: ActiveValue::Set(level.badge_icon),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::LevelConfig::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
