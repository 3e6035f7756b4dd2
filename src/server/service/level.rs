//! Level configuration service.
//!
//! Admin CRUD over the level table. Every change is checked against the full candidate
//! table so the stored configuration always satisfies the level table invariants.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::level_config::LevelConfigRepository,
    error::AppError,
    model::level::{
        default_levels, CreateLevelConfigParam, Level, LevelConfig, LevelTable, LevelView,
        UpdateLevelConfigParam,
    },
};

pub struct LevelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LevelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every level configuration, lowest level first.
    pub async fn get_all(&self) -> Result<Vec<LevelConfig>, AppError> {
        Ok(LevelConfigRepository::new(self.db).get_all().await?)
    }

    /// Gets one level configuration.
    ///
    /// # Returns
    /// - `Ok(LevelConfig)` - Configuration found
    /// - `Err(AppError::NotFound)` - No configuration with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<LevelConfig, AppError> {
        LevelConfigRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Level config {} not found", id)))
    }

    /// Loads the whole level table for resolution.
    pub async fn get_table(&self) -> Result<LevelTable, AppError> {
        let configs = self.get_all().await?;

        Ok(LevelTable::from_configs(&configs))
    }

    /// Resolves an EXP balance against the current table.
    pub async fn resolve(&self, current_exp: i64) -> Result<LevelView, AppError> {
        Ok(self.get_table().await?.resolve(current_exp))
    }

    /// Creates a level configuration.
    ///
    /// # Arguments
    /// - `param` - Level number, threshold and badge
    ///
    /// # Returns
    /// - `Ok(LevelConfig)` - The created configuration
    /// - `Err(AppError::BadRequest)` - Level number already configured
    /// - `Err(AppError::LevelErr)` - The resulting table would violate an invariant
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateLevelConfigParam) -> Result<LevelConfig, AppError> {
        let repo = LevelConfigRepository::new(self.db);

        if repo.exists_by_level(param.level, None).await? {
            return Err(AppError::BadRequest(format!(
                "Level {} already exists",
                param.level
            )));
        }

        let mut candidate: Vec<Level> = repo
            .get_all()
            .await?
            .iter()
            .map(LevelConfig::to_level)
            .collect();
        candidate.push(param.to_level());
        LevelTable::new(candidate).validate()?;

        let created = repo.create(param).await?;
        tracing::info!(
            "Created level {} at {} EXP ({})",
            created.level,
            created.min_exp,
            created.badge_name
        );

        Ok(created)
    }

    /// Replaces a level configuration.
    ///
    /// # Returns
    /// - `Ok(LevelConfig)` - The updated configuration
    /// - `Err(AppError::NotFound)` - No configuration with that ID
    /// - `Err(AppError::BadRequest)` - New level number used by another configuration
    /// - `Err(AppError::LevelErr)` - The resulting table would violate an invariant
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdateLevelConfigParam) -> Result<LevelConfig, AppError> {
        let repo = LevelConfigRepository::new(self.db);
        let existing = repo.get_all().await?;

        if !existing.iter().any(|config| config.id == param.id) {
            return Err(AppError::NotFound(format!(
                "Level config {} not found",
                param.id
            )));
        }
        if repo.exists_by_level(param.level, Some(param.id)).await? {
            return Err(AppError::BadRequest(format!(
                "Level {} already exists",
                param.level
            )));
        }

        let candidate = existing
            .iter()
            .map(|config| {
                if config.id == param.id {
                    param.to_level()
                } else {
                    config.to_level()
                }
            })
            .collect();
        LevelTable::new(candidate).validate()?;

        let updated = repo.update(param).await?;
        tracing::info!("Updated level config {}", updated.id);

        Ok(updated)
    }

    /// Deletes a level configuration.
    ///
    /// # Returns
    /// - `Ok(())` - Configuration deleted
    /// - `Err(AppError::NotFound)` - No configuration with that ID
    /// - `Err(AppError::LevelErr)` - The remaining table would violate an invariant, for
    ///   example when deleting level 1 or the last level
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = LevelConfigRepository::new(self.db);
        let existing = repo.get_all().await?;

        if !existing.iter().any(|config| config.id == id) {
            return Err(AppError::NotFound(format!("Level config {} not found", id)));
        }

        let candidate = existing
            .iter()
            .filter(|config| config.id != id)
            .map(LevelConfig::to_level)
            .collect();
        LevelTable::new(candidate).validate()?;

        repo.delete(id).await?;
        tracing::info!("Deleted level config {}", id);

        Ok(())
    }

    /// Inserts the default level table when no level is configured.
    ///
    /// # Returns
    /// - `Ok(true)` - Defaults inserted
    /// - `Ok(false)` - Table already configured; nothing written
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn seed_defaults(&self) -> Result<bool, AppError> {
        let repo = LevelConfigRepository::new(self.db);

        if repo.count().await? > 0 {
            return Ok(false);
        }

        let levels = default_levels();
        let count = levels.len();
        repo.insert_many(levels).await?;
        tracing::info!("Seeded {} default levels", count);

        Ok(true)
    }
}
