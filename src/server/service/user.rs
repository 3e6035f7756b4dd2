//! User level and leaderboard service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{LeaderboardEntry, UserLevelInfo},
    service::level::LevelService,
};

/// Largest leaderboard a single request may ask for.
pub const MAX_LEADERBOARD_LIMIT: u64 = 100;

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's balance with their current and next level.
    ///
    /// # Returns
    /// - `Ok(UserLevelInfo)` - Balance and resolved level view
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_level_info(&self, user_id: i32) -> Result<UserLevelInfo, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let view = LevelService::new(self.db).resolve(user.exp).await?;

        Ok(UserLevelInfo {
            exp: user.exp,
            view,
        })
    }

    /// Gets the top users by EXP with their current level.
    ///
    /// # Arguments
    /// - `limit` - Number of entries, clamped to `1..=MAX_LEADERBOARD_LIMIT`
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)` - Entries ranked from 1
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardEntry>, AppError> {
        let limit = limit.clamp(1, MAX_LEADERBOARD_LIMIT);

        let users = UserRepository::new(self.db).get_leaderboard(limit).await?;
        let table = LevelService::new(self.db).get_table().await?;

        let entries = users
            .into_iter()
            .zip(1u64..)
            .map(|(user, rank)| {
                let level = table.resolve(user.exp).current;
                LeaderboardEntry { rank, user, level }
            })
            .collect();

        Ok(entries)
    }
}
