//! User domain models.
//!
//! Provides the user model with its EXP balance, the per-user level summary and the
//! leaderboard entry built from both.

use chrono::{DateTime, Utc};

use crate::{
    model::{level::UserLevelDto, user::LeaderboardEntryDto},
    server::model::level::{Level, LevelView},
};

/// Platform user with their EXP balance.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key of the user.
    pub id: i32,
    /// Display name of the user.
    pub name: String,
    /// Login email, unique per user.
    pub email: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    /// Running EXP balance, never negative and never decreasing.
    pub exp: i64,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            admin: entity.admin,
            exp: entity.exp,
            created_at: entity.created_at,
        }
    }
}

/// A user's balance together with the level it resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct UserLevelInfo {
    pub exp: i64,
    pub view: LevelView,
}

impl UserLevelInfo {
    pub fn into_dto(self) -> UserLevelDto {
        self.view.into_dto(self.exp)
    }
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// 1-based position on the leaderboard.
    pub rank: u64,
    pub user: User,
    pub level: Level,
}

impl LeaderboardEntry {
    pub fn into_dto(self) -> LeaderboardEntryDto {
        LeaderboardEntryDto {
            rank: self.rank,
            user_id: self.user.id,
            name: self.user.name,
            exp: self.user.exp,
            level: self.level.level,
            badge_name: self.level.badge_name,
            badge_icon: self.level.badge_icon,
        }
    }
}
