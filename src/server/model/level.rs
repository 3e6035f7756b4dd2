//! Level domain models and level resolution.
//!
//! A level table is the ordered list of configured levels. Resolving an EXP value
//! against it yields the user's current level and the next one to reach. Resolution
//! is total: when nothing in the table matches, a built-in level 1 badge is returned
//! and flagged so callers can detect the missing configuration.

use chrono::{DateTime, Utc};

use crate::{
    model::level::{
        CreateLevelConfigDto, LevelConfigDto, LevelDto, UpdateLevelConfigDto, UserLevelDto,
    },
    server::error::level::LevelTableError,
};

/// Level every user has before any configuration applies.
pub const DEFAULT_LEVEL: i32 = 1;
pub const DEFAULT_BADGE_NAME: &str = "Beginner";
pub const DEFAULT_BADGE_ICON: &str = "🌱";

/// A level tier with its EXP threshold and badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    /// Level number, 1 being the lowest.
    pub level: i32,
    /// EXP needed to reach this level.
    pub min_exp: i64,
    /// Display name of the badge.
    pub badge_name: String,
    /// Emoji or icon identifier of the badge.
    pub badge_icon: String,
}

impl Level {
    pub fn new(
        level: i32,
        min_exp: i64,
        badge_name: impl Into<String>,
        badge_icon: impl Into<String>,
    ) -> Self {
        Self {
            level,
            min_exp,
            badge_name: badge_name.into(),
            badge_icon: badge_icon.into(),
        }
    }

    /// The hardcoded level 1 / 0 EXP fallback.
    pub fn fallback() -> Self {
        Self::new(DEFAULT_LEVEL, 0, DEFAULT_BADGE_NAME, DEFAULT_BADGE_ICON)
    }

    pub fn into_dto(self) -> LevelDto {
        LevelDto {
            level: self.level,
            min_exp: self.min_exp,
            badge_name: self.badge_name,
            badge_icon: self.badge_icon,
        }
    }
}

/// Stored level configuration row.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub id: i32,
    pub level: i32,
    pub min_exp: i64,
    pub badge_name: String,
    pub badge_icon: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LevelConfig {
    /// Converts an entity model to a level config domain model at the repository boundary.
    pub fn from_entity(entity: entity::level_config::Model) -> Self {
        Self {
            id: entity.id,
            level: entity.level,
            min_exp: entity.min_exp,
            badge_name: entity.badge_name,
            badge_icon: entity.badge_icon,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn to_level(&self) -> Level {
        Level::new(
            self.level,
            self.min_exp,
            self.badge_name.clone(),
            self.badge_icon.clone(),
        )
    }

    pub fn into_dto(self) -> LevelConfigDto {
        LevelConfigDto {
            id: self.id,
            level: self.level,
            min_exp: self.min_exp,
            badge_name: self.badge_name,
            badge_icon: self.badge_icon,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a level configuration.
#[derive(Debug, Clone)]
pub struct CreateLevelConfigParam {
    pub level: i32,
    pub min_exp: i64,
    pub badge_name: String,
    pub badge_icon: String,
}

impl CreateLevelConfigParam {
    pub fn from_dto(dto: CreateLevelConfigDto) -> Self {
        Self {
            level: dto.level,
            min_exp: dto.min_exp,
            badge_name: dto.badge_name,
            badge_icon: dto.badge_icon,
        }
    }

    pub fn to_level(&self) -> Level {
        Level::new(
            self.level,
            self.min_exp,
            self.badge_name.clone(),
            self.badge_icon.clone(),
        )
    }
}

/// Parameters for replacing an existing level configuration.
#[derive(Debug, Clone)]
pub struct UpdateLevelConfigParam {
    pub id: i32,
    pub level: i32,
    pub min_exp: i64,
    pub badge_name: String,
    pub badge_icon: String,
}

impl UpdateLevelConfigParam {
    pub fn from_dto(id: i32, dto: UpdateLevelConfigDto) -> Self {
        Self {
            id,
            level: dto.level,
            min_exp: dto.min_exp,
            badge_name: dto.badge_name,
            badge_icon: dto.badge_icon,
        }
    }

    pub fn to_level(&self) -> Level {
        Level::new(
            self.level,
            self.min_exp,
            self.badge_name.clone(),
            self.badge_icon.clone(),
        )
    }
}

/// Ordered, read-only list of levels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelTable {
    levels: Vec<Level>,
}

impl LevelTable {
    /// Creates a table, ordering the levels by level number.
    pub fn new(mut levels: Vec<Level>) -> Self {
        levels.sort_by_key(|level| level.level);
        Self { levels }
    }

    pub fn from_configs(configs: &[LevelConfig]) -> Self {
        Self::new(configs.iter().map(LevelConfig::to_level).collect())
    }

    /// Levels in ascending level order.
    #[cfg(test)]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Resolves an EXP balance to its current and next level.
    ///
    /// The current level is the highest level whose threshold is at or below
    /// `current_exp`; the next level is the lowest level above it. When no level
    /// qualifies (empty or misconfigured table) the fallback level 1 is returned with
    /// `is_default` set, and the next level is the lowest configured level whose
    /// threshold lies above `current_exp`.
    pub fn resolve(&self, current_exp: i64) -> LevelView {
        let current = self
            .levels
            .iter()
            .rev()
            .find(|level| level.min_exp <= current_exp);

        match current {
            Some(current) => LevelView {
                current: current.clone(),
                next: self
                    .levels
                    .iter()
                    .find(|level| level.level > current.level)
                    .cloned(),
                is_default: false,
            },
            None => LevelView {
                current: Level::fallback(),
                next: self
                    .levels
                    .iter()
                    .find(|level| level.min_exp > current_exp)
                    .cloned(),
                is_default: true,
            },
        }
    }

    /// Checks the table invariants.
    ///
    /// # Returns
    /// - `Ok(())` - Non-empty, level numbers unique and at least 1, level 1 at 0 EXP and
    ///   thresholds strictly increasing with level
    /// - `Err(LevelTableError)` - First violation found
    pub fn validate(&self) -> Result<(), LevelTableError> {
        let Some(first) = self.levels.first() else {
            return Err(LevelTableError::Empty);
        };

        for level in &self.levels {
            if level.level < DEFAULT_LEVEL {
                return Err(LevelTableError::InvalidLevel(level.level));
            }
            if level.min_exp < 0 {
                return Err(LevelTableError::NegativeThreshold {
                    level: level.level,
                    min_exp: level.min_exp,
                });
            }
        }

        if first.level != DEFAULT_LEVEL || first.min_exp != 0 {
            return Err(LevelTableError::MissingBaseLevel);
        }

        for pair in self.levels.windows(2) {
            let (previous, level) = (&pair[0], &pair[1]);
            if previous.level == level.level {
                return Err(LevelTableError::DuplicateLevel(level.level));
            }
            if level.min_exp <= previous.min_exp {
                return Err(LevelTableError::NonIncreasingThreshold {
                    level: level.level,
                    min_exp: level.min_exp,
                    previous_level: previous.level,
                    previous_min_exp: previous.min_exp,
                });
            }
        }

        Ok(())
    }
}

/// Current and next level for one EXP value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelView {
    pub current: Level,
    pub next: Option<Level>,
    /// Set when `current` is the built-in fallback rather than a configured level.
    pub is_default: bool,
}

impl LevelView {
    pub fn exp_to_next_level(&self, current_exp: i64) -> Option<i64> {
        exp_to_next_level(current_exp, self.next.as_ref())
    }

    pub fn into_dto(self, current_exp: i64) -> UserLevelDto {
        let exp_to_next_level = self.exp_to_next_level(current_exp);

        UserLevelDto {
            current_exp,
            level: self.current.level,
            badge_name: self.current.badge_name,
            badge_icon: self.current.badge_icon,
            is_default: self.is_default,
            next_level: self.next.map(Level::into_dto),
            exp_to_next_level,
        }
    }
}

/// EXP still missing to reach `next`, never negative; `None` at the maximum level.
pub fn exp_to_next_level(current_exp: i64, next: Option<&Level>) -> Option<i64> {
    next.map(|next| next.min_exp.saturating_sub(current_exp).max(0))
}

/// Levels inserted into an empty configuration at startup.
pub fn default_levels() -> Vec<Level> {
    vec![
        Level::new(1, 0, "Beginner", "🌱"),
        Level::new(2, 100, "Explorer", "🌿"),
        Level::new(3, 300, "Learner", "📚"),
        Level::new(4, 600, "Intermediate", "🌳"),
        Level::new(5, 1000, "Advanced", "🏆"),
        Level::new(6, 1500, "Expert", "💎"),
        Level::new(7, 2000, "Master", "⭐"),
        Level::new(8, 3000, "Grandmaster", "👑"),
    ]
}
