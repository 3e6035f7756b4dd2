use thiserror::Error;

/// Violations of the level table invariants.
///
/// Levels must be totally ordered, start at level 1 with 0 EXP and have
/// strictly increasing EXP thresholds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelTableError {
    #[error("Level table is empty")]
    Empty,

    #[error("Level numbers must be at least 1, got {0}")]
    InvalidLevel(i32),

    #[error("Level {0} is configured more than once")]
    DuplicateLevel(i32),

    #[error("Level {level} has a negative EXP threshold ({min_exp})")]
    NegativeThreshold { level: i32, min_exp: i64 },

    #[error("Level 1 must exist with a threshold of 0 EXP")]
    MissingBaseLevel,

    #[error(
        "Level {level} threshold ({min_exp}) must be greater than level {previous_level} threshold ({previous_min_exp})"
    )]
    NonIncreasingThreshold {
        level: i32,
        min_exp: i64,
        previous_level: i32,
        previous_min_exp: i64,
    },
}
