use thiserror::Error;

use crate::server::model::gamification::ActivityType;

/// Failures of the EXP award pipeline.
///
/// A reached daily limit is not represented here; it is a normal award outcome.
#[derive(Error, Debug)]
pub enum GamificationError {
    /// The award targeted a user that does not exist.
    ///
    /// Callers only award EXP to authenticated users, so this indicates an
    /// inconsistency between the caller and the database. The whole award is
    /// rolled back.
    #[error("Cannot award EXP to user {0}: user does not exist")]
    UserNotFound(i32),

    /// The activity has no points/limit rule in the injected configuration.
    #[error("No EXP rule configured for activity '{0}'")]
    UnconfiguredActivity(ActivityType),

    /// Activity name outside of the closed set of activity types.
    #[error("Unknown activity type '{0}'")]
    UnknownActivity(String),
}
