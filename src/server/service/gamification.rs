//! EXP award engine.
//!
//! Applies one activity to one user: enforces the activity's daily limit, adds the
//! activity's points to the balance and appends a history entry. All three effects are
//! committed together or not at all.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        activity::ActivityRepository, exp_history::ExpHistoryRepository, user::UserRepository,
    },
    error::{gamification::GamificationError, AppError},
    model::{
        exp_history::CreateExpHistoryParam,
        gamification::{ActivityType, AwardOutcome, GamificationConfig},
    },
};

pub struct GamificationService<'a> {
    db: &'a DatabaseConnection,
    config: &'a GamificationConfig,
}

impl<'a> GamificationService<'a> {
    /// Creates a new GamificationService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection used to open the award transaction
    /// - `config` - Activity rules and day-boundary policy
    ///
    /// # Returns
    /// - `GamificationService` - New service instance
    pub fn new(db: &'a DatabaseConnection, config: &'a GamificationConfig) -> Self {
        Self { db, config }
    }

    /// Awards EXP for an activity performed now.
    ///
    /// See [`GamificationService::award_exp_at`].
    #[cfg(test)]
    pub async fn award_exp(
        &self,
        user_id: i32,
        activity: ActivityType,
    ) -> Result<AwardOutcome, AppError> {
        self.award_exp_at(user_id, activity, Utc::now()).await
    }

    /// Awards EXP for an activity performed at `at`.
    ///
    /// Runs in a single transaction:
    /// 1. Add the rule's points to the user's balance
    /// 2. Create or increment the user's counter for the activity day, only while it is
    ///    below the daily limit
    /// 3. Append a history entry
    ///
    /// Any failure, a missing user or a reached limit rolls the whole transaction back,
    /// so the balance always equals the sum of the user's history points.
    ///
    /// # Arguments
    /// - `user_id` - User receiving the award
    /// - `activity` - Activity that was performed
    /// - `at` - When the activity happened; selects the activity day
    ///
    /// # Returns
    /// - `Ok(AwardOutcome::Awarded)` - Balance, counter and history written
    /// - `Ok(AwardOutcome::DailyLimitReached)` - Limit already reached; nothing written
    /// - `Err(AppError::GamificationErr)` - Unconfigured activity or missing user
    /// - `Err(AppError::DbErr)` - Database error; nothing written
    pub async fn award_exp_at(
        &self,
        user_id: i32,
        activity: ActivityType,
        at: DateTime<Utc>,
    ) -> Result<AwardOutcome, AppError> {
        let rule = self
            .config
            .rules
            .get(activity)
            .ok_or(GamificationError::UnconfiguredActivity(activity))?;
        let points = rule.points();
        let day = self.config.activity_day(at);

        let txn = self.db.begin().await?;

        // Balance first so every award locks rows in the same order.
        let updated = UserRepository::new(&txn).add_exp(user_id, points).await?;
        if updated == 0 {
            txn.rollback().await?;
            return Err(GamificationError::UserNotFound(user_id).into());
        }

        let accepted = ActivityRepository::new(&txn)
            .try_increment(user_id, activity, day, rule.daily_limit(), at)
            .await?;
        if !accepted {
            txn.rollback().await?;
            tracing::debug!(
                "Daily limit reached for user {} on {} ({})",
                user_id,
                activity,
                day
            );
            return Ok(AwardOutcome::DailyLimitReached);
        }

        ExpHistoryRepository::new(&txn)
            .create(CreateExpHistoryParam {
                user_id,
                activity_type: activity.as_str().to_string(),
                points,
                description: activity.description().to_string(),
                created_at: at,
            })
            .await?;

        txn.commit().await?;

        tracing::debug!("Awarded {} EXP to user {} for {}", points, user_id, activity);

        Ok(AwardOutcome::Awarded { points })
    }
}
