//! Fire-and-forget EXP dispatch.
//!
//! Request handlers in other parts of the platform must never fail or slow down because
//! of gamification. `ExpAwarder::dispatch` queues the award and returns immediately; a
//! single background worker runs queued awards through the engine and logs the result.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::server::{
    model::gamification::{ActivityType, AwardOutcome, GamificationConfig},
    service::gamification::GamificationService,
};

/// One queued award.
#[derive(Debug, Clone, Copy)]
struct AwardRequest {
    user_id: i32,
    activity: ActivityType,
    /// Time of dispatch, so the award counts towards the day the activity happened.
    at: DateTime<Utc>,
}

/// Handle for queueing awards. Cheap to clone; the worker stops once every clone is dropped.
#[derive(Clone)]
pub struct ExpAwarder {
    sender: mpsc::UnboundedSender<AwardRequest>,
}

impl ExpAwarder {
    /// Starts the background worker.
    ///
    /// # Arguments
    /// - `db` - Connection owned by the worker
    /// - `config` - Rules and day policy shared with the rest of the application
    ///
    /// # Returns
    /// - `(ExpAwarder, JoinHandle)` - Dispatch handle and the worker task, which completes
    ///   after all handles are dropped and the queue is drained
    pub fn start(
        db: DatabaseConnection,
        config: Arc<GamificationConfig>,
    ) -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_worker(db, config, receiver));

        (Self { sender }, handle)
    }

    /// Queues an award for `user_id` and returns without waiting for it.
    ///
    /// Never fails: if the worker has stopped the award is dropped and logged.
    pub fn dispatch(&self, user_id: i32, activity: ActivityType) {
        let request = AwardRequest {
            user_id,
            activity,
            at: Utc::now(),
        };

        if self.sender.send(request).is_err() {
            tracing::error!(
                "EXP award queue closed, dropping {} award for user {}",
                activity,
                user_id
            );
        }
    }
}

async fn run_worker(
    db: DatabaseConnection,
    config: Arc<GamificationConfig>,
    mut receiver: mpsc::UnboundedReceiver<AwardRequest>,
) {
    let service = GamificationService::new(&db, &config);

    while let Some(request) = receiver.recv().await {
        match service
            .award_exp_at(request.user_id, request.activity, request.at)
            .await
        {
            Ok(AwardOutcome::Awarded { points }) => tracing::debug!(
                "Background award of {} EXP to user {} for {} succeeded",
                points,
                request.user_id,
                request.activity
            ),
            Ok(AwardOutcome::DailyLimitReached) => tracing::debug!(
                "Background award for user {} skipped, {} daily limit reached",
                request.user_id,
                request.activity
            ),
            Err(e) => tracing::error!(
                "Failed to award EXP to user {} for {}: {}",
                request.user_id,
                request.activity,
                e
            ),
        }
    }

    tracing::info!("EXP award worker stopped");
}
