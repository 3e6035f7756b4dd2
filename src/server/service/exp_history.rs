//! EXP history service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::exp_history::ExpHistoryRepository,
    error::AppError,
    model::{
        exp_history::{ExpHistoryFilter, GetExpHistoryParam, PaginatedExpHistory},
        gamification::GamificationConfig,
    },
};

pub struct ExpHistoryService<'a> {
    db: &'a DatabaseConnection,
    config: &'a GamificationConfig,
}

impl<'a> ExpHistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a GamificationConfig) -> Self {
        Self { db, config }
    }

    /// Gets a page of one user's history, newest first.
    ///
    /// `start_date` and `end_date` are inclusive calendar days in the configured
    /// activity-day offset, the same days used for daily limits.
    ///
    /// # Returns
    /// - `Ok(PaginatedExpHistory)` - Entries for the page with pagination metadata
    /// - `Err(AppError::BadRequest)` - `start_date` is after `end_date`, `per_page` is 0 or
    ///   the page offset does not fit in a database offset
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_history(
        &self,
        param: GetExpHistoryParam,
    ) -> Result<PaginatedExpHistory, AppError> {
        if param.per_page == 0 {
            return Err(AppError::BadRequest("per_page must be at least 1".to_string()));
        }
        let offset = param
            .page
            .checked_mul(param.per_page)
            .filter(|offset| i64::try_from(*offset).is_ok());
        if offset.is_none() {
            return Err(AppError::BadRequest(format!(
                "page {} is out of range",
                param.page
            )));
        }
        if let (Some(start), Some(end)) = (param.start_date, param.end_date) {
            if start > end {
                return Err(AppError::BadRequest(format!(
                    "start_date {} is after end_date {}",
                    start, end
                )));
            }
        }

        let filter = ExpHistoryFilter {
            user_id: param.user_id,
            activity_type: param.activity_type,
            from: param.start_date.map(|day| self.config.day_start(day)),
            until: param
                .end_date
                .and_then(|day| day.succ_opt())
                .map(|day| self.config.day_start(day)),
        };

        let (entries, total) = ExpHistoryRepository::new(self.db)
            .get_paginated(filter, param.page, param.per_page)
            .await?;

        Ok(PaginatedExpHistory {
            entries,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages: total.div_ceil(param.per_page),
        })
    }

    /// Gets the distinct activity types recorded in the history log.
    pub async fn get_activity_types(&self) -> Result<Vec<String>, AppError> {
        Ok(ExpHistoryRepository::new(self.db).get_activity_types().await?)
    }
}
