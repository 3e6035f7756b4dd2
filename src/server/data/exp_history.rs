//! EXP history data repository.
//!
//! Append-only audit trail of accepted awards. Rows are written inside the award
//! transaction and read back for the user's history page.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::exp_history::{CreateExpHistoryParam, ExpHistory, ExpHistoryFilter};

pub struct ExpHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExpHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a history entry.
    ///
    /// # Arguments
    /// - `param` - User, activity, points, description and timestamp of the award
    ///
    /// # Returns
    /// - `Ok(ExpHistory)` - The inserted entry with its generated ID
    /// - `Err(DbErr)` - Database error during insert, including a missing user
    pub async fn create(&self, param: CreateExpHistoryParam) -> Result<ExpHistory, DbErr> {
        let entity = entity::exp_history::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            activity_type: ActiveValue::Set(param.activity_type),
            points: ActiveValue::Set(param.points),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(param.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ExpHistory::from_entity(entity))
    }

    /// Gets a page of one user's history, newest first.
    ///
    /// Entries with the same timestamp are ordered by descending ID so pages never
    /// overlap.
    ///
    /// # Arguments
    /// - `filter` - User, optional activity type and optional `[from, until)` time range
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of entries per page
    ///
    /// # Returns
    /// - `Ok((entries, total))` - Entries for the page and total matching entries
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: ExpHistoryFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ExpHistory>, u64), DbErr> {
        let mut query = entity::prelude::ExpHistory::find()
            .filter(entity::exp_history::Column::UserId.eq(filter.user_id));

        if let Some(activity_type) = filter.activity_type {
            query = query.filter(entity::exp_history::Column::ActivityType.eq(activity_type));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::exp_history::Column::CreatedAt.gte(from));
        }
        if let Some(until) = filter.until {
            query = query.filter(entity::exp_history::Column::CreatedAt.lt(until));
        }

        let paginator = query
            .order_by_desc(entity::exp_history::Column::CreatedAt)
            .order_by_desc(entity::exp_history::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let entries = entities.into_iter().map(ExpHistory::from_entity).collect();

        Ok((entries, total))
    }

    /// Gets the distinct activity types present in the log, alphabetically.
    pub async fn get_activity_types(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::ExpHistory::find()
            .select_only()
            .column(entity::exp_history::Column::ActivityType)
            .distinct()
            .order_by_asc(entity::exp_history::Column::ActivityType)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
