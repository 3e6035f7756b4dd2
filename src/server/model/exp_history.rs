//! EXP history domain models and query parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::exp_history::{ExpHistoryDto, PaginatedExpHistoryDto};

/// One accepted award in a user's audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpHistory {
    pub id: i32,
    pub user_id: i32,
    pub activity_type: String,
    pub points: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl ExpHistory {
    /// Converts an entity model to a history domain model at the repository boundary.
    pub fn from_entity(entity: entity::exp_history::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            activity_type: entity.activity_type,
            points: entity.points,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ExpHistoryDto {
        ExpHistoryDto {
            id: self.id,
            activity_type: self.activity_type,
            points: self.points,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Parameters for appending a history entry.
#[derive(Debug, Clone)]
pub struct CreateExpHistoryParam {
    pub user_id: i32,
    pub activity_type: String,
    pub points: i64,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Parameters for browsing one user's history.
///
/// Dates are calendar days in the configured activity-day offset, both inclusive.
#[derive(Debug, Clone)]
pub struct GetExpHistoryParam {
    pub user_id: i32,
    pub activity_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Repository-level filter with the date range already converted to UTC instants.
#[derive(Debug, Clone, Default)]
pub struct ExpHistoryFilter {
    pub user_id: i32,
    pub activity_type: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub from: Option<DateTime<Utc>>,
    /// Exclusive upper bound on `created_at`.
    pub until: Option<DateTime<Utc>>,
}

/// A page of history entries with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedExpHistory {
    pub entries: Vec<ExpHistory>,
    /// Total number of entries matching the filter across all pages.
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedExpHistory {
    pub fn into_dto(self) -> PaginatedExpHistoryDto {
        PaginatedExpHistoryDto {
            entries: self.entries.into_iter().map(ExpHistory::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
