use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, exp_history::PaginatedExpHistoryDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::exp_history::GetExpHistoryParam,
        service::exp_history::ExpHistoryService, state::AppState,
    },
};

/// Tag for grouping EXP history endpoints in OpenAPI documentation
pub static EXP_HISTORY_TAG: &str = "exp_history";

const MAX_PER_PAGE: u64 = 100;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpHistoryParams {
    /// Only return entries for this activity type
    pub activity_type: Option<String>,
    /// First day to include (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Last day to include (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
    /// Zero-indexed page number
    #[serde(default)]
    pub page: u64,
    /// Entries per page, at most 100
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

/// Get the current user's EXP history.
///
/// Entries are returned newest first. Dates are calendar days in the activity-day
/// offset, the same days used for daily limits.
///
/// # Access Control
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK` - Page of history entries with pagination metadata
/// - `400 Bad Request` - Invalid date range or page size
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/user/exp-history",
    tag = EXP_HISTORY_TAG,
    params(ExpHistoryParams),
    responses(
        (status = 200, description = "Page of EXP history", body = PaginatedExpHistoryDto),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_exp_history(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ExpHistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = GetExpHistoryParam {
        user_id: user.id,
        activity_type: params.activity_type.filter(|t| !t.is_empty()),
        start_date: params.start_date,
        end_date: params.end_date,
        page: params.page,
        per_page: params.per_page.min(MAX_PER_PAGE),
    };

    let history = ExpHistoryService::new(&state.db, &state.gamification)
        .get_history(param)
        .await?;

    Ok((StatusCode::OK, Json(history.into_dto())))
}

/// Get the activity types present in the EXP history.
///
/// Used to populate the history filter.
///
/// # Access Control
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK` - Distinct activity types, alphabetically
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/exp-history/activity-types",
    tag = EXP_HISTORY_TAG,
    responses(
        (status = 200, description = "Distinct activity types", body = Vec<String>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let types = ExpHistoryService::new(&state.db, &state.gamification)
        .get_activity_types()
        .await?;

    Ok((StatusCode::OK, Json(types)))
}
