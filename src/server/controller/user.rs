use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, level::UserLevelDto, user::LeaderboardEntryDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user progress endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardParams {
    /// Number of users to return, clamped to 1..=100
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

/// Get the current user's EXP and level.
///
/// # Access Control
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK` - EXP balance, current level badge and progress to the next level
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Session user no longer exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/user/level",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user's level", body = UserLevelDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_level(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let info = UserService::new(&state.db).get_level_info(user.id).await?;

    Ok((StatusCode::OK, Json(info.into_dto())))
}

/// Get the top users by EXP.
///
/// Ties are broken by user ID so the ranking is stable between requests.
///
/// # Returns
/// - `200 OK` - Ranked users with their levels
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = USER_TAG,
    params(LeaderboardParams),
    responses(
        (status = 200, description = "Leaderboard, highest EXP first", body = Vec<LeaderboardEntryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let entries = UserService::new(&state.db)
        .get_leaderboard(params.limit)
        .await?;

    let entries_dto: Vec<LeaderboardEntryDto> =
        entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(entries_dto)))
}
