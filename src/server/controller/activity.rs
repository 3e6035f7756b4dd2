use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        activity::{ActivityRuleDto, RecordActivityDto},
        api::ErrorDto,
    },
    server::{
        error::AppError, middleware::internal::InternalKeyGuard,
        model::gamification::ActivityType, state::AppState,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// Get the EXP rules for every activity.
///
/// # Returns
/// - `200 OK` - Points and daily limit per activity type
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Activity rules", body = Vec<ActivityRuleDto>)
    ),
)]
pub async fn get_activities(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.gamification.rules.to_dto()))
}

/// Report a completed user activity.
///
/// Called by other platform services after their own action succeeded. The award is
/// queued and processed in the background, so the response does not say whether
/// EXP was granted or the daily limit was already reached.
///
/// # Access Control
/// Requires the internal API key in the `Authorization` header
///
/// # Returns
/// - `202 Accepted` - Award queued
/// - `400 Bad Request` - Unknown activity type
/// - `401 Unauthorized` - Missing or invalid internal key
#[utoipa::path(
    post,
    path = "/api/internal/activities",
    tag = ACTIVITY_TAG,
    request_body = RecordActivityDto,
    responses(
        (status = 202, description = "Award queued"),
        (status = 400, description = "Unknown activity type", body = ErrorDto),
        (status = 401, description = "Missing or invalid internal key", body = ErrorDto)
    ),
    security(
        ("internal_key" = [])
    ),
)]
pub async fn record_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RecordActivityDto>,
) -> Result<impl IntoResponse, AppError> {
    InternalKeyGuard::new(&state.internal_api_key).require(&headers)?;

    let activity = payload.activity_type.parse::<ActivityType>()?;

    state.awarder.dispatch(payload.user_id, activity);

    Ok(StatusCode::ACCEPTED)
}
