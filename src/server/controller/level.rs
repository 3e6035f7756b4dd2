use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        level::{CreateLevelConfigDto, LevelConfigDto, UpdateLevelConfigDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::level::{CreateLevelConfigParam, UpdateLevelConfigParam},
        service::level::LevelService,
        state::AppState,
    },
};

/// Tag for grouping level endpoints in OpenAPI documentation
pub static LEVEL_TAG: &str = "level";

/// Get the level table.
///
/// Returns every configured level ordered from the lowest level up. Public so the
/// frontend can render badges and progress without a session.
///
/// # Returns
/// - `200 OK` - List of level configurations
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/levels",
    tag = LEVEL_TAG,
    responses(
        (status = 200, description = "Configured levels, lowest first", body = Vec<LevelConfigDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_levels(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let levels = LevelService::new(&state.db).get_all().await?;

    let levels_dto: Vec<LevelConfigDto> = levels.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(levels_dto)))
}

/// Get one level configuration.
///
/// # Returns
/// - `200 OK` - Level configuration
/// - `404 Not Found` - No level configuration with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/levels/{id}",
    tag = LEVEL_TAG,
    params(
        ("id" = i32, Path, description = "Level configuration ID")
    ),
    responses(
        (status = 200, description = "Level configuration", body = LevelConfigDto),
        (status = 404, description = "Level configuration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_level(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let level = LevelService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(level.into_dto())))
}

/// Create a level configuration.
///
/// # Access Control
/// - `Admin` - Only admins can change the level table
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Level number, EXP threshold and badge
///
/// # Returns
/// - `201 Created` - Level created
/// - `400 Bad Request` - Duplicate level or the resulting table would be invalid
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/levels",
    tag = LEVEL_TAG,
    request_body = CreateLevelConfigDto,
    responses(
        (status = 201, description = "Successfully created level", body = LevelConfigDto),
        (status = 400, description = "Invalid level configuration", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_level(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLevelConfigDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let level = LevelService::new(&state.db)
        .create(CreateLevelConfigParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(level.into_dto())))
}

/// Update a level configuration.
///
/// # Access Control
/// - `Admin` - Only admins can change the level table
///
/// # Returns
/// - `200 OK` - Level updated
/// - `400 Bad Request` - Duplicate level or the resulting table would be invalid
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No level configuration with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/admin/levels/{id}",
    tag = LEVEL_TAG,
    params(
        ("id" = i32, Path, description = "Level configuration ID")
    ),
    request_body = UpdateLevelConfigDto,
    responses(
        (status = 200, description = "Successfully updated level", body = LevelConfigDto),
        (status = 400, description = "Invalid level configuration", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Level configuration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_level(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLevelConfigDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let level = LevelService::new(&state.db)
        .update(UpdateLevelConfigParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(level.into_dto())))
}

/// Delete a level configuration.
///
/// Level 1 and the last remaining level cannot be deleted.
///
/// # Access Control
/// - `Admin` - Only admins can change the level table
///
/// # Returns
/// - `204 No Content` - Level deleted
/// - `400 Bad Request` - The remaining table would be invalid
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No level configuration with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/admin/levels/{id}",
    tag = LEVEL_TAG,
    params(
        ("id" = i32, Path, description = "Level configuration ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted level"),
        (status = 400, description = "Deletion would leave an invalid level table", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Level configuration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_level(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    LevelService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
