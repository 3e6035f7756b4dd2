use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is stored in the session.
    ///
    /// The login flow of the authentication service has not run for this session,
    /// or the session expired. Results in a 401 Unauthorized response.
    #[error("No user ID found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from session was not found in database")]
    UserNotInDatabase(i32),

    /// User lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response. The message is logged but not returned.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Internal endpoint called without an `Authorization` header.
    #[error("Missing internal API key")]
    MissingInternalKey,

    /// Internal endpoint called with a key that does not match.
    #[error("Invalid internal API key")]
    InvalidInternalKey,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / internal key failures → 401 Unauthorized
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::MissingInternalKey | Self::InvalidInternalKey => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to access this resource",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
