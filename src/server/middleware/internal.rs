//! Shared-key authentication for internal endpoints.
//!
//! Other platform services report user activities over HTTP. They authenticate with a
//! key configured on both sides and sent in the `Authorization` header, either bare or
//! as `Bearer <key>`.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{error::auth::AuthError, util::compare::constant_time_eq};

pub struct InternalKeyGuard<'a> {
    expected_key: &'a str,
}

impl<'a> InternalKeyGuard<'a> {
    pub fn new(expected_key: &'a str) -> Self {
        Self { expected_key }
    }

    /// Checks the request's `Authorization` header against the configured key.
    ///
    /// The comparison runs in constant time for keys of equal length.
    ///
    /// # Returns
    /// - `Ok(())` - Key matches
    /// - `Err(AuthError::MissingInternalKey)` - Header absent or not valid UTF-8
    /// - `Err(AuthError::InvalidInternalKey)` - Key does not match
    pub fn require(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let provided = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingInternalKey)?;
        let provided = provided.strip_prefix("Bearer ").unwrap_or(provided);

        if constant_time_eq(provided.as_bytes(), self.expected_key.as_bytes()) {
            Ok(())
        } else {
            Err(AuthError::InvalidInternalKey)
        }
    }
}
