//! The admin gate for destructive endpoints.
//!
//! A shared secret supplied in the `X-Admin-Key` header, compared here in
//! the API layer — the core and the stores know nothing about auth.

use axum::http::HeaderMap;

use crate::error::ApiError;

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Check the admin header against the configured secret.
///
/// When no secret is configured the gate never opens; there is no
/// "unprotected" admin mode.
pub fn require_admin(
  headers:    &HeaderMap,
  configured: Option<&str>,
) -> Result<(), ApiError> {
  let Some(expected) = configured else {
    return Err(ApiError::Unauthorized);
  };

  match headers.get(ADMIN_KEY_HEADER).and_then(|v| v.to_str().ok()) {
    Some(given) if given == expected => Ok(()),
    _ => Err(ApiError::Unauthorized),
  }
}
