//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use namejar_core::draw::DrawError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  /// Rejected input (blank name, overlong name, blank subject).
  #[error("invalid input: {0}")]
  Validation(String),

  /// The draw pool is empty — a non-fatal condition, nothing was written.
  #[error("conflict: {0}")]
  Conflict(String),

  /// Missing or wrong admin key.
  #[error("unauthorized")]
  Unauthorized,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
    Self::Store(Box::new(e))
  }
}

impl<E> From<DrawError<E>> for ApiError
where
  E: std::error::Error + Send + Sync + 'static,
{
  fn from(e: DrawError<E>) -> Self {
    match e {
      DrawError::EmptyPool => {
        Self::Conflict("no eligible names to draw from".to_owned())
      }
      DrawError::Invalid(inner) => Self::Validation(inner.to_string()),
      DrawError::Store(inner) => Self::store(inner),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Validation(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Unauthorized => {
        (StatusCode::UNAUTHORIZED, "invalid or missing admin key".to_owned())
      }
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
