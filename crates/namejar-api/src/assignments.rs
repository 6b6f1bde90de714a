//! Handlers for `/assignments` endpoints.
//!
//! Assignments are created only through `POST /draws` (see [`crate::draws`]);
//! this module is the read/clear side of that ledger.

use axum::{
  Json,
  extract::State,
  http::{HeaderMap, StatusCode},
};
use namejar_core::{record::Assignment, store::JarStore};

use crate::{AppState, auth::require_admin, error::ApiError};

/// `GET /assignments`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Assignment>>, ApiError>
where
  S: JarStore,
{
  let assignments = state
    .store
    .list_assignments()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(assignments))
}

/// `DELETE /assignments` — requires the `X-Admin-Key` header. Clearing this
/// ledger makes every previously drawn name eligible again.
pub async fn clear<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
) -> Result<StatusCode, ApiError>
where
  S: JarStore,
{
  require_admin(&headers, state.admin_key.as_deref())?;

  state
    .store
    .clear_assignments()
    .await
    .map_err(ApiError::store)?;

  tracing::info!("assignment ledger cleared");
  Ok(StatusCode::NO_CONTENT)
}
