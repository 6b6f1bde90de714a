//! Handlers for the draw engine: pool preview and the draw itself.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/pool` | `?unique_only=&collapse_duplicates=`; advisory snapshot |
//! | `POST` | `/draws` | Body: [`DrawBody`]; 201 + new assignment, 409 when the pool is dry |

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use namejar_core::{draw::DrawOptions, store::JarStore};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

// ─── Pool preview ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PoolResponse {
  /// Pool size — what the UI shows as "names available for draw".
  pub available: usize,
  pub names:     Vec<String>,
}

/// `GET /pool[?unique_only=…][&collapse_duplicates=…]`
pub async fn pool<S>(
  State(state): State<AppState<S>>,
  Query(opts): Query<DrawOptions>,
) -> Result<Json<PoolResponse>, ApiError>
where
  S: JarStore,
{
  let names = state.engine.pool(opts).await?;
  Ok(Json(PoolResponse { available: names.len(), names }))
}

// ─── Draw ────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /draws`. The option fields default to the
/// original UI toggles: unique names on, duplicate suggestions collapsed off.
#[derive(Debug, Deserialize)]
pub struct DrawBody {
  pub subject: String,
  #[serde(flatten)]
  pub options: DrawOptions,
}

/// `POST /draws` — body: `{"subject":"Charmander"}`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<DrawBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: JarStore,
{
  let assignment = state.engine.draw(&body.subject, body.options).await?;

  tracing::info!(
    subject = %assignment.subject,
    chosen = %assignment.chosen_name,
    "name drawn"
  );
  Ok((StatusCode::CREATED, Json(assignment)))
}
