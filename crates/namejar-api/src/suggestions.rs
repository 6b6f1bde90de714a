//! Handlers for `/suggestions` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/suggestions` | Newest first |
//! | `POST`   | `/suggestions` | Body: `{"name":"…","submitter":"…"?}`; 201 + stored record |
//! | `DELETE` | `/suggestions` | Admin-gated bulk clear; 204 |

use axum::{
  Json,
  extract::State,
  http::{HeaderMap, StatusCode},
  response::IntoResponse,
};
use namejar_core::{
  record::{NewSuggestion, Suggestion},
  store::JarStore,
};
use serde::Deserialize;

use crate::{AppState, auth::require_admin, error::ApiError};

/// `GET /suggestions`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Suggestion>>, ApiError>
where
  S: JarStore,
{
  let suggestions = state
    .store
    .list_suggestions()
    .await
    .map_err(ApiError::store)?;
  Ok(Json(suggestions))
}

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name:      String,
  pub submitter: Option<String>,
}

/// `POST /suggestions` — body: `{"name":"Sparky","submitter":"Ash"}`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: JarStore,
{
  let input = NewSuggestion::new(&body.name, body.submitter.as_deref())
    .map_err(|e| ApiError::Validation(e.to_string()))?;

  let suggestion = state
    .store
    .add_suggestion(input)
    .await
    .map_err(ApiError::store)?;

  tracing::info!(id = suggestion.id, name = %suggestion.name, "suggestion added");
  Ok((StatusCode::CREATED, Json(suggestion)))
}

/// `DELETE /suggestions` — requires the `X-Admin-Key` header.
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
    .clear_suggestions()
    .await
    .map_err(ApiError::store)?;

  tracing::info!("suggestion ledger cleared");
  Ok(StatusCode::NO_CONTENT)
}
