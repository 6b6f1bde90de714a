//! Handler for `GET /export/{ledger}` — CSV/JSON downloads.

use axum::{
  extract::{Path, Query, State},
  http::header,
  response::IntoResponse,
};
use namejar_core::{
  export::{ExportFormat, export_assignments, export_suggestions},
  store::JarStore,
};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// Which ledger to export.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ledger {
  Suggestions,
  Assignments,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
  #[serde(default = "default_format")]
  pub format: ExportFormat,
}

fn default_format() -> ExportFormat { ExportFormat::Csv }

/// `GET /export/{suggestions|assignments}[?format=csv|json]`
pub async fn download<S>(
  State(state): State<AppState<S>>,
  Path(ledger): Path<Ledger>,
  Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, ApiError>
where
  S: JarStore,
{
  let body = match ledger {
    Ledger::Suggestions => {
      let rows = state
        .store
        .list_suggestions()
        .await
        .map_err(ApiError::store)?;
      export_suggestions(&rows, params.format).map_err(ApiError::store)?
    }
    Ledger::Assignments => {
      let rows = state
        .store
        .list_assignments()
        .await
        .map_err(ApiError::store)?;
      export_assignments(&rows, params.format).map_err(ApiError::store)?
    }
  };

  Ok((
    [(header::CONTENT_TYPE, params.format.content_type())],
    body,
  ))
}
