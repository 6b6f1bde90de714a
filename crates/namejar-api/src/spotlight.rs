//! Handler for `GET /spotlight` — the decorative illustration.
//!
//! Failures of the upstream collaborator surface as 404 here, never as a
//! 5xx: "no spotlight" is an expected, harmless outcome.

use axum::{
  Json,
  extract::{Query, State},
};
use namejar_core::store::JarStore;
use namejar_spotlight::Spotlight;
use serde::Deserialize;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct SpotlightParams {
  /// Specific species id; a random one is rolled when absent.
  pub id: Option<u32>,
}

/// `GET /spotlight[?id=<species>]`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<SpotlightParams>,
) -> Result<Json<Spotlight>, ApiError>
where
  S: JarStore,
{
  let client = state
    .spotlight
    .as_ref()
    .ok_or_else(|| ApiError::NotFound("spotlight is disabled".to_owned()))?;

  let spotlight = match params.id {
    Some(id) => client.fetch(id).await,
    None => client.fetch_random(state.pokemon_max_id).await,
  };

  spotlight
    .map(Json)
    .ok_or_else(|| ApiError::NotFound("no spotlight available".to_owned()))
}
