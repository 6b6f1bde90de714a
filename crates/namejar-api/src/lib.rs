//! JSON REST API for the Name Jar.
//!
//! Exposes an axum [`Router`] backed by any [`namejar_core::store::JarStore`].
//! TLS and transport concerns are the caller's responsibility; the only auth
//! here is the shared admin secret gating the two bulk-clear endpoints.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", namejar_api::api_router(state))
//! ```

pub mod assignments;
pub mod auth;
pub mod draws;
pub mod error;
pub mod export;
pub mod spotlight;
pub mod suggestions;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use namejar_core::{draw::DrawEngine, store::JarStore};
use namejar_spotlight::SpotlightClient;
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `NAMEJAR_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:              String,
  #[serde(default = "default_port")]
  pub port:              u16,
  #[serde(default = "default_store_path")]
  pub store_path:        PathBuf,
  /// Shared secret unlocking the bulk-clear endpoints. When unset, those
  /// endpoints always refuse.
  #[serde(default)]
  pub admin_key:         Option<String>,
  #[serde(default = "default_true")]
  pub spotlight_enabled: bool,
  #[serde(default = "default_pokemon_max_id")]
  pub pokemon_max_id:    u32,
}

fn default_host() -> String { "127.0.0.1".to_owned() }
fn default_port() -> u16 { 8080 }
fn default_store_path() -> PathBuf { PathBuf::from("names.db") }
fn default_true() -> bool { true }
fn default_pokemon_max_id() -> u32 { namejar_spotlight::POKEMON_MAX_ID }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:              default_host(),
      port:              default_port(),
      store_path:        default_store_path(),
      admin_key:         None,
      spotlight_enabled: true,
      pokemon_max_id:    default_pokemon_max_id(),
    }
  }
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: JarStore> {
  pub store:          Arc<S>,
  pub engine:         Arc<DrawEngine<S>>,
  /// `None` when the spotlight is disabled by configuration.
  pub spotlight:      Option<SpotlightClient>,
  pub admin_key:      Option<String>,
  pub pokemon_max_id: u32,
}

impl<S: JarStore> AppState<S> {
  /// State with the spotlight disabled and no admin key — enough for the
  /// core endpoints, and what the tests use.
  pub fn new(store: Arc<S>) -> Self {
    Self {
      engine:         Arc::new(DrawEngine::new(store.clone())),
      store,
      spotlight:      None,
      admin_key:      None,
      pokemon_max_id: namejar_spotlight::POKEMON_MAX_ID,
    }
  }

  pub fn with_admin_key(mut self, key: impl Into<String>) -> Self {
    self.admin_key = Some(key.into());
    self
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: JarStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Suggestions
    .route(
      "/suggestions",
      get(suggestions::list::<S>)
        .post(suggestions::create::<S>)
        .delete(suggestions::clear::<S>),
    )
    // Assignments
    .route(
      "/assignments",
      get(assignments::list::<S>).delete(assignments::clear::<S>),
    )
    // Draws
    .route("/pool", get(draws::pool::<S>))
    .route("/draws", post(draws::create::<S>))
    // Exports
    .route("/export/{ledger}", get(export::download::<S>))
    // Decoration
    .route("/spotlight", get(spotlight::get_one::<S>))
    .with_state(state)
}
