//! Error types for `namejar-core`.

use thiserror::Error;

/// Validation failures for user-submitted input. The stores trust their
/// callers; all trimming and length checks happen here, before anything is
/// handed to a backend.
#[derive(Debug, Error)]
pub enum Error {
  #[error("name must not be empty")]
  EmptyName,

  #[error("name is too long ({len} characters, max {max})")]
  NameTooLong { len: usize, max: usize },

  #[error("subject must not be empty")]
  EmptySubject,

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
