//! Ledger records — the two append-only entity types of the Name Jar.
//!
//! Records are immutable once written. The only destructive operation a
//! store offers is a bulk clear of an entire ledger; there is no per-row
//! update or delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Maximum length of a suggested name, in characters, after trimming.
pub const MAX_NAME_LEN: usize = 50;

// ─── Suggestion ──────────────────────────────────────────────────────────────

/// A single submitted name idea.
///
/// Serialized with camelCase keys (`createdAt`) so JSON exports and API
/// responses share one field naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
  /// Monotonically increasing id, assigned by the store on insert.
  pub id:         i64,
  pub name:       String,
  /// Who submitted the name; empty string when not given.
  pub submitter:  String,
  pub created_at: DateTime<Utc>,
}

/// A validated suggestion awaiting insertion. The store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone)]
pub struct NewSuggestion {
  pub name:      String,
  pub submitter: String,
}

impl NewSuggestion {
  /// Validate and normalise a submission: both fields are whitespace-trimmed,
  /// the name must be non-empty and at most [`MAX_NAME_LEN`] characters.
  pub fn new(name: &str, submitter: Option<&str>) -> Result<Self> {
    let name = name.trim();
    if name.is_empty() {
      return Err(Error::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
      return Err(Error::NameTooLong { len, max: MAX_NAME_LEN });
    }

    Ok(Self {
      name:      name.to_owned(),
      submitter: submitter.unwrap_or("").trim().to_owned(),
    })
  }
}

// ─── Assignment ──────────────────────────────────────────────────────────────

/// A durable record binding a chosen name to a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
  pub id:          i64,
  /// The entity being named (e.g. "Charmander").
  pub subject:     String,
  /// Copied verbatim from a suggestion at draw time; never rewritten.
  pub chosen_name: String,
  pub created_at:  DateTime<Utc>,
}

/// A validated assignment awaiting insertion.
#[derive(Debug, Clone)]
pub struct NewAssignment {
  pub subject:     String,
  pub chosen_name: String,
}

impl NewAssignment {
  /// Validate an assignment: the subject must be non-empty after trimming.
  /// The chosen name is taken as-is — it was validated when suggested.
  pub fn new(subject: &str, chosen_name: &str) -> Result<Self> {
    let subject = subject.trim();
    if subject.is_empty() {
      return Err(Error::EmptySubject);
    }

    Ok(Self {
      subject:     subject.to_owned(),
      chosen_name: chosen_name.to_owned(),
    })
  }
}
