//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; ids are native SQLite integers.

use chrono::{DateTime, Utc};
use namejar_core::record::{Assignment, Suggestion};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row structs ─────────────────────────────────────────────────────────────

/// A `suggestions` row as read from SQLite, before timestamp decoding.
pub struct RawSuggestion {
  pub id:         i64,
  pub name:       String,
  pub submitter:  String,
  pub created_at: String,
}

impl RawSuggestion {
  pub fn into_suggestion(self) -> Result<Suggestion> {
    Ok(Suggestion {
      id:         self.id,
      name:       self.name,
      submitter:  self.submitter,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// An `assignments` row as read from SQLite, before timestamp decoding.
pub struct RawAssignment {
  pub id:          i64,
  pub subject:     String,
  pub chosen_name: String,
  pub created_at:  String,
}

impl RawAssignment {
  pub fn into_assignment(self) -> Result<Assignment> {
    Ok(Assignment {
      id:          self.id,
      subject:     self.subject,
      chosen_name: self.chosen_name,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}
