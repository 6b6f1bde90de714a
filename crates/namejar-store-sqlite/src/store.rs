//! [`SqliteStore`] — the SQLite implementation of [`JarStore`].

use std::path::Path;

use chrono::Utc;
use namejar_core::{
  record::{Assignment, NewAssignment, NewSuggestion, Suggestion},
  store::JarStore,
};

use crate::{
  Error, Result,
  encode::{RawAssignment, RawSuggestion, encode_dt},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Name Jar store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All calls
/// are serialized through the connection's worker thread, so each append or
/// clear is a single atomic statement.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── JarStore impl ───────────────────────────────────────────────────────────

impl JarStore for SqliteStore {
  type Error = Error;

  // ── Suggestions ───────────────────────────────────────────────────────────

  async fn add_suggestion(&self, input: NewSuggestion) -> Result<Suggestion> {
    let created_at = Utc::now();
    let at_str = encode_dt(created_at);
    let name = input.name.clone();
    let submitter = input.submitter.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO suggestions (name, submitter, created_at) VALUES (?1, ?2, ?3)",
          rusqlite::params![name, submitter, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Suggestion {
      id,
      name: input.name,
      submitter: input.submitter,
      created_at,
    })
  }

  async fn list_suggestions(&self) -> Result<Vec<Suggestion>> {
    let raws: Vec<RawSuggestion> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, submitter, created_at
           FROM suggestions ORDER BY id DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawSuggestion {
              id:         row.get(0)?,
              name:       row.get(1)?,
              submitter:  row.get(2)?,
              created_at: row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSuggestion::into_suggestion).collect()
  }

  async fn clear_suggestions(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute("DELETE FROM suggestions", [])?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Assignments ───────────────────────────────────────────────────────────

  async fn add_assignment(&self, input: NewAssignment) -> Result<Assignment> {
    let created_at = Utc::now();
    let at_str = encode_dt(created_at);
    let subject = input.subject.clone();
    let chosen_name = input.chosen_name.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO assignments (subject, chosen_name, created_at) VALUES (?1, ?2, ?3)",
          rusqlite::params![subject, chosen_name, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Assignment {
      id,
      subject: input.subject,
      chosen_name: input.chosen_name,
      created_at,
    })
  }

  async fn list_assignments(&self) -> Result<Vec<Assignment>> {
    let raws: Vec<RawAssignment> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, subject, chosen_name, created_at
           FROM assignments ORDER BY id DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawAssignment {
              id:          row.get(0)?,
              subject:     row.get(1)?,
              chosen_name: row.get(2)?,
              created_at:  row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAssignment::into_assignment).collect()
  }

  async fn clear_assignments(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute("DELETE FROM assignments", [])?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
