//! The draw engine — eligible-pool computation plus the random pick.
//!
//! Pool computation is a pure function over the two ledgers so it can be
//! tested exhaustively without a backend; [`DrawEngine`] layers the random
//! selection and the durable write on top of any [`JarStore`].

use std::{collections::BTreeMap, sync::Arc};

use rand::{seq::SliceRandom, thread_rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::{
  record::{Assignment, NewAssignment},
  store::JarStore,
};

// ─── Options ─────────────────────────────────────────────────────────────────

/// Knobs for a single draw (or pool preview).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
  /// Exclude names already assigned, compared case-insensitively.
  pub unique_only:         bool,
  /// Collapse the pool to distinct names. When off, a name submitted three
  /// times is three times as likely to be drawn.
  pub collapse_duplicates: bool,
}

impl Default for DrawOptions {
  fn default() -> Self {
    Self { unique_only: true, collapse_duplicates: false }
  }
}

// ─── Error ───────────────────────────────────────────────────────────────────

/// Failure modes of a draw, generic over the backend's error type.
#[derive(Debug, Error)]
pub enum DrawError<E> {
  /// No eligible name remains. Nothing was written.
  #[error("no eligible names to draw from")]
  EmptyPool,

  #[error(transparent)]
  Invalid(#[from] crate::Error),

  #[error("store error: {0}")]
  Store(E),
}

// ─── Pool computation ────────────────────────────────────────────────────────

/// Compute the eligible pool for a draw.
///
/// - Suggestion names are whitespace-trimmed; entries that trim to empty are
///   dropped.
/// - With `unique_only`, any name whose lowercase form matches a lowercased
///   assigned name is excluded.
/// - With `collapse_duplicates`, the pool is reduced to distinct names under
///   case-insensitive folding; the entry kept for each folded group is the
///   lexicographically least casing present, so `["Luna", "luna", "Blaze"]`
///   collapses to `["Blaze", "Luna"]`. Note this folding is stricter than
///   the historical behavior, where the collapse was case-sensitive even
///   though the assignment exclusion was not; we normalise both sides to
///   case-insensitive and say so here rather than reproducing the mismatch
///   silently.
///
/// The result is deterministic given the ledger contents: collapsed pools
/// are sorted lexicographically, multiset pools keep submission order. The
/// draw itself samples by index, so ordering never biases selection.
pub fn eligible_pool(
  suggestions: &[String],
  assigned:    &[String],
  opts:        DrawOptions,
) -> Vec<String> {
  let excluded: Vec<String> = if opts.unique_only {
    assigned.iter().map(|n| n.to_lowercase()).collect()
  } else {
    Vec::new()
  };

  let names = suggestions
    .iter()
    .map(|n| n.trim())
    .filter(|n| !n.is_empty())
    .filter(|n| !excluded.contains(&n.to_lowercase()));

  if opts.collapse_duplicates {
    // folded form -> canonical casing (lexicographically least variant)
    let mut canonical: BTreeMap<String, &str> = BTreeMap::new();
    for name in names {
      canonical
        .entry(name.to_lowercase())
        .and_modify(|kept| {
          if name < *kept {
            *kept = name;
          }
        })
        .or_insert(name);
    }

    let mut pool: Vec<String> =
      canonical.into_values().map(str::to_owned).collect();
    pool.sort();
    pool
  } else {
    names.map(str::to_owned).collect()
  }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Draws a random eligible name and durably records the assignment.
///
/// The whole read-pick-write sequence runs under an internal mutex, so two
/// concurrent draws through the same engine can never observe the same
/// snapshot and hand out overlapping names. (The original design left this
/// race open; we close it.)
pub struct DrawEngine<S> {
  store:     Arc<S>,
  draw_lock: Mutex<()>,
}

impl<S: JarStore> DrawEngine<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store, draw_lock: Mutex::new(()) }
  }

  /// Snapshot of the currently eligible pool, for the "names available"
  /// display. Advisory only — the pool may change before a later draw.
  pub async fn pool(
    &self,
    opts: DrawOptions,
  ) -> Result<Vec<String>, DrawError<S::Error>> {
    let suggestions = self
      .store
      .list_suggestions()
      .await
      .map_err(DrawError::Store)?;
    let assignments = self
      .store
      .list_assignments()
      .await
      .map_err(DrawError::Store)?;

    let names: Vec<String> =
      suggestions.into_iter().map(|s| s.name).collect();
    let assigned: Vec<String> =
      assignments.into_iter().map(|a| a.chosen_name).collect();

    Ok(eligible_pool(&names, &assigned, opts))
  }

  /// Draw one name uniformly at random from the eligible pool and append an
  /// [`Assignment`] binding it to `subject`.
  ///
  /// Either writes exactly one record and returns it, or writes nothing and
  /// fails: [`DrawError::EmptyPool`] when no eligible name remains,
  /// [`DrawError::Invalid`] when `subject` is blank.
  pub async fn draw(
    &self,
    subject: &str,
    opts:    DrawOptions,
  ) -> Result<Assignment, DrawError<S::Error>> {
    if subject.trim().is_empty() {
      return Err(crate::Error::EmptySubject.into());
    }

    let _guard = self.draw_lock.lock().await;

    let pool = self.pool(opts).await?;
    let chosen = pool
      .choose(&mut thread_rng())
      .ok_or(DrawError::EmptyPool)?;

    let input = NewAssignment::new(subject, chosen)?;
    self
      .store
      .add_assignment(input)
      .await
      .map_err(DrawError::Store)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::{
    Mutex as StdMutex,
    atomic::{AtomicI64, Ordering},
  };

  use chrono::Utc;

  use super::*;
  use crate::record::{NewSuggestion, Suggestion};

  fn names(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
  }

  const MULTISET: DrawOptions =
    DrawOptions { unique_only: false, collapse_duplicates: false };
  const UNIQUE_COLLAPSED: DrawOptions =
    DrawOptions { unique_only: true, collapse_duplicates: true };

  // ── eligible_pool ─────────────────────────────────────────────────────────

  #[test]
  fn multiset_pool_keeps_duplicates_and_order() {
    let pool = eligible_pool(&names(&["A", "A", "B"]), &[], MULTISET);
    assert_eq!(pool, names(&["A", "A", "B"]));
  }

  #[test]
  fn pool_drops_blank_suggestions_and_trims() {
    let pool = eligible_pool(&names(&["  Luna ", "   ", ""]), &[], MULTISET);
    assert_eq!(pool, names(&["Luna"]));
  }

  #[test]
  fn collapse_folds_case_and_keeps_least_casing() {
    let pool =
      eligible_pool(&names(&["Luna", "luna", "Blaze"]), &[], UNIQUE_COLLAPSED);
    assert_eq!(pool, names(&["Blaze", "Luna"]));
  }

  #[test]
  fn collapsed_pool_is_sorted_and_stable() {
    let a = eligible_pool(&names(&["b", "Sparky", "b", "Ace"]), &[], UNIQUE_COLLAPSED);
    let b = eligible_pool(&names(&["b", "Sparky", "b", "Ace"]), &[], UNIQUE_COLLAPSED);
    assert_eq!(a, b);
    let mut sorted = a.clone();
    sorted.sort();
    assert_eq!(a, sorted);
  }

  #[test]
  fn unique_only_excludes_case_insensitively() {
    let pool = eligible_pool(
      &names(&["Luna", "Blaze", "sparky"]),
      &names(&["LUNA", "Sparky"]),
      DrawOptions { unique_only: true, collapse_duplicates: false },
    );
    assert_eq!(pool, names(&["Blaze"]));
  }

  #[test]
  fn unique_off_ignores_assignments() {
    let pool = eligible_pool(
      &names(&["Luna"]),
      &names(&["Luna"]),
      MULTISET,
    );
    assert_eq!(pool, names(&["Luna"]));
  }

  #[test]
  fn multiset_selection_is_frequency_weighted() {
    // A appears twice, B once; over 10k uniform picks A should converge to
    // ~2/3. The tolerance is ~6 standard deviations wide.
    let pool = eligible_pool(&names(&["A", "A", "B"]), &[], MULTISET);
    let mut rng = thread_rng();

    let mut hits_a = 0u32;
    for _ in 0..10_000 {
      if pool.choose(&mut rng).unwrap() == "A" {
        hits_a += 1;
      }
    }

    let freq = f64::from(hits_a) / 10_000.0;
    assert!((0.637..=0.696).contains(&freq), "freq of A was {freq}");
  }

  // ── DrawEngine against an in-memory store ─────────────────────────────────

  #[derive(Default)]
  struct MemStore {
    suggestions: StdMutex<Vec<Suggestion>>,
    assignments: StdMutex<Vec<Assignment>>,
    next_id:     AtomicI64,
  }

  impl JarStore for MemStore {
    type Error = std::convert::Infallible;

    async fn add_suggestion(
      &self,
      input: NewSuggestion,
    ) -> Result<Suggestion, Self::Error> {
      let s = Suggestion {
        id:         self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
        name:       input.name,
        submitter:  input.submitter,
        created_at: Utc::now(),
      };
      self.suggestions.lock().unwrap().push(s.clone());
      Ok(s)
    }

    async fn list_suggestions(&self) -> Result<Vec<Suggestion>, Self::Error> {
      let mut all = self.suggestions.lock().unwrap().clone();
      all.reverse();
      Ok(all)
    }

    async fn clear_suggestions(&self) -> Result<(), Self::Error> {
      self.suggestions.lock().unwrap().clear();
      Ok(())
    }

    async fn add_assignment(
      &self,
      input: NewAssignment,
    ) -> Result<Assignment, Self::Error> {
      let a = Assignment {
        id:          self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
        subject:     input.subject,
        chosen_name: input.chosen_name,
        created_at:  Utc::now(),
      };
      self.assignments.lock().unwrap().push(a.clone());
      Ok(a)
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>, Self::Error> {
      let mut all = self.assignments.lock().unwrap().clone();
      all.reverse();
      Ok(all)
    }

    async fn clear_assignments(&self) -> Result<(), Self::Error> {
      self.assignments.lock().unwrap().clear();
      Ok(())
    }
  }

  async fn engine_with(names: &[&str]) -> DrawEngine<MemStore> {
    let store = Arc::new(MemStore::default());
    for n in names {
      store
        .add_suggestion(NewSuggestion::new(n, None).unwrap())
        .await
        .unwrap();
    }
    DrawEngine::new(store)
  }

  #[tokio::test]
  async fn draw_writes_exactly_one_assignment() {
    let engine = engine_with(&["Luna"]).await;

    let a = engine.draw("Charmander", DrawOptions::default()).await.unwrap();
    assert_eq!(a.subject, "Charmander");
    assert_eq!(a.chosen_name, "Luna");

    let recorded = engine.store.list_assignments().await.unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].chosen_name, "Luna");
  }

  #[tokio::test]
  async fn unique_only_never_repeats_until_cleared() {
    let engine = engine_with(&["Luna", "luna", "Blaze"]).await;

    // {"Blaze", "Luna"} is the whole unique pool; after two draws it is dry,
    // and "luna" is covered case-insensitively by whichever casing was drawn.
    let first = engine.draw("Eevee", UNIQUE_COLLAPSED).await.unwrap();
    let second = engine.draw("Mew", UNIQUE_COLLAPSED).await.unwrap();
    assert_ne!(
      first.chosen_name.to_lowercase(),
      second.chosen_name.to_lowercase()
    );

    let err = engine.draw("Ditto", UNIQUE_COLLAPSED).await.unwrap_err();
    assert!(matches!(err, DrawError::EmptyPool));

    // Clearing assignments makes the names eligible again.
    engine.store.clear_assignments().await.unwrap();
    assert!(engine.draw("Ditto", UNIQUE_COLLAPSED).await.is_ok());
  }

  #[tokio::test]
  async fn empty_pool_draw_leaves_stores_unchanged() {
    let engine = engine_with(&[]).await;

    let err = engine.draw("Pikachu", DrawOptions::default()).await.unwrap_err();
    assert!(matches!(err, DrawError::EmptyPool));

    assert!(engine.store.list_suggestions().await.unwrap().is_empty());
    assert!(engine.store.list_assignments().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn blank_subject_is_rejected_before_any_write() {
    let engine = engine_with(&["Luna"]).await;

    let err = engine.draw("   ", DrawOptions::default()).await.unwrap_err();
    assert!(matches!(err, DrawError::Invalid(crate::Error::EmptySubject)));
    assert!(engine.store.list_assignments().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn pool_reports_available_names() {
    let engine = engine_with(&["Luna", "luna", "Blaze"]).await;

    let pool = engine.pool(UNIQUE_COLLAPSED).await.unwrap();
    assert_eq!(pool, names(&["Blaze", "Luna"]));

    engine.draw("Eevee", UNIQUE_COLLAPSED).await.unwrap();
    assert_eq!(engine.pool(UNIQUE_COLLAPSED).await.unwrap().len(), 1);
  }
}
