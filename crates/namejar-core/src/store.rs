//! The `JarStore` trait — the abstraction over storage backends.
//!
//! The trait is implemented by storage backends (e.g. `namejar-store-sqlite`).
//! Higher layers (`namejar-api`, the draw engine) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::record::{Assignment, NewAssignment, NewSuggestion, Suggestion};

/// Abstraction over a Name Jar storage backend.
///
/// Both ledgers are append-only: records are never updated or individually
/// deleted. The only destructive operation is a bulk clear of an entire
/// ledger, and gating that behind the admin secret is the caller's job — the
/// store trusts its caller.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait JarStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Suggestions ───────────────────────────────────────────────────────

  /// Append a suggestion and return it with store-assigned `id` and
  /// `created_at`.
  fn add_suggestion(
    &self,
    input: NewSuggestion,
  ) -> impl Future<Output = Result<Suggestion, Self::Error>> + Send + '_;

  /// All suggestions, newest first (strictly decreasing `id`).
  fn list_suggestions(
    &self,
  ) -> impl Future<Output = Result<Vec<Suggestion>, Self::Error>> + Send + '_;

  /// Truncate the suggestion ledger. Ids are not reused afterwards.
  fn clear_suggestions(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Assignments ───────────────────────────────────────────────────────

  /// Append an assignment and return it with store-assigned `id` and
  /// `created_at`. This write is what makes a name ineligible for future
  /// unique-only draws.
  fn add_assignment(
    &self,
    input: NewAssignment,
  ) -> impl Future<Output = Result<Assignment, Self::Error>> + Send + '_;

  /// All assignments, newest first (strictly decreasing `id`).
  fn list_assignments(
    &self,
  ) -> impl Future<Output = Result<Vec<Assignment>, Self::Error>> + Send + '_;

  /// Truncate the assignment ledger. Ids are not reused afterwards.
  fn clear_assignments(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
