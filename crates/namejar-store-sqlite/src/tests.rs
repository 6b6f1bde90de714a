//! Integration tests for `SqliteStore` against an in-memory database.

use namejar_core::{
  record::{NewAssignment, NewSuggestion},
  store::JarStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn suggestion(name: &str) -> NewSuggestion {
  NewSuggestion::new(name, Some("Ash")).unwrap()
}

fn assignment(subject: &str, name: &str) -> NewAssignment {
  NewAssignment::new(subject, name).unwrap()
}

// ─── Suggestions ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_suggestion_assigns_id_and_timestamp() {
  let s = store().await;

  let before = chrono::Utc::now();
  let added = s.add_suggestion(suggestion("Sparky")).await.unwrap();
  let after = chrono::Utc::now();

  assert_eq!(added.id, 1);
  assert_eq!(added.name, "Sparky");
  assert_eq!(added.submitter, "Ash");
  assert!(added.created_at >= before && added.created_at <= after);
}

#[tokio::test]
async fn list_suggestions_newest_first() {
  let s = store().await;
  s.add_suggestion(suggestion("Luna")).await.unwrap();
  s.add_suggestion(suggestion("Blaze")).await.unwrap();
  s.add_suggestion(suggestion("Sparky")).await.unwrap();

  let all = s.list_suggestions().await.unwrap();
  assert_eq!(all.len(), 3);

  // Strictly decreasing ids, no loss, no reorder.
  let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
  assert_eq!(ids, vec![3, 2, 1]);
  let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(names, vec!["Sparky", "Blaze", "Luna"]);
}

#[tokio::test]
async fn list_suggestions_empty_store() {
  let s = store().await;
  assert!(s.list_suggestions().await.unwrap().is_empty());
}

#[tokio::test]
async fn timestamps_roundtrip_as_utc() {
  let s = store().await;
  let added = s.add_suggestion(suggestion("Luna")).await.unwrap();

  let listed = s.list_suggestions().await.unwrap();
  assert_eq!(listed[0].created_at, added.created_at);
}

#[tokio::test]
async fn clear_suggestions_truncates_but_ids_keep_advancing() {
  let s = store().await;
  s.add_suggestion(suggestion("Luna")).await.unwrap();
  let last = s.add_suggestion(suggestion("Blaze")).await.unwrap();

  s.clear_suggestions().await.unwrap();
  assert!(s.list_suggestions().await.unwrap().is_empty());

  // AUTOINCREMENT: the sequence survives the clear, so no id is reused.
  let next = s.add_suggestion(suggestion("Sparky")).await.unwrap();
  assert!(next.id > last.id);
}

// ─── Assignments ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_assignments() {
  let s = store().await;

  let a = s
    .add_assignment(assignment("Charmander", "Blaze"))
    .await
    .unwrap();
  assert_eq!(a.id, 1);
  assert_eq!(a.subject, "Charmander");
  assert_eq!(a.chosen_name, "Blaze");

  let all = s.list_assignments().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].chosen_name, "Blaze");
}

#[tokio::test]
async fn list_assignments_newest_first() {
  let s = store().await;
  s.add_assignment(assignment("Eevee", "Luna")).await.unwrap();
  s.add_assignment(assignment("Mew", "Sparky")).await.unwrap();

  let all = s.list_assignments().await.unwrap();
  let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
  assert_eq!(ids, vec![2, 1]);
}

#[tokio::test]
async fn clear_assignments_leaves_suggestions_intact() {
  let s = store().await;
  s.add_suggestion(suggestion("Luna")).await.unwrap();
  s.add_assignment(assignment("Eevee", "Luna")).await.unwrap();

  s.clear_assignments().await.unwrap();

  assert!(s.list_assignments().await.unwrap().is_empty());
  assert_eq!(s.list_suggestions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn ledgers_number_independently() {
  let s = store().await;
  s.add_suggestion(suggestion("Luna")).await.unwrap();
  s.add_suggestion(suggestion("Blaze")).await.unwrap();

  // The assignment ledger starts at 1 regardless of the suggestion ledger.
  let a = s.add_assignment(assignment("Eevee", "Luna")).await.unwrap();
  assert_eq!(a.id, 1);
}

// ─── Names with awkward content ──────────────────────────────────────────────

#[tokio::test]
async fn names_with_quotes_and_unicode_roundtrip() {
  let s = store().await;
  s.add_suggestion(suggestion("Mr. \"Zappy\", Jr.")).await.unwrap();
  s.add_suggestion(suggestion("Éclair")).await.unwrap();

  let all = s.list_suggestions().await.unwrap();
  assert_eq!(all[0].name, "Éclair");
  assert_eq!(all[1].name, "Mr. \"Zappy\", Jr.");
}
