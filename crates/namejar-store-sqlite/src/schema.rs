//! SQL schema for the Name Jar SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Both tables use `AUTOINCREMENT` so the id sequence survives a bulk
/// `DELETE FROM` — a cleared ledger keeps counting from its prior
/// high-water mark and never reuses an id.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Suggestions are strictly append-only.
-- The only DELETE ever issued is the admin bulk clear of the whole table.
CREATE TABLE IF NOT EXISTS suggestions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,            -- trimmed, non-empty, <= 50 chars
    submitter  TEXT NOT NULL DEFAULT '', -- '' when not given
    created_at TEXT NOT NULL             -- ISO 8601 UTC; server-assigned
);

-- Assignments bind a chosen name to a subject. Append-only, same clear rule.
CREATE TABLE IF NOT EXISTS assignments (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    subject     TEXT NOT NULL,
    chosen_name TEXT NOT NULL,  -- copied verbatim from a suggestion
    created_at  TEXT NOT NULL
);

PRAGMA user_version = 1;
";
