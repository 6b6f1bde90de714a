//! The export formatter — CSV and JSON rendering of the two ledgers.
//!
//! A pure serialization step over `list_*` output: no aggregation, no
//! filtering, deterministic given identical input ordering. Field names
//! match the wire representation of the record types (`id,name,submitter,
//! createdAt` / `id,subject,chosenName,createdAt`).

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  record::{Assignment, Suggestion},
};

/// Supported export encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
  Csv,
  Json,
}

impl ExportFormat {
  /// MIME type for download responses.
  pub fn content_type(self) -> &'static str {
    match self {
      Self::Csv => "text/csv",
      Self::Json => "application/json",
    }
  }
}

/// Render the suggestion ledger in the requested format.
pub fn export_suggestions(
  rows:   &[Suggestion],
  format: ExportFormat,
) -> Result<String> {
  match format {
    ExportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    ExportFormat::Csv => {
      let mut out = String::from("id,name,submitter,createdAt\n");
      for row in rows {
        out.push_str(&format!(
          "{},{},{},{}\n",
          row.id,
          csv_field(&row.name),
          csv_field(&row.submitter),
          row.created_at.to_rfc3339(),
        ));
      }
      Ok(out)
    }
  }
}

/// Render the assignment ledger in the requested format.
pub fn export_assignments(
  rows:   &[Assignment],
  format: ExportFormat,
) -> Result<String> {
  match format {
    ExportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    ExportFormat::Csv => {
      let mut out = String::from("id,subject,chosenName,createdAt\n");
      for row in rows {
        out.push_str(&format!(
          "{},{},{},{}\n",
          row.id,
          csv_field(&row.subject),
          csv_field(&row.chosen_name),
          row.created_at.to_rfc3339(),
        ));
      }
      Ok(out)
    }
  }
}

/// RFC 4180 quoting: wrap the field in double quotes when it contains a
/// comma, a quote, or a line break; embedded quotes are doubled.
fn csv_field(value: &str) -> Cow<'_, str> {
  if value.contains(['"', ',', '\n', '\r']) {
    Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
  } else {
    Cow::Borrowed(value)
  }
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};

  use super::*;

  fn suggestion(id: i64, name: &str, submitter: &str) -> Suggestion {
    Suggestion {
      id,
      name: name.to_owned(),
      submitter: submitter.to_owned(),
      created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
  }

  #[test]
  fn suggestions_csv_has_header_and_rows() {
    let rows = vec![suggestion(2, "Luna", "Ash"), suggestion(1, "Blaze", "")];
    let csv = export_suggestions(&rows, ExportFormat::Csv).unwrap();
    assert_eq!(
      csv,
      "id,name,submitter,createdAt\n\
       2,Luna,Ash,2024-05-01T12:00:00+00:00\n\
       1,Blaze,,2024-05-01T12:00:00+00:00\n"
    );
  }

  #[test]
  fn csv_quotes_fields_with_commas_and_quotes() {
    let rows = vec![suggestion(1, "Sir \"Sparky\", Esq.", "A,B")];
    let csv = export_suggestions(&rows, ExportFormat::Csv).unwrap();
    assert!(csv.contains("\"Sir \"\"Sparky\"\", Esq.\",\"A,B\""));
  }

  #[test]
  fn suggestions_json_is_indented_with_camel_case_keys() {
    let rows = vec![suggestion(1, "Luna", "Ash")];
    let json = export_suggestions(&rows, ExportFormat::Json).unwrap();

    assert!(json.starts_with("[\n  {"));
    assert!(json.contains("\"createdAt\""));
    assert!(json.contains("\"submitter\": \"Ash\""));

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["name"], "Luna");
  }

  #[test]
  fn assignments_csv_header_matches_field_names() {
    let rows = vec![Assignment {
      id:          1,
      subject:     "Charmander".to_owned(),
      chosen_name: "Blaze".to_owned(),
      created_at:  Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }];
    let csv = export_assignments(&rows, ExportFormat::Csv).unwrap();
    assert!(csv.starts_with("id,subject,chosenName,createdAt\n"));
    assert!(csv.contains("1,Charmander,Blaze,"));
  }

  #[test]
  fn empty_ledgers_export_cleanly() {
    assert_eq!(
      export_suggestions(&[], ExportFormat::Csv).unwrap(),
      "id,name,submitter,createdAt\n"
    );
    assert_eq!(export_assignments(&[], ExportFormat::Json).unwrap(), "[]");
  }

  #[test]
  fn format_parses_from_lowercase() {
    let f: ExportFormat = serde_json::from_str("\"csv\"").unwrap();
    assert_eq!(f, ExportFormat::Csv);
    assert_eq!(f.content_type(), "text/csv");
  }
}
