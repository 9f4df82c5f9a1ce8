//! Submission entity

use crate::record::Record;
use serde::{Deserialize, Serialize};

/// One contact-form entry.
///
/// All three fields are free text. A field missing from a request payload
/// deserializes to the empty string rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl Submission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Build a submission from a normalized row. Absent columns become the
    /// empty string.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.get("name").unwrap_or_default().to_string(),
            email: record.get("email").unwrap_or_default().to_string(),
            message: record.get("message").unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::zip_rows;

    #[test]
    fn test_missing_payload_fields_default_to_empty() {
        let submission: Submission =
            serde_json::from_str(r#"{"name": "Ann", "message": "hi"}"#).unwrap();
        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "");
        assert_eq!(submission.message, "hi");
    }

    #[test]
    fn test_empty_payload_is_accepted() {
        let submission: Submission = serde_json::from_str("{}").unwrap();
        assert_eq!(submission, Submission::default());
    }

    #[test]
    fn test_from_record_full_row() {
        let columns: Vec<String> = ["name", "email", "message"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let records = zip_rows(
            &columns,
            vec![vec!["Bob".into(), "bob@x.com".into(), "Hello".into()]],
        );
        assert_eq!(
            Submission::from_record(&records[0]),
            Submission::new("Bob", "bob@x.com", "Hello")
        );
    }

    #[test]
    fn test_from_record_with_missing_columns() {
        let records = zip_rows(&["name".to_string()], vec![vec!["Bob".to_string()]]);
        let submission = Submission::from_record(&records[0]);
        assert_eq!(submission.name, "Bob");
        assert_eq!(submission.email, "");
        assert_eq!(submission.message, "");
    }
}
