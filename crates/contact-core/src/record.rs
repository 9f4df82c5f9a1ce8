//! Row normalization
//!
//! Both storage engines hand their fetched rows through here, so the rest
//! of the service sees one shape no matter which driver produced them.

/// One row as ordered `(column name, value)` pairs.
///
/// Entry order follows the column-name list the row was zipped against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record(Vec<(String, String)>);

impl Record {
    /// Value of the named column, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Column names in entry order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

/// Zip a column-name list against positional row values.
///
/// Every row yields one record with one entry per column name, in
/// column-list order.
pub fn zip_rows(columns: &[String], rows: Vec<Vec<String>>) -> Vec<Record> {
    rows.into_iter()
        .map(|values| Record(columns.iter().cloned().zip(values).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_zip_shape_and_order() {
        let records = zip_rows(
            &columns(&["name", "email", "message"]),
            vec![
                vec!["Bob".into(), "bob@x.com".into(), "Hello".into()],
                vec!["Ann".into(), "".into(), "hi".into()],
            ],
        );

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.len(), 3);
            assert_eq!(
                record.columns().collect::<Vec<_>>(),
                ["name", "email", "message"]
            );
        }
        assert_eq!(records[0].get("name"), Some("Bob"));
        assert_eq!(records[1].get("email"), Some(""));
    }

    #[test]
    fn test_zip_empty_result_set() {
        assert!(zip_rows(&columns(&["name"]), Vec::new()).is_empty());
    }

    #[test]
    fn test_get_unknown_column() {
        let records = zip_rows(&columns(&["name"]), vec![vec!["Bob".into()]]);
        assert_eq!(records[0].get("id"), None);
    }
}
