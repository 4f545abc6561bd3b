//! Generic groups: semicolon separated, otherwise unvalidated row specifications

use serde::Serialize;

use crate::mgroup::{
    error::MGroupError,
    group::{GroupData, MGroupKind, MeasurementGroup},
    keys::RowKey,
};

/// A generic measurement group with one entry per row
///
/// Rows are addressed positionally from 0, but by [`RowKey`] from 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericGroup {
    #[serde(flatten)]
    data: GroupData,
    rows: Vec<String>,
}

fn split_rows(spec: &str) -> Vec<String> {
    let body = spec.strip_suffix(';').unwrap_or(spec);
    body.split(';').map(|row| row.trim().to_string()).collect()
}

impl GenericGroup {
    /// Splits `spec` into rows. Never fails.
    ///
    /// Rows are trimmed, and a single terminal `;` does not produce an empty row.
    pub fn new(id: impl Into<String>, spec: impl Into<String>) -> Self {
        let spec = spec.into();
        let rows = split_rows(&spec);

        Self {
            data: GroupData::new(id.into(), spec, rows.len()),
            rows,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl MeasurementGroup for GenericGroup {
    type Key = RowKey;
    type Entry = String;

    fn kind(&self) -> MGroupKind {
        MGroupKind::Generic
    }

    fn data(&self) -> &GroupData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut GroupData {
        &mut self.data
    }

    fn entry(&self, index: usize) -> Result<String, MGroupError> {
        Ok(self.rows[self.data.check(index)?].clone())
    }

    fn spec_at(&self, index: usize) -> Result<String, MGroupError> {
        self.entry(index)
    }

    fn find(&self, key: &RowKey) -> Result<usize, MGroupError> {
        match key.row {
            row @ 1.. if row <= self.rows.len() => Ok(row - 1),
            _ => Err(MGroupError::KeyNotFound(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_and_trim() {
        let group = GenericGroup::new("g", " a#M0 ; b#M1 ;");
        assert_eq!(group.rows(), &["a#M0".to_string(), "b#M1".to_string()]);
        assert_eq!(group.spec(), " a#M0 ; b#M1 ;");
    }

    #[test]
    fn test_only_one_terminal_separator_is_dropped() {
        let group = GenericGroup::new("g", "a;;b;;");
        assert_eq!(
            group.rows(),
            &[
                "a".to_string(),
                String::new(),
                "b".to_string(),
                String::new()
            ]
        );
    }

    #[test]
    fn test_single_row() {
        let group = GenericGroup::new("g", "not a known grammar");
        assert_eq!(group.len(), 1);
        assert_eq!(group.spec_at(0).as_deref(), Ok("not a known grammar"));
    }

    #[test]
    fn test_rows_are_one_based() {
        let mut group = GenericGroup::new("g", "x;y");
        group
            .set_by(&RowKey { row: 1 }, 2.0, Some(0.1))
            .expect("row 1 exists");
        assert_eq!(group.get(0), Ok(2.0));
        assert_eq!(group.get_by(&RowKey { row: 1 }), Ok(2.0));
        assert_eq!(group.stddev(0), Ok(Some(0.1)));

        for row in [0, 3] {
            assert!(matches!(
                group.get_by(&RowKey { row }),
                Err(MGroupError::KeyNotFound(_))
            ));
        }
    }
}
