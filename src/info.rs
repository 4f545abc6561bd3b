//! Information display for measurement groups
//!
//! Implements `Display` for [`MGroup`] as a table with one row per entry,
//! listing its semantic key, single-entry specification, value and
//! standard deviation.

use std::fmt::{self, Display};

use tabled::{builder::Builder, settings::Style};

use crate::mgroup::MGroup;

/// Column headers of the entry table
fn columns() -> Vec<String> {
    ["#", "Entry", "Spec", "Value", "StdDev"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Converts entry `index` of a group into a table record
fn to_record(group: &MGroup, index: usize) -> Result<Vec<String>, fmt::Error> {
    let entry = group.entry(index).map_err(|_| fmt::Error)?;
    let spec = group.spec_at(index).map_err(|_| fmt::Error)?;
    let value = group.get(index).map_err(|_| fmt::Error)?;
    let stddev = group
        .stddev(index)
        .map_err(|_| fmt::Error)?
        .map(|s| s.to_string())
        .unwrap_or("-".to_string());

    Ok(vec![
        index.to_string(),
        entry.to_string(),
        spec,
        value.to_string(),
        stddev,
    ])
}

impl Display for MGroup {
    /// Formats a measurement group as a table
    ///
    /// The header names the group, its kind and its full specification.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = Builder::default();
        entries.push_record(columns());
        for index in 0..self.len() {
            entries.push_record(to_record(self, index)?);
        }
        let mut entries = entries.build();
        entries.with(Style::rounded());

        let mut builder = Builder::default();
        builder.push_record(vec![format!(
            "{} ({}): {}",
            self.id(),
            self.kind(),
            self.full_spec()
        )]);
        builder.push_record(vec![entries.to_string()]);

        let mut table = builder.build();
        table.with(Style::sharp());
        write!(f, "{table}")
    }
}

#[cfg(test)]
mod tests {
    use crate::mgroup::parse_mgroup;

    #[test]
    fn test_display_lists_entries() {
        let mut group = parse_mgroup("g1", "Ala#M0,1");
        group.set(1, 0.25, Some(0.01)).expect("index 1 exists");

        let table = group.to_string();
        assert!(table.contains("g1 (MS): Ala#M0,1"));
        assert!(table.contains("weight=1"));
        assert!(table.contains("Ala#M1"));
        assert!(table.contains("0.25"));
        assert!(table.contains("0.01"));
    }
}
