//! 13C-NMR groups: `metabolite#S1,2,DL3,...`
//!
//! A position without a multiplet type takes the most recently stated type.
//! The first position always carries one.

use serde::Serialize;

use crate::mgroup::{
    error::MGroupError,
    group::{GroupData, MGroupKind, MeasurementGroup},
    keys::{CNMRKey, NMRType},
    patterns,
};

/// A 13C-NMR measurement group, one entry per (multiplet type, position)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CNMRGroup {
    #[serde(flatten)]
    data: GroupData,
    metabolite: String,
    entries: Vec<CNMRKey>,
}

/// Resolves the entry list of a 13C-NMR specification
///
/// The pattern guarantees that the first item states its type.
fn resolve_entries(spec: &str, list: &str) -> Result<Vec<CNMRKey>, MGroupError> {
    let mut current = None;
    let mut entries = Vec::new();
    for item in list.split(',') {
        let caps = patterns::MULTIPLET_ITEM
            .captures(item)
            .ok_or_else(|| MGroupError::mismatch(MGroupKind::CNMR, spec))?;
        if let Some(stated) = caps.name("type") {
            current = stated.as_str().parse::<NMRType>().ok();
        }
        let ty = current.ok_or_else(|| MGroupError::mismatch(MGroupKind::CNMR, spec))?;
        entries.push(CNMRKey {
            ty,
            pos: patterns::number(spec, &caps["pos"])?,
        });
    }
    Ok(entries)
}

impl CNMRGroup {
    /// Parses a 13C-NMR specification
    ///
    /// # Errors
    /// * `MGroupError::GrammarMismatch` if `spec` is not a 13C-NMR specification
    /// * `MGroupError::NumberTooLarge` if a position does not fit `u32`
    pub fn new(id: impl Into<String>, spec: impl Into<String>) -> Result<Self, MGroupError> {
        let spec = spec.into();
        let caps = patterns::CNMR
            .captures(&spec)
            .ok_or_else(|| MGroupError::mismatch(MGroupKind::CNMR, &spec))?;

        let metabolite = caps["metabolite"].to_string();
        let entries = resolve_entries(&spec, &caps["entries"])?;

        Ok(Self {
            data: GroupData::new(id.into(), spec, entries.len()),
            metabolite,
            entries,
        })
    }

    pub fn metabolite(&self) -> &str {
        &self.metabolite
    }

    /// Multiplet types of all entries, after resolving omitted types
    pub fn types(&self) -> impl Iterator<Item = NMRType> + '_ {
        self.entries.iter().map(|e| e.ty)
    }

    pub fn positions(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|e| e.pos)
    }
}

impl MeasurementGroup for CNMRGroup {
    type Key = CNMRKey;
    type Entry = CNMRKey;

    fn kind(&self) -> MGroupKind {
        MGroupKind::CNMR
    }

    fn data(&self) -> &GroupData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut GroupData {
        &mut self.data
    }

    fn entry(&self, index: usize) -> Result<CNMRKey, MGroupError> {
        Ok(self.entries[self.data.check(index)?])
    }

    fn spec_at(&self, index: usize) -> Result<String, MGroupError> {
        let CNMRKey { ty, pos } = self.entries[self.data.check(index)?];
        Ok(format!("{}#{ty}{pos}", self.metabolite))
    }

    fn find(&self, key: &CNMRKey) -> Result<usize, MGroupError> {
        self.entries
            .iter()
            .position(|e| e == key)
            .ok_or_else(|| MGroupError::KeyNotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(ty: NMRType, pos: u32) -> CNMRKey {
        CNMRKey { ty, pos }
    }

    #[test]
    fn test_sticky_type() {
        let group = CNMRGroup::new("c", "A#S1,2,DL3,4").expect("valid 13C-NMR spec");
        let entries: Vec<_> = (0..group.len())
            .map(|i| group.entry(i).expect("index in range"))
            .collect();
        assert_eq!(
            entries,
            vec![
                key(NMRType::S, 1),
                key(NMRType::S, 2),
                key(NMRType::DL, 3),
                key(NMRType::DL, 4),
            ]
        );
    }

    #[test]
    fn test_all_multiplet_types() {
        let group = CNMRGroup::new("c", "Glu#DR1,DD2,T3,S4").expect("valid 13C-NMR spec");
        assert_eq!(
            group.types().collect::<Vec<_>>(),
            vec![NMRType::DR, NMRType::DD, NMRType::T, NMRType::S]
        );
        assert_eq!(group.positions().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(group.spec_at(1).as_deref(), Ok("Glu#DD2"));
    }

    #[test]
    fn test_rejects_other_grammars() {
        for spec in ["A#1,S2", "A#D1", "A#s1", "A#S", "A#S1,", "A#P1", "A#S1,X2"] {
            assert!(CNMRGroup::new("c", spec).is_err(), "{spec}");
        }
    }

    #[test]
    fn test_get_set_by_type_and_position() {
        let mut group = CNMRGroup::new("c", "A#S1,DL1").expect("valid 13C-NMR spec");
        group
            .set_by(&key(NMRType::DL, 1), 0.4, None)
            .expect("DL1 exists");
        assert_eq!(group.get(0), Ok(0.0));
        assert_eq!(group.get(1), Ok(0.4));
        assert!(matches!(
            group.get_by(&key(NMRType::DR, 1)),
            Err(MGroupError::KeyNotFound(_))
        ));
    }
}
