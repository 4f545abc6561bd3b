//! 1H-NMR groups: `metabolite#Pp1,p2,...`, later positions optionally prefixed by `P`

use serde::Serialize;

use crate::mgroup::{
    error::MGroupError,
    group::{GroupData, MGroupKind, MeasurementGroup},
    keys::HNMRKey,
    patterns,
};

/// A 1H-NMR measurement group, one entry per atom position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HNMRGroup {
    #[serde(flatten)]
    data: GroupData,
    metabolite: String,
    positions: Vec<u32>,
}

impl HNMRGroup {
    /// Parses a 1H-NMR specification
    ///
    /// # Errors
    /// * `MGroupError::GrammarMismatch` if `spec` is not a 1H-NMR specification
    /// * `MGroupError::NumberTooLarge` if a position does not fit `u32`
    pub fn new(id: impl Into<String>, spec: impl Into<String>) -> Result<Self, MGroupError> {
        let spec = spec.into();
        let caps = patterns::HNMR
            .captures(&spec)
            .ok_or_else(|| MGroupError::mismatch(MGroupKind::HNMR, &spec))?;

        let metabolite = caps["metabolite"].to_string();
        let positions = caps["positions"]
            .split(',')
            .map(|item| patterns::number(&spec, item.trim_start_matches('P')))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            data: GroupData::new(id.into(), spec, positions.len()),
            metabolite,
            positions,
        })
    }

    pub fn metabolite(&self) -> &str {
        &self.metabolite
    }

    pub fn positions(&self) -> &[u32] {
        &self.positions
    }
}

impl MeasurementGroup for HNMRGroup {
    type Key = HNMRKey;
    type Entry = HNMRKey;

    fn kind(&self) -> MGroupKind {
        MGroupKind::HNMR
    }

    fn data(&self) -> &GroupData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut GroupData {
        &mut self.data
    }

    fn entry(&self, index: usize) -> Result<HNMRKey, MGroupError> {
        Ok(HNMRKey {
            pos: self.positions[self.data.check(index)?],
        })
    }

    fn spec_at(&self, index: usize) -> Result<String, MGroupError> {
        let pos = self.positions[self.data.check(index)?];
        Ok(format!("{}#P{pos}", self.metabolite))
    }

    fn find(&self, key: &HNMRKey) -> Result<usize, MGroupError> {
        self.positions
            .iter()
            .position(|p| *p == key.pos)
            .ok_or_else(|| MGroupError::KeyNotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_position_prefix() {
        let group = HNMRGroup::new("h", "Ala#P2,P3,5").expect("valid 1H-NMR spec");
        assert_eq!(group.metabolite(), "Ala");
        assert_eq!(group.positions(), &[2, 3, 5]);
        assert_eq!(group.spec_at(1).as_deref(), Ok("Ala#P3"));
    }

    #[test]
    fn test_rejects_other_grammars() {
        for spec in ["Ala#2,3", "Ala#PP2", "Ala#P", "Ala#P2,", "Ala#S2"] {
            assert!(HNMRGroup::new("h", spec).is_err(), "{spec}");
        }
    }

    #[test]
    fn test_position_beyond_u32() {
        assert!(matches!(
            HNMRGroup::new("h", "Ala#P1,P4294967296"),
            Err(MGroupError::NumberTooLarge { .. })
        ));
    }

    #[test]
    fn test_get_set_by_position() {
        let mut group = HNMRGroup::new("h", "Ala#P2,3").expect("valid 1H-NMR spec");
        group
            .set_by(&HNMRKey { pos: 3 }, 0.7, Some(0.02))
            .expect("position 3 exists");
        assert_eq!(group.get(1), Ok(0.7));
        assert_eq!(group.stddevs(), &[None, Some(0.02)]);
        assert!(group.get_by(&HNMRKey { pos: 4 }).is_err());
    }
}
