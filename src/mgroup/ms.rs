//! Mass spectrometry groups: `metabolite[atomrange]#Mw1,w2,...`

use serde::Serialize;

use crate::mgroup::{
    error::MGroupError,
    group::{GroupData, MGroupKind, MeasurementGroup},
    keys::MSKey,
    patterns,
};

/// A mass spectrometry measurement group
///
/// One entry per listed mass weight, in the order of the specification.
///
/// # Example
/// ```ignore
/// let group = MSGroup::new("g1", "Ala[1-2,4]#M0,1,2")?;
/// assert_eq!(group.weights(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MSGroup {
    #[serde(flatten)]
    data: GroupData,
    metabolite: String,
    atom_range: Option<String>,
    weights: Vec<u32>,
}

impl MSGroup {
    /// Parses an MS specification
    ///
    /// # Errors
    /// * `MGroupError::GrammarMismatch` if `spec` is not an MS specification
    /// * `MGroupError::NumberTooLarge` if a weight does not fit `u32`
    pub fn new(id: impl Into<String>, spec: impl Into<String>) -> Result<Self, MGroupError> {
        let spec = spec.into();
        let caps = patterns::MS
            .captures(&spec)
            .ok_or_else(|| MGroupError::mismatch(MGroupKind::MS, &spec))?;

        let metabolite = caps["metabolite"].to_string();
        let atom_range = caps.name("range").map(|m| m.as_str().to_string());
        let weights = patterns::numbers(&spec, &caps["weights"])?;

        Ok(Self {
            data: GroupData::new(id.into(), spec, weights.len()),
            metabolite,
            atom_range,
            weights,
        })
    }

    pub fn metabolite(&self) -> &str {
        &self.metabolite
    }

    /// The bracketed atom range, verbatim
    pub fn atom_range(&self) -> Option<&str> {
        self.atom_range.as_deref()
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights
    }
}

impl MeasurementGroup for MSGroup {
    type Key = MSKey;
    type Entry = MSKey;

    fn kind(&self) -> MGroupKind {
        MGroupKind::MS
    }

    fn data(&self) -> &GroupData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut GroupData {
        &mut self.data
    }

    fn entry(&self, index: usize) -> Result<MSKey, MGroupError> {
        let index = self.data.check(index)?;
        Ok(MSKey {
            weight: self.weights[index],
        })
    }

    fn spec_at(&self, index: usize) -> Result<String, MGroupError> {
        let index = self.data.check(index)?;
        let range = self
            .atom_range
            .as_ref()
            .map(|r| format!("[{r}]"))
            .unwrap_or_default();
        Ok(format!(
            "{}{}#M{}",
            self.metabolite, range, self.weights[index]
        ))
    }

    fn find(&self, key: &MSKey) -> Result<usize, MGroupError> {
        self.weights
            .iter()
            .position(|w| *w == key.weight)
            .ok_or_else(|| MGroupError::KeyNotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_atom_range() {
        let group = MSGroup::new("g1", "Ala[1-2,4]#M0,1,2").expect("valid MS spec");
        assert_eq!(group.len(), 3);
        assert_eq!(group.metabolite(), "Ala");
        assert_eq!(group.atom_range(), Some("1-2,4"));
        assert_eq!(group.weights(), &[0, 1, 2]);
        assert_eq!(group.values(), &[0.0, 0.0, 0.0]);
        assert_eq!(group.stddevs(), &[None, None, None]);
    }

    #[test]
    fn test_parse_without_atom_range() {
        let group = MSGroup::new("g1", "Glu#M3").expect("valid MS spec");
        assert_eq!(group.atom_range(), None);
        assert_eq!(group.entry(0), Ok(MSKey { weight: 3 }));
        assert_eq!(group.spec_at(0).as_deref(), Ok("Glu#M3"));
    }

    #[test]
    fn test_rejects_other_grammars() {
        for spec in [
            "Glc#M(0,1),(1,2)",
            "Ala#P1",
            "Ala[1-2]#M",
            "Ala[]#M0",
            "Ala#M0,",
            "Ala#M0 trailing",
            "1Ala#M0",
        ] {
            assert!(
                matches!(
                    MSGroup::new("g", spec),
                    Err(MGroupError::GrammarMismatch { kind: MGroupKind::MS, .. })
                ),
                "{spec} should not parse as MS"
            );
        }
    }

    #[test]
    fn test_weight_beyond_u32() {
        assert_eq!(
            MSGroup::new("g", "Ala#M4294967295").map(|g| g.weights().to_vec()),
            Ok(vec![u32::MAX])
        );
        assert!(matches!(
            MSGroup::new("g", "Ala#M0,4294967296"),
            Err(MGroupError::NumberTooLarge { number, .. }) if number == "4294967296"
        ));
    }

    #[test]
    fn test_spec_at_keeps_atom_range() {
        let group = MSGroup::new("g1", "Ala[1-2,4]#M0,1,2").expect("valid MS spec");
        assert_eq!(group.spec_at(2).as_deref(), Ok("Ala[1-2,4]#M2"));
        assert_eq!(group.full_spec(), "Ala[1-2,4]#M0,1,2");
        assert!(matches!(
            group.spec_at(3),
            Err(MGroupError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_get_set_by_weight() {
        let mut group = MSGroup::new("g1", "Ala#M0,1,2").expect("valid MS spec");
        group
            .set_by(&MSKey { weight: 1 }, 0.25, Some(0.01))
            .expect("weight 1 exists");
        assert_eq!(group.get_by(&MSKey { weight: 1 }), Ok(0.25));
        assert_eq!(group.get(1), Ok(0.25));
        assert_eq!(group.stddev(1), Ok(Some(0.01)));
        assert_eq!(group.stddev(0), Ok(None));

        group.set(1, 0.5, None).expect("index 1 exists");
        assert_eq!(group.stddev(1), Ok(Some(0.01)));

        assert!(matches!(
            group.get_by(&MSKey { weight: 7 }),
            Err(MGroupError::KeyNotFound(_))
        ));
    }
}
