//! Type-erased measurement groups and the grammar dispatcher.

use log::{debug, trace, warn};
use serde::Serialize;

use crate::mgroup::{
    cnmr::CNMRGroup,
    error::MGroupError,
    flux::FluxGroup,
    generic::GenericGroup,
    group::{MGroupKind, MeasurementGroup},
    hnmr::HNMRGroup,
    keys::{MGroupEntry, MGroupKey},
    ms::MSGroup,
    msms::MSMSGroup,
};

/// Any measurement group
///
/// Returned by [`parse_mgroup`]. Forwards the [`MeasurementGroup`] contract,
/// with [`MGroupKey`] and [`MGroupEntry`] at the semantic surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum MGroup {
    MS(MSGroup),
    MSMS(MSMSGroup),
    HNMR(HNMRGroup),
    CNMR(CNMRGroup),
    Generic(GenericGroup),
    Flux(FluxGroup),
}

macro_rules! forward {
    ($group:expr, $g:ident => $body:expr) => {
        match $group {
            MGroup::MS($g) => $body,
            MGroup::MSMS($g) => $body,
            MGroup::HNMR($g) => $body,
            MGroup::CNMR($g) => $body,
            MGroup::Generic($g) => $body,
            MGroup::Flux($g) => $body,
        }
    };
}

type Recognizer = fn(&str, &str) -> Result<MGroup, MGroupError>;

/// Parses a FluxML measurement specification into the matching group
///
/// A specification containing `;` is always a generic group. Otherwise the
/// MS, MS/MS, 1H-NMR and 13C-NMR grammars are tried in this order, and a
/// single-row generic group is the fallback. Dispatch never fails.
///
/// Weights and positions are `u32`. A specification of the right shape with
/// a larger number is logged as a warning and read as a generic row.
///
/// # Arguments
/// * `id` - Identifier of the measurement group
/// * `spec` - The textual specification
///
/// # Example
/// ```ignore
/// let group = parse_mgroup("g1", "Glc#M(0,1),(1,2)");
/// assert_eq!(group.kind(), MGroupKind::MSMS);
/// ```
pub fn parse_mgroup(id: &str, spec: &str) -> MGroup {
    if spec.contains(';') {
        trace!("{id}: '{spec}' contains ';', parsing as generic group");
        return GenericGroup::new(id, spec).into();
    }

    // Recognizers in dispatch priority
    let recognizers: [Recognizer; 4] = [
        |id, spec| MSGroup::new(id, spec).map(MGroup::MS),
        |id, spec| MSMSGroup::new(id, spec).map(MGroup::MSMS),
        |id, spec| HNMRGroup::new(id, spec).map(MGroup::HNMR),
        |id, spec| CNMRGroup::new(id, spec).map(MGroup::CNMR),
    ];

    for recognize in recognizers {
        match recognize(id, spec) {
            Ok(group) => {
                trace!("{id}: '{spec}' recognized as {}", group.kind());
                return group;
            }
            Err(err @ MGroupError::NumberTooLarge { .. }) => warn!("{id}: {err}"),
            Err(err) => debug!("{id}: {err}"),
        }
    }

    debug!("{id}: no grammar matches '{spec}', falling back to generic group");
    GenericGroup::new(id, spec).into()
}

impl MGroup {
    pub fn kind(&self) -> MGroupKind {
        forward!(self, g => g.kind())
    }

    pub fn id(&self) -> &str {
        forward!(self, g => g.id())
    }

    /// The specification as it was supplied on construction
    pub fn spec(&self) -> &str {
        forward!(self, g => g.spec())
    }

    /// The full specification; flux groups carry their `net:`/`xch:` prefix
    pub fn full_spec(&self) -> String {
        forward!(self, g => g.full_spec())
    }

    pub fn spec_at(&self, index: usize) -> Result<String, MGroupError> {
        forward!(self, g => g.spec_at(index))
    }

    pub fn len(&self) -> usize {
        forward!(self, g => g.len())
    }

    pub fn is_empty(&self) -> bool {
        forward!(self, g => g.is_empty())
    }

    pub fn autoscale(&self) -> bool {
        forward!(self, g => g.autoscale())
    }

    pub fn set_autoscale(&mut self, autoscale: bool) {
        forward!(self, g => g.set_autoscale(autoscale))
    }

    pub fn entry(&self, index: usize) -> Result<MGroupEntry, MGroupError> {
        match self {
            MGroup::MS(g) => g.entry(index).map(MGroupEntry::MS),
            MGroup::MSMS(g) => g.entry(index).map(MGroupEntry::MSMS),
            MGroup::HNMR(g) => g.entry(index).map(MGroupEntry::HNMR),
            MGroup::CNMR(g) => g.entry(index).map(MGroupEntry::CNMR),
            MGroup::Generic(g) => g
                .entry(index)
                .map(|rowspec| MGroupEntry::Generic { rowspec }),
            MGroup::Flux(g) => g.entry(index).map(MGroupEntry::Flux),
        }
    }

    /// Resolves a semantic key to a positional index
    ///
    /// # Errors
    /// * `MGroupError::KeyNotFound` if no entry matches, or the key belongs to
    ///   another group kind
    pub fn find(&self, key: &MGroupKey) -> Result<usize, MGroupError> {
        match (self, key) {
            (MGroup::MS(g), MGroupKey::MS(k)) => g.find(k),
            (MGroup::MSMS(g), MGroupKey::MSMS(k)) => g.find(k),
            (MGroup::HNMR(g), MGroupKey::HNMR(k)) => g.find(k),
            (MGroup::CNMR(g), MGroupKey::CNMR(k)) => g.find(k),
            (MGroup::Generic(g), MGroupKey::Generic(k)) => g.find(k),
            (MGroup::Flux(g), MGroupKey::Flux) => g.find(&()),
            (group, key) => Err(MGroupError::KeyNotFound(format!(
                "{key} (not a {} key)",
                group.kind()
            ))),
        }
    }

    pub fn get(&self, index: usize) -> Result<f64, MGroupError> {
        forward!(self, g => g.get(index))
    }

    pub fn get_by(&self, key: &MGroupKey) -> Result<f64, MGroupError> {
        self.get(self.find(key)?)
    }

    pub fn set(&mut self, index: usize, value: f64, stddev: Option<f64>) -> Result<(), MGroupError> {
        forward!(self, g => g.set(index, value, stddev))
    }

    pub fn set_by(
        &mut self,
        key: &MGroupKey,
        value: f64,
        stddev: Option<f64>,
    ) -> Result<(), MGroupError> {
        let index = self.find(key)?;
        self.set(index, value, stddev)
    }

    pub fn stddev(&self, index: usize) -> Result<Option<f64>, MGroupError> {
        forward!(self, g => g.stddev(index))
    }

    pub fn values(&self) -> &[f64] {
        forward!(self, g => g.values())
    }

    pub fn stddevs(&self) -> &[Option<f64>] {
        forward!(self, g => g.stddevs())
    }
}

impl From<MSGroup> for MGroup {
    fn from(group: MSGroup) -> Self {
        MGroup::MS(group)
    }
}

impl From<MSMSGroup> for MGroup {
    fn from(group: MSMSGroup) -> Self {
        MGroup::MSMS(group)
    }
}

impl From<HNMRGroup> for MGroup {
    fn from(group: HNMRGroup) -> Self {
        MGroup::HNMR(group)
    }
}

impl From<CNMRGroup> for MGroup {
    fn from(group: CNMRGroup) -> Self {
        MGroup::CNMR(group)
    }
}

impl From<GenericGroup> for MGroup {
    fn from(group: GenericGroup) -> Self {
        MGroup::Generic(group)
    }
}

impl From<FluxGroup> for MGroup {
    fn from(group: FluxGroup) -> Self {
        MGroup::Flux(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mgroup::keys::{HNMRKey, MSKey, RowKey};

    #[test]
    fn test_dispatch_order() {
        assert_eq!(parse_mgroup("g", "Ala#M0,1").kind(), MGroupKind::MS);
        assert_eq!(parse_mgroup("g", "Ala#M(0,1)").kind(), MGroupKind::MSMS);
        assert_eq!(parse_mgroup("g", "Ala#P1,2").kind(), MGroupKind::HNMR);
        assert_eq!(parse_mgroup("g", "Ala#S1,2").kind(), MGroupKind::CNMR);
        assert_eq!(parse_mgroup("g", "Ala#X1").kind(), MGroupKind::Generic);
        assert_eq!(parse_mgroup("g", "Ala#M0;").kind(), MGroupKind::Generic);
    }

    #[test]
    fn test_oversized_number_falls_back_to_generic() {
        let too_large = |result: Result<MGroup, MGroupError>| {
            matches!(result, Err(MGroupError::NumberTooLarge { .. }))
        };
        assert!(too_large(MSGroup::new("g", "Ala#M4294967296").map(MGroup::MS)));
        assert!(too_large(MSMSGroup::new("g", "Ala#M(0,4294967296)").map(MGroup::MSMS)));
        assert!(too_large(HNMRGroup::new("g", "Ala#P4294967296").map(MGroup::HNMR)));
        assert!(too_large(CNMRGroup::new("g", "Ala#S1,4294967296").map(MGroup::CNMR)));

        for spec in [
            "Ala#M4294967296",
            "Ala#M(0,4294967296)",
            "Ala#P4294967296",
            "Ala#S1,4294967296",
        ] {
            let group = parse_mgroup("g", spec);
            assert_eq!(group.kind(), MGroupKind::Generic, "{spec}");
            assert_eq!(group.spec_at(0).as_deref(), Ok(spec));
        }
    }

    #[test]
    fn test_key_of_other_kind_is_not_found() {
        let mut group = parse_mgroup("g", "Ala#M0,1");
        let key = MGroupKey::from(HNMRKey { pos: 0 });
        assert!(matches!(
            group.get_by(&key),
            Err(MGroupError::KeyNotFound(_))
        ));
        assert!(group.set_by(&MGroupKey::Flux, 1.0, None).is_err());
        assert!(group
            .set_by(&MSKey { weight: 1 }.into(), 1.0, None)
            .is_ok());
    }

    #[test]
    fn test_flux_through_enum() {
        let mut group = MGroup::from(FluxGroup::new("f", "v1", false));
        assert_eq!(group.full_spec(), "xch:v1");
        group.set_by(&MGroupKey::Flux, 3.0, None).expect("flux key");
        assert_eq!(group.values(), &[3.0]);
        assert!(group.get_by(&RowKey { row: 1 }.into()).is_err());
    }

    #[test]
    fn test_autoscale_flag() {
        let mut group = parse_mgroup("g", "Ala#P1");
        assert!(group.autoscale());
        group.set_autoscale(false);
        assert!(!group.autoscale());
    }
}
