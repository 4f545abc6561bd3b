//! Flux measurement groups

use serde::Serialize;

use crate::mgroup::{
    error::MGroupError,
    group::{GroupData, MGroupKind, MeasurementGroup},
    keys::FluxEntry,
};

/// A single net or exchange flux measurement
///
/// Flux groups are not recognized from text. The caller knows the
/// specification denotes flux values and states whether they are net fluxes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluxGroup {
    #[serde(flatten)]
    data: GroupData,
    netflux: bool,
}

impl FluxGroup {
    pub fn new(id: impl Into<String>, spec: impl Into<String>, netflux: bool) -> Self {
        Self {
            data: GroupData::new(id.into(), spec.into(), 1),
            netflux,
        }
    }

    pub fn is_net(&self) -> bool {
        self.netflux
    }
}

impl MeasurementGroup for FluxGroup {
    /// There is exactly one entry, so the key carries no information
    type Key = ();
    type Entry = FluxEntry;

    fn kind(&self) -> MGroupKind {
        MGroupKind::Flux
    }

    fn data(&self) -> &GroupData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut GroupData {
        &mut self.data
    }

    fn entry(&self, index: usize) -> Result<FluxEntry, MGroupError> {
        self.data.check(index)?;
        Ok(FluxEntry {
            fluxes: self.data.spec().to_string(),
            net: self.netflux,
        })
    }

    fn spec_at(&self, index: usize) -> Result<String, MGroupError> {
        self.data.check(index)?;
        Ok(self.full_spec())
    }

    fn find(&self, _key: &()) -> Result<usize, MGroupError> {
        Ok(0)
    }

    /// The stored spec, prefixed with `net:` or `xch:`
    fn full_spec(&self) -> String {
        let prefix = if self.netflux { "net" } else { "xch" };
        format!("{prefix}:{}", self.data.spec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_and_exchange_prefix() {
        let net = FluxGroup::new("f", "v1 + v2", true);
        assert_eq!(net.full_spec(), "net:v1 + v2");
        assert_eq!(net.spec(), "v1 + v2");
        assert_eq!(net.spec_at(0).as_deref(), Ok("net:v1 + v2"));

        let xch = FluxGroup::new("f", "v3", false);
        assert_eq!(xch.full_spec(), "xch:v3");
        assert!(!xch.is_net());
    }

    #[test]
    fn test_single_entry() {
        let mut group = FluxGroup::new("f", "v1", true);
        assert_eq!(group.len(), 1);
        assert!(matches!(
            group.spec_at(1),
            Err(MGroupError::IndexOutOfRange { index: 1, len: 1 })
        ));

        group.set_by(&(), 12.5, Some(0.5)).expect("flux entry");
        assert_eq!(group.get(0), Ok(12.5));
        assert_eq!(group.get_by(&()), Ok(12.5));
        assert_eq!(group.stddev(0), Ok(Some(0.5)));
        assert_eq!(
            group.entry(0),
            Ok(FluxEntry {
                fluxes: "v1".to_string(),
                net: true
            })
        );
    }
}
