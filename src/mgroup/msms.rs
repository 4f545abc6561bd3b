//! Tandem mass spectrometry groups: `metabolite[range1:range2]#M(w1,w2),(w3,w4),...`

use serde::Serialize;

use crate::mgroup::{
    error::MGroupError,
    group::{GroupData, MGroupKind, MeasurementGroup},
    keys::MSMSKey,
    patterns,
};

/// An MS/MS measurement group, one entry per weight pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MSMSGroup {
    #[serde(flatten)]
    data: GroupData,
    metabolite: String,
    atom_ranges: Option<(String, String)>,
    weights: Vec<(u32, u32)>,
}

impl MSMSGroup {
    /// Parses an MS/MS specification
    ///
    /// # Errors
    /// * `MGroupError::GrammarMismatch` if `spec` is not an MS/MS specification
    /// * `MGroupError::NumberTooLarge` if a weight does not fit `u32`
    pub fn new(id: impl Into<String>, spec: impl Into<String>) -> Result<Self, MGroupError> {
        let spec = spec.into();
        let caps = patterns::MSMS
            .captures(&spec)
            .ok_or_else(|| MGroupError::mismatch(MGroupKind::MSMS, &spec))?;

        let metabolite = caps["metabolite"].to_string();
        let atom_ranges = caps
            .name("first")
            .zip(caps.name("second"))
            .map(|(a, b)| (a.as_str().to_string(), b.as_str().to_string()));
        let weights = patterns::WEIGHT_PAIR
            .captures_iter(&caps["pairs"])
            .map(|pair| {
                Ok((
                    patterns::number(&spec, &pair["w1"])?,
                    patterns::number(&spec, &pair["w2"])?,
                ))
            })
            .collect::<Result<Vec<_>, MGroupError>>()?;

        Ok(Self {
            data: GroupData::new(id.into(), spec, weights.len()),
            metabolite,
            atom_ranges,
            weights,
        })
    }

    pub fn metabolite(&self) -> &str {
        &self.metabolite
    }

    /// Atom ranges of the precursor and product fragment
    pub fn atom_ranges(&self) -> Option<(&str, &str)> {
        self.atom_ranges
            .as_ref()
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    pub fn weights(&self) -> &[(u32, u32)] {
        &self.weights
    }
}

impl MeasurementGroup for MSMSGroup {
    type Key = MSMSKey;
    type Entry = MSMSKey;

    fn kind(&self) -> MGroupKind {
        MGroupKind::MSMS
    }

    fn data(&self) -> &GroupData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut GroupData {
        &mut self.data
    }

    fn entry(&self, index: usize) -> Result<MSMSKey, MGroupError> {
        let (weight1, weight2) = self.weights[self.data.check(index)?];
        Ok(MSMSKey { weight1, weight2 })
    }

    fn spec_at(&self, index: usize) -> Result<String, MGroupError> {
        let (w1, w2) = self.weights[self.data.check(index)?];
        let range = self
            .atom_ranges
            .as_ref()
            .map(|(a, b)| format!("[{a}:{b}]"))
            .unwrap_or_default();
        Ok(format!("{}{range}#M({w1},{w2})", self.metabolite))
    }

    fn find(&self, key: &MSMSKey) -> Result<usize, MGroupError> {
        self.weights
            .iter()
            .position(|&(w1, w2)| w1 == key.weight1 && w2 == key.weight2)
            .ok_or_else(|| MGroupError::KeyNotFound(key.to_string()))
    }
}
