//! Shared storage and the uniform access contract of all measurement groups.

use std::fmt;

use serde::Serialize;

use crate::mgroup::error::MGroupError;

/// Grammar variant of a measurement group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MGroupKind {
    /// Mass spectrometry
    MS,
    /// Tandem mass spectrometry
    MSMS,
    /// Proton NMR
    HNMR,
    /// Carbon-13 NMR
    CNMR,
    /// Row based, unvalidated specification
    Generic,
    /// Net or exchange flux value
    Flux,
}

impl fmt::Display for MGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MGroupKind::MS => "MS",
            MGroupKind::MSMS => "MS-MS",
            MGroupKind::HNMR => "1H-NMR",
            MGroupKind::CNMR => "13C-NMR",
            MGroupKind::Generic => "generic",
            MGroupKind::Flux => "flux",
        };
        f.write_str(name)
    }
}

/// Identity, specification and per-entry values of a measurement group
///
/// The number of entries is fixed on construction. Values start at `0.0`,
/// standard deviations start absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupData {
    id: String,
    spec: String,
    autoscale: bool,
    values: Vec<f64>,
    stddev: Vec<Option<f64>>,
}

impl GroupData {
    pub(crate) fn new(id: String, spec: String, len: usize) -> Self {
        Self {
            id,
            spec,
            autoscale: true,
            values: vec![0.0; len],
            stddev: vec![None; len],
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn spec(&self) -> &str {
        &self.spec
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Validates a positional index
    pub(crate) fn check(&self, index: usize) -> Result<usize, MGroupError> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(MGroupError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

/// Uniform access contract shared by all measurement group variants
///
/// Implementors provide the variant specific parts (entry metadata,
/// entry specs and key lookup); value and uncertainty access is provided.
pub trait MeasurementGroup {
    /// Semantic key used by [`MeasurementGroup::get_by`] and [`MeasurementGroup::set_by`]
    type Key;
    /// Metadata returned for a single entry
    type Entry;

    /// The grammar variant of this group
    fn kind(&self) -> MGroupKind;

    fn data(&self) -> &GroupData;

    fn data_mut(&mut self) -> &mut GroupData;

    /// Returns the semantic description of entry `index`
    ///
    /// # Errors
    /// * `MGroupError::IndexOutOfRange` if `index >= len()`
    fn entry(&self, index: usize) -> Result<Self::Entry, MGroupError>;

    /// Reconstructs the canonical single-entry specification of entry `index`
    ///
    /// Parsing the returned string with the same recognizer yields a group
    /// with one entry whose key equals the key of entry `index`.
    ///
    /// # Errors
    /// * `MGroupError::IndexOutOfRange` if `index >= len()`
    fn spec_at(&self, index: usize) -> Result<String, MGroupError>;

    /// Finds the position of the entry matching `key`
    ///
    /// # Errors
    /// * `MGroupError::KeyNotFound` if no entry matches
    fn find(&self, key: &Self::Key) -> Result<usize, MGroupError>;

    /// The full specification of the group
    fn full_spec(&self) -> String {
        self.data().spec().to_string()
    }

    fn id(&self) -> &str {
        self.data().id()
    }

    /// The specification as it was supplied on construction
    fn spec(&self) -> &str {
        self.data().spec()
    }

    fn len(&self) -> usize {
        self.data().len()
    }

    fn is_empty(&self) -> bool {
        self.data().is_empty()
    }

    fn autoscale(&self) -> bool {
        self.data().autoscale
    }

    fn set_autoscale(&mut self, autoscale: bool) {
        self.data_mut().autoscale = autoscale;
    }

    /// Returns the value of entry `index`
    fn get(&self, index: usize) -> Result<f64, MGroupError> {
        let data = self.data();
        Ok(data.values[data.check(index)?])
    }

    /// Returns the value of the entry matching `key`
    fn get_by(&self, key: &Self::Key) -> Result<f64, MGroupError> {
        self.get(self.find(key)?)
    }

    /// Sets the value of entry `index`
    ///
    /// The standard deviation is only overwritten when `stddev` is `Some`.
    fn set(&mut self, index: usize, value: f64, stddev: Option<f64>) -> Result<(), MGroupError> {
        let data = self.data_mut();
        let index = data.check(index)?;
        data.values[index] = value;
        if stddev.is_some() {
            data.stddev[index] = stddev;
        }
        Ok(())
    }

    /// Sets the value of the entry matching `key`
    fn set_by(
        &mut self,
        key: &Self::Key,
        value: f64,
        stddev: Option<f64>,
    ) -> Result<(), MGroupError> {
        let index = self.find(key)?;
        self.set(index, value, stddev)
    }

    /// Returns the standard deviation of entry `index`, if one was set
    fn stddev(&self, index: usize) -> Result<Option<f64>, MGroupError> {
        let data = self.data();
        Ok(data.stddev[data.check(index)?])
    }

    fn values(&self) -> &[f64] {
        &self.data().values
    }

    fn stddevs(&self) -> &[Option<f64>] {
        &self.data().stddev
    }
}
