//! Semantic keys for non-positional access to measurement group entries.
//!
//! Each grammar has its own key type. [`MGroupKey`] and [`MGroupEntry`] wrap
//! them for callers that work with the type-erased [`MGroup`](crate::mgroup::MGroup).

use std::{fmt, str::FromStr};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::mgroup::error::MGroupError;

lazy_static::lazy_static! {
    static ref WEIGHT_PAIR: Regex = Regex::new(r"^\s*(\d+)\s*,\s*(\d+)\s*$").unwrap();
}

/// Multiplet type of a 13C-NMR measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NMRType {
    /// Singlet
    S,
    /// Doublet, left neighbour labeled
    DL,
    /// Doublet, right neighbour labeled
    DR,
    /// Double doublet
    DD,
    /// Triplet
    T,
}

impl NMRType {
    const TOKENS: [(&'static str, NMRType); 5] = [
        ("DL", NMRType::DL),
        ("DR", NMRType::DR),
        ("DD", NMRType::DD),
        ("S", NMRType::S),
        ("T", NMRType::T),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NMRType::S => "S",
            NMRType::DL => "DL",
            NMRType::DR => "DR",
            NMRType::DD => "DD",
            NMRType::T => "T",
        }
    }
}

impl fmt::Display for NMRType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NMRType {
    type Err = String;

    /// Parses a case-sensitive multiplet token
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TOKENS
            .iter()
            .find(|(token, _)| *token == s)
            .map(|(_, ty)| *ty)
            .ok_or_else(|| format!("Invalid 13C-NMR multiplet type: {s}"))
    }
}

/// Mass-weight key of an MS group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MSKey {
    pub weight: u32,
}

/// Weight-pair key of an MS/MS group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MSMSKey {
    pub weight1: u32,
    pub weight2: u32,
}

impl FromStr for MSMSKey {
    type Err = MGroupError;

    /// Parses the string form `"w1,w2"`, whitespace around the numbers allowed
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_found = || MGroupError::KeyNotFound(format!("weight={s}"));
        let captures = WEIGHT_PAIR.captures(s).ok_or_else(not_found)?;
        let weight1 = captures[1].parse().map_err(|_| not_found())?;
        let weight2 = captures[2].parse().map_err(|_| not_found())?;

        Ok(MSMSKey { weight1, weight2 })
    }
}

/// Atom position key of a 1H-NMR group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HNMRKey {
    pub pos: u32,
}

/// Multiplet type and position key of a 13C-NMR group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CNMRKey {
    #[serde(rename = "type")]
    pub ty: NMRType,
    pub pos: u32,
}

/// Row key of a generic group. Rows are counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowKey {
    pub row: usize,
}

/// Description of the single entry of a flux group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluxEntry {
    pub fluxes: String,
    pub net: bool,
}

impl fmt::Display for MSKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weight={}", self.weight)
    }
}

impl fmt::Display for MSMSKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weight={},{}", self.weight1, self.weight2)
    }
}

impl fmt::Display for HNMRKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pos={}", self.pos)
    }
}

impl fmt::Display for CNMRKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type={},pos={}", self.ty, self.pos)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row={}", self.row)
    }
}

impl fmt::Display for FluxEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.net { "net" } else { "xch" };
        write!(f, "{prefix}:{}", self.fluxes)
    }
}

/// Semantic key accepted by [`MGroup::get_by`](crate::mgroup::MGroup::get_by)
/// and [`MGroup::set_by`](crate::mgroup::MGroup::set_by)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MGroupKey {
    MS(MSKey),
    MSMS(MSMSKey),
    HNMR(HNMRKey),
    CNMR(CNMRKey),
    Generic(RowKey),
    Flux,
}

impl fmt::Display for MGroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MGroupKey::MS(key) => fmt::Display::fmt(key, f),
            MGroupKey::MSMS(key) => fmt::Display::fmt(key, f),
            MGroupKey::HNMR(key) => fmt::Display::fmt(key, f),
            MGroupKey::CNMR(key) => fmt::Display::fmt(key, f),
            MGroupKey::Generic(key) => fmt::Display::fmt(key, f),
            MGroupKey::Flux => f.write_str("flux"),
        }
    }
}

impl From<MSKey> for MGroupKey {
    fn from(key: MSKey) -> Self {
        MGroupKey::MS(key)
    }
}

impl From<MSMSKey> for MGroupKey {
    fn from(key: MSMSKey) -> Self {
        MGroupKey::MSMS(key)
    }
}

impl From<HNMRKey> for MGroupKey {
    fn from(key: HNMRKey) -> Self {
        MGroupKey::HNMR(key)
    }
}

impl From<CNMRKey> for MGroupKey {
    fn from(key: CNMRKey) -> Self {
        MGroupKey::CNMR(key)
    }
}

impl From<RowKey> for MGroupKey {
    fn from(key: RowKey) -> Self {
        MGroupKey::Generic(key)
    }
}

/// Metadata of a single entry, as returned by
/// [`MGroup::entry`](crate::mgroup::MGroup::entry)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MGroupEntry {
    MS(MSKey),
    MSMS(MSMSKey),
    HNMR(HNMRKey),
    CNMR(CNMRKey),
    Generic { rowspec: String },
    Flux(FluxEntry),
}

impl fmt::Display for MGroupEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MGroupEntry::MS(key) => fmt::Display::fmt(key, f),
            MGroupEntry::MSMS(key) => fmt::Display::fmt(key, f),
            MGroupEntry::HNMR(key) => fmt::Display::fmt(key, f),
            MGroupEntry::CNMR(key) => fmt::Display::fmt(key, f),
            MGroupEntry::Generic { rowspec } => write!(f, "rowspec={rowspec}"),
            MGroupEntry::Flux(entry) => fmt::Display::fmt(entry, f),
        }
    }
}
