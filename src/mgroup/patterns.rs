//! Anchored patterns of the measurement grammars.
//!
//! Every group pattern matches a whole specification. Lists are captured as a
//! single group and split afterwards, since a repeated capture group only
//! keeps its last match.

use regex::Regex;

use crate::mgroup::error::MGroupError;

const METABOLITE: &str = r"(?<metabolite>[A-Za-z_][A-Za-z0-9_]*)";
const RANGE: &str = r"[0-9]+(?:-[0-9]+)?(?:,[0-9]+(?:-[0-9]+)?)*";
const MULTIPLET: &str = r"DL|DR|DD|S|T";

lazy_static::lazy_static! {
    /// `Ala[1-2,4]#M0,1,2`
    pub(crate) static ref MS: Regex = Regex::new(&format!(
        r"^{METABOLITE}(?:\[(?<range>{RANGE})\])?#M(?<weights>[0-9]+(?:,[0-9]+)*)$"
    ))
    .unwrap();

    /// `Glc[1-3:2,3]#M(2,1),(3,2)`
    pub(crate) static ref MSMS: Regex = Regex::new(&format!(
        r"^{METABOLITE}(?:\[(?<first>{RANGE}):(?<second>{RANGE})\])?#M(?<pairs>\([0-9]+,[0-9]+\)(?:,\([0-9]+,[0-9]+\))*)$"
    ))
    .unwrap();

    /// A single `(w1,w2)` inside the pair list of [`MSMS`]
    pub(crate) static ref WEIGHT_PAIR: Regex = Regex::new(r"\((?<w1>[0-9]+),(?<w2>[0-9]+)\)").unwrap();

    /// `Ala#P2,P3,5`
    pub(crate) static ref HNMR: Regex = Regex::new(&format!(
        r"^{METABOLITE}#P(?<positions>[0-9]+(?:,P?[0-9]+)*)$"
    ))
    .unwrap();

    /// `A#S1,2,DL3,4`
    pub(crate) static ref CNMR: Regex = Regex::new(&format!(
        r"^{METABOLITE}#(?<entries>(?:{MULTIPLET})[0-9]+(?:,(?:{MULTIPLET})?[0-9]+)*)$"
    ))
    .unwrap();

    /// A single item of the entry list of [`CNMR`]
    pub(crate) static ref MULTIPLET_ITEM: Regex = Regex::new(&format!(
        r"^(?<type>{MULTIPLET})?(?<pos>[0-9]+)$"
    ))
    .unwrap();
}

/// Reads a digit run matched by one of the patterns
///
/// # Errors
/// * `MGroupError::NumberTooLarge` if `digits` exceeds `u32::MAX`
pub(crate) fn number(spec: &str, digits: &str) -> Result<u32, MGroupError> {
    digits.parse().map_err(|_| MGroupError::NumberTooLarge {
        spec: spec.to_string(),
        number: digits.to_string(),
    })
}

/// Reads a comma separated list of digit runs
pub(crate) fn numbers(spec: &str, list: &str) -> Result<Vec<u32>, MGroupError> {
    list.split(',').map(|item| number(spec, item)).collect()
}
