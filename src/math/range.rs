//! Conversion between atom masks and compact range notation.
//!
//! Positions are 1-based and ranges inclusive: `[T, T, T, F, T]` <-> `"1-3,5"`.

use itertools::Itertools;

use crate::math::error::MathError;

/// Largest atom count a mask may have
pub const MAX_ATOMS: usize = 1 << 16;

/// Converts a boolean mask into a range string
///
/// # Example
/// ```ignore
/// assert_eq!(mask_to_range(&[true, true, true, false, true]), "1-3,5");
/// ```
pub fn mask_to_range(mask: &[bool]) -> String {
    let mut ranges = Vec::new();
    let mut i = 0;
    while i < mask.len() {
        if !mask[i] {
            i += 1;
            continue;
        }
        let run = mask[i..].iter().take_while(|set| **set).count();
        let (lo, hi) = (i + 1, i + run);
        ranges.push(if lo == hi {
            format!("{lo}")
        } else {
            format!("{lo}-{hi}")
        });
        i += run;
    }
    ranges.into_iter().join(",")
}

/// Converts a range string into a boolean mask
///
/// The empty string denotes the empty set. Overlapping ranges are allowed.
///
/// # Arguments
/// * `spec` - Comma separated positions or `lo-hi` spans, counted from 1
/// * `atoms` - Length of the mask; defaults to the highest referenced position
///
/// # Errors
/// * `MathError::InvalidRange` if an item is not a number or span, a span is
///   reversed, a position is 0, or a position exceeds `atoms`
/// * `MathError::InvalidRange` if the mask would be longer than [`MAX_ATOMS`]
pub fn range_to_mask(spec: &str, atoms: Option<usize>) -> Result<Vec<bool>, MathError> {
    let invalid = |reason: String| MathError::InvalidRange {
        spec: spec.to_string(),
        reason,
    };

    let mut spans = Vec::new();
    if !spec.trim().is_empty() {
        for item in spec.split(',') {
            let (lo, hi) = match item.split_once('-') {
                Some((lo, hi)) => (lo, hi),
                None => (item, item),
            };
            let parse = |s: &str| {
                s.trim()
                    .parse::<usize>()
                    .map_err(|_| invalid(format!("'{item}' is not a position or span")))
            };
            let (lo, hi) = (parse(lo)?, parse(hi)?);
            if lo == 0 {
                return Err(invalid("positions are counted from 1".to_string()));
            }
            if lo > hi {
                return Err(invalid(format!("span '{item}' is reversed")));
            }
            spans.push((lo, hi));
        }
    }

    let highest = spans.iter().map(|(_, hi)| *hi).max().unwrap_or(0);
    let atoms = atoms.unwrap_or(highest);
    if atoms.max(highest) > MAX_ATOMS {
        return Err(invalid(format!("a mask is limited to {MAX_ATOMS} atoms")));
    }
    if highest > atoms {
        return Err(invalid(format!(
            "position {highest} exceeds the {atoms} atoms of the mask"
        )));
    }

    let mut mask = vec![false; atoms];
    for (lo, hi) in spans {
        mask[lo - 1..hi].iter_mut().for_each(|set| *set = true);
    }
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mask_to_range() {
        assert_eq!(mask_to_range(&[true, true, true, false, true]), "1-3,5");
        assert_eq!(mask_to_range(&[false, true, false, true, true]), "2,4-5");
        assert_eq!(mask_to_range(&[false, false]), "");
        assert_eq!(mask_to_range(&[]), "");
    }

    #[test]
    fn test_range_to_mask() {
        assert_eq!(
            range_to_mask("1-3,5", None),
            Ok(vec![true, true, true, false, true])
        );
        assert_eq!(
            range_to_mask("2", Some(4)),
            Ok(vec![false, true, false, false])
        );
        assert_eq!(range_to_mask("1-2,2-3", None), Ok(vec![true; 3]));
        assert_eq!(range_to_mask("", Some(2)), Ok(vec![false, false]));
        assert_eq!(range_to_mask("", None), Ok(vec![]));
    }

    #[test]
    fn test_range_to_mask_rejects_malformed() {
        for (spec, atoms) in [
            ("0", None),
            ("3-1", None),
            ("a", None),
            ("1,,2", None),
            ("1-2-3", None),
            ("5", Some(4)),
        ] {
            assert!(
                matches!(
                    range_to_mask(spec, atoms),
                    Err(MathError::InvalidRange { .. })
                ),
                "{spec}"
            );
        }
    }

    #[test]
    fn test_range_to_mask_bounds_length() {
        assert_eq!(
            range_to_mask(&MAX_ATOMS.to_string(), None).map(|mask| mask.len()),
            Ok(MAX_ATOMS)
        );
        for (spec, atoms) in [
            ("1000000000000", None),
            ("1-1000000000000", None),
            ("1", Some(MAX_ATOMS + 1)),
        ] {
            assert!(
                matches!(
                    range_to_mask(spec, atoms),
                    Err(MathError::InvalidRange { .. })
                ),
                "{spec}"
            );
        }
    }

    #[test]
    fn test_round_trip() {
        let masks: [&[bool]; 4] = [
            &[true],
            &[false, false, false],
            &[true, false, true, true, false, false, true],
            &[false, true, true, true],
        ];
        for mask in masks {
            let range = mask_to_range(mask);
            assert_eq!(range_to_mask(&range, Some(mask.len())), Ok(mask.to_vec()));
        }
    }
}
