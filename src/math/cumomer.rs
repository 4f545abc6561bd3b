//! Fast isotopomer/cumomer transform.
//!
//! Isotopomer and cumomer fractions of a molecule with `k` labelable atoms
//! are both vectors of length `2^k`, related by a linear transform. The
//! transform below works in place with a butterfly over index pairs counted
//! from the end of the vector. Flipping the direction inverts it exactly.

use std::ops::{AddAssign, SubAssign};

use serde::{Deserialize, Serialize};

use crate::math::{
    error::MathError,
    integer::{is_pwr2, log2},
};

/// Direction of the transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Isotopomer to cumomer space (`d = +1`)
    Forward,
    /// Cumomer to isotopomer space (`d = -1`)
    Inverse,
}

impl Direction {
    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        }
    }

    /// The sign `d` applied in the butterfly step
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Inverse => -1,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = MathError;

    fn try_from(d: i32) -> Result<Self, Self::Error> {
        match d {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Inverse),
            _ => Err(MathError::InvalidInput(format!(
                "transform direction must be 1 or -1, got {d}"
            ))),
        }
    }
}

/// Transforms `v` in place and returns it
///
/// For [`Direction::Forward`] the isotopomer vector `v` is replaced by its
/// cumomer vector, [`Direction::Inverse`] undoes this. Integer element
/// types are transformed exactly.
///
/// # Arguments
/// * `v` - Vector whose length is a power of two
/// * `direction` - Transform direction
///
/// # Errors
/// * `MathError::InvalidInput` if `v.len()` is not a power of two
///
/// # Example
/// ```ignore
/// let mut v = vec![0.1, 0.2, 0.3, 0.4];
/// cumulate(&mut v, Direction::Forward)?;
/// cumulate(&mut v, Direction::Inverse)?;
/// ```
pub fn cumulate<T>(v: &mut [T], direction: Direction) -> Result<&mut [T], MathError>
where
    T: Copy + AddAssign + SubAssign,
{
    let n = v.len();
    if !is_pwr2(n as u64) {
        return Err(MathError::InvalidInput(format!(
            "transform length must be a power of two, got {n}"
        )));
    }

    for level in (1..=log2(n as u64)).rev() {
        let block = 1usize << level;
        let half = block >> 1;
        for start in (0..n).step_by(block) {
            for j in 0..half {
                let s = n - start - j - 1;
                let t = s - half;
                let x = v[s];
                match direction {
                    Direction::Forward => v[t] += x,
                    Direction::Inverse => v[t] -= x,
                }
            }
        }
    }

    Ok(v)
}

/// Shorthand for [`cumulate`] with [`Direction::Forward`]
pub fn to_cumomer<T>(v: &mut [T]) -> Result<&mut [T], MathError>
where
    T: Copy + AddAssign + SubAssign,
{
    cumulate(v, Direction::Forward)
}

/// Shorthand for [`cumulate`] with [`Direction::Inverse`]
pub fn to_isotopomer<T>(v: &mut [T]) -> Result<&mut [T], MathError>
where
    T: Copy + AddAssign + SubAssign,
{
    cumulate(v, Direction::Inverse)
}
