//! Small integer helpers used around the isotopomer/cumomer transforms.

use crate::math::error::MathError;

/// Floor of the binary logarithm. `log2(0)` and `log2(1)` are both 0.
pub fn log2(n: u64) -> u32 {
    n.checked_ilog2().unwrap_or(0)
}

/// Returns `true` iff `n` is a power of two
pub fn is_pwr2(n: u64) -> bool {
    n.is_power_of_two()
}

/// Greatest common divisor using the binary (Stein) algorithm
///
/// The result is always non-negative. Zero is divisible by anything, so
/// `gcd(0, v) == |v|` and `gcd(0, 0) == 0`.
pub fn gcd(u: i64, v: i64) -> u64 {
    binary_gcd(u.unsigned_abs(), v.unsigned_abs())
}

fn binary_gcd(mut u: u64, mut v: u64) -> u64 {
    if u == 0 || v == 0 {
        return u | v;
    }

    let shift = (u | v).trailing_zeros();
    u >>= u.trailing_zeros();
    loop {
        v >>= v.trailing_zeros();
        if u > v {
            std::mem::swap(&mut u, &mut v);
        }
        v -= u;
        if v == 0 {
            break;
        }
    }
    u << shift
}

/// Binomial coefficient `n over k`
///
/// Built up as `C(m, i) = C(m-1, i-1) * m / i`, dividing out `gcd(m, i)`
/// first so that every intermediate division is exact.
///
/// # Errors
/// * `MathError::Overflow` if the coefficient does not fit into `u64`
pub fn bin_coeff(n: u64, k: u64) -> Result<u64, MathError> {
    if k > n {
        return Ok(0);
    }
    let k = k.min(n - k);
    let overflow = || MathError::Overflow(format!("binomial coefficient {n} over {k}"));

    let mut c: u64 = 1;
    for i in 1..=k {
        let m = n - k + i;
        let d = binary_gcd(m, i);
        c = (c / (i / d)).checked_mul(m / d).ok_or_else(overflow)?;
    }
    Ok(c)
}
