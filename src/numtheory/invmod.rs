//! Modular inverse (`spec.md` §4.G), via the extended Euclidean
//! algorithm.

use super::gcd::exteuclid;
use crate::bigint::BigInt;
use crate::error::MathError;
use std::cmp::Ordering;

/// `a⁻¹ mod m`. Fails with [`MathError::InvalidInput`] if `m <= 0` or if
/// `gcd(a, m) != 1` (the inverse does not exist).
pub fn invmod(a: &BigInt, m: &BigInt) -> Result<BigInt, MathError> {
    if m.is_zero() || m.is_negative() {
        return Err(MathError::InvalidInput);
    }
    if m.is_one() {
        return Ok(BigInt::new());
    }
    let e = exteuclid(a, m)?;
    if e.u3.cmp_digit(1) != Ordering::Equal {
        return Err(MathError::InvalidInput);
    }
    e.u1.modulo(m)
}
