//! GCD, LCM, and the extended Euclidean algorithm (`spec.md` §4.G).

use crate::bigint::BigInt;
use crate::error::MathError;
use std::cmp::Ordering;

/// Binary GCD: strips common factors of 2, then repeatedly subtracts and
/// halves (`spec.md` §4.G). `gcd(a, 0) == |a|` for any `a`.
pub fn gcd(a: &BigInt, b: &BigInt) -> Result<BigInt, MathError> {
    if a.is_zero() {
        return Ok(b.abs());
    }
    if b.is_zero() {
        return Ok(a.abs());
    }

    let mut u = a.abs();
    let mut v = b.abs();
    let shift = u.lsb_zeros().min(v.lsb_zeros()) as u32;
    u = u.shift_right_bits(u.lsb_zeros() as u32)?;

    loop {
        v = v.shift_right_bits(v.lsb_zeros() as u32)?;
        if u.cmp_mag(&v) == Ordering::Greater {
            std::mem::swap(&mut u, &mut v);
        }
        v = v.sub_mag(&u)?;
        if v.is_zero() {
            break;
        }
    }

    u.shift_left_bits(shift)
}

/// `|a·b| / gcd(a, b)`. Zero if either operand is zero.
pub fn lcm(a: &BigInt, b: &BigInt) -> Result<BigInt, MathError> {
    if a.is_zero() || b.is_zero() {
        return Ok(BigInt::new());
    }
    let g = gcd(a, b)?;
    let prod = a.mul(b)?.abs();
    prod.div(&g)
}

/// Result of the extended Euclidean algorithm: `u1·a + u2·b == u3 ==
/// gcd(a, b)`.
pub struct ExtEuclid {
    pub u1: BigInt,
    pub u2: BigInt,
    pub u3: BigInt,
}

/// Iterative extended Euclidean algorithm (`spec.md` §4.G).
pub fn exteuclid(a: &BigInt, b: &BigInt) -> Result<ExtEuclid, MathError> {
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_s = BigInt::from_u64(1);
    let mut s = BigInt::new();
    let mut old_t = BigInt::new();
    let mut t = BigInt::from_u64(1);

    while !r.is_zero() {
        let q = old_r.div(&r)?;

        let new_r = old_r.sub(&q.mul(&r)?)?;
        old_r = std::mem::replace(&mut r, new_r);

        let new_s = old_s.sub(&q.mul(&s)?)?;
        old_s = std::mem::replace(&mut s, new_s);

        let new_t = old_t.sub(&q.mul(&t)?)?;
        old_t = std::mem::replace(&mut t, new_t);
    }

    // old_r tracks sign(a) through the loop; gcd is non-negative by
    // definition (spec.md §4.G), so flip the whole Bezout triple if needed.
    if old_r.is_negative() {
        old_r = old_r.neg();
        old_s = old_s.neg();
        old_t = old_t.neg();
    }

    Ok(ExtEuclid { u1: old_s, u2: old_t, u3: old_r })
}
