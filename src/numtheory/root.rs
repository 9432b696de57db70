//! Integer n-th root and square root via Newton's method (`spec.md`
//! §4.G).

use crate::bigint::BigInt;
use crate::error::MathError;
use std::cmp::Ordering;

/// Truncated integer n-th root: the largest `c` with `|c|ⁿ <= |a|` (sign
/// of `c` matching `a` when `n` is odd). Fails with
/// [`MathError::InvalidInput`] for an even root of a negative value, or
/// `n == 0`.
pub fn nth_root(a: &BigInt, n: u32) -> Result<BigInt, MathError> {
    if n == 0 {
        return Err(MathError::InvalidInput);
    }
    if a.is_negative() && n % 2 == 0 {
        return Err(MathError::InvalidInput);
    }
    if a.is_zero() {
        return Ok(BigInt::new());
    }
    if n == 1 {
        return Ok(a.clone());
    }

    let negative = a.is_negative();
    let mag = a.abs();

    let bits = mag.bit_count();
    let seed_bits = bits.div_ceil(n as u64).max(1) as u32;
    let mut x = BigInt::from_u64(1).shift_left_bits(seed_bits)?;
    let n_big = BigInt::from_u64(n as u64);
    let n_minus1 = BigInt::from_u64((n - 1) as u64);

    // Newton iteration: x := ((n-1)x + a/x^(n-1)) / n.
    loop {
        let xn1 = pow_unsigned(&x, n - 1)?;
        let div = mag.div(&xn1)?;
        let numerator = n_minus1.mul(&x)?.add(&div)?;
        let next = numerator.div(&n_big)?;
        if next.cmp_mag(&x) != Ordering::Less {
            break;
        }
        x = next;
    }

    // Newton's method can overshoot by one in either direction at
    // convergence; settle onto the exact floor by local search.
    while pow_unsigned(&x, n)?.cmp_mag(&mag) == Ordering::Greater {
        x = x.sub_digit(1)?;
    }
    loop {
        let next = x.add_digit(1)?;
        if pow_unsigned(&next, n)?.cmp_mag(&mag) == Ordering::Greater {
            break;
        }
        x = next;
    }

    if negative && !x.is_zero() {
        x = x.neg();
    }
    Ok(x)
}

/// Truncated integer square root, via a specialized Newton iteration.
/// Fails with [`MathError::InvalidInput`] for a negative input.
pub fn isqrt(a: &BigInt) -> Result<BigInt, MathError> {
    if a.is_negative() {
        return Err(MathError::InvalidInput);
    }
    if a.is_zero() {
        return Ok(BigInt::new());
    }

    let bits = a.bit_count();
    let mut x = BigInt::from_u64(1).shift_left_bits(bits.div_ceil(2) as u32)?;

    loop {
        let div = a.div(&x)?;
        let sum = x.add(&div)?;
        let next = sum.div_by_two()?;
        if next.cmp_mag(&x) != Ordering::Less {
            break;
        }
        x = next;
    }

    while x.mul(&x)?.cmp_mag(a) == Ordering::Greater {
        x = x.sub_digit(1)?;
    }
    Ok(x)
}

/// Unsigned exponentiation by repeated squaring, with no modulus: full
/// precision, used internally by Newton's iteration above.
fn pow_unsigned(base: &BigInt, mut e: u32) -> Result<BigInt, MathError> {
    let mut result = BigInt::from_u64(1);
    let mut b = base.clone();
    while e > 0 {
        if e & 1 == 1 {
            result = result.mul(&b)?;
        }
        b = b.sqr()?;
        e >>= 1;
    }
    Ok(result)
}
