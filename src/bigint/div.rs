//! Normalized long division (`spec.md` §4.E): Knuth's Algorithm D, plus the
//! single-digit specialization used by interpolation and small-modulus
//! paths elsewhere in the crate.

use super::{BigInt, DIGIT_MASK, Digit, DoubleDigit, LIMB_BITS, Sign};
use crate::error::MathError;
use std::cmp::Ordering;

/// Result of a division: both quotient and remainder. `spec.md` §4.E notes
/// that a caller may want only one of the two; [`BigInt::div`] and
/// [`BigInt::rem`] expose that without forcing every call site to match on
/// this struct.
pub struct DivRem {
    pub quotient: BigInt,
    pub remainder: BigInt,
}

impl BigInt {
    /// Divides `self` by `other`, producing both quotient and remainder in
    /// one pass. Truncating division: the remainder's sign follows `self`
    /// (the dividend), matching `spec.md` §4.E's worked example. Fails with
    /// [`MathError::InvalidInput`] if `other` is zero.
    pub fn div_rem(&self, other: &BigInt) -> Result<DivRem, MathError> {
        if other.is_zero() {
            return Err(MathError::InvalidInput);
        }
        if self.cmp_mag(other) == Ordering::Less {
            return Ok(DivRem {
                quotient: BigInt::new(),
                remainder: self.clone(),
            });
        }
        let quotient_sign = if self.sign == other.sign {
            Sign::NonNegative
        } else {
            Sign::Negative
        };

        if other.used == 1 {
            let (q_digits, r) = div_digits_by_digit(&self.digits[..self.used], other.digits[0]);
            let mut q = BigInt::with_capacity(q_digits.len().max(1))?;
            q.digits[..q_digits.len()].copy_from_slice(&q_digits);
            q.used = q_digits.len();
            q.sign = quotient_sign;
            q.clamp();
            let mut rem = BigInt::from_u64(r);
            rem.sign = self.sign;
            rem.clamp();
            return Ok(DivRem { quotient: q, remainder: rem });
        }

        let (q_digits, r_digits) = knuth_divmod(&self.digits[..self.used], &other.digits[..other.used]);
        let mut q = BigInt::with_capacity(q_digits.len().max(1))?;
        q.digits[..q_digits.len()].copy_from_slice(&q_digits);
        q.used = q_digits.len();
        q.sign = quotient_sign;
        q.clamp();

        let mut rem = BigInt::with_capacity(r_digits.len().max(1))?;
        rem.digits[..r_digits.len()].copy_from_slice(&r_digits);
        rem.used = r_digits.len();
        rem.sign = self.sign;
        rem.clamp();

        Ok(DivRem { quotient: q, remainder: rem })
    }

    /// Quotient only.
    pub fn div(&self, other: &BigInt) -> Result<BigInt, MathError> {
        Ok(self.div_rem(other)?.quotient)
    }

    /// Remainder only (truncating; follows the dividend's sign).
    pub fn rem(&self, other: &BigInt) -> Result<BigInt, MathError> {
        Ok(self.div_rem(other)?.remainder)
    }

    /// Euclidean remainder: always in `[0, |other|)`, the convention the
    /// reduction and number-theory modules build on (`spec.md` §4.F-§4.H
    /// treat the modulus as implicitly positive).
    pub fn modulo(&self, other: &BigInt) -> Result<BigInt, MathError> {
        let r = self.rem(other)?;
        if r.is_negative() {
            let mut m = other.clone();
            m.sign = Sign::NonNegative;
            return r.add(&m);
        }
        Ok(r)
    }

    /// Divides the magnitude by a single limb-sized divisor, returning the
    /// signed quotient and the (always non-negative, `< d`) scalar
    /// remainder. Used by Toom-3 interpolation's exact small-constant
    /// divisions and by callers that already know they have a single-limb
    /// divisor.
    pub fn div_by_digit(&self, d: Digit) -> Result<(BigInt, Digit), MathError> {
        if d == 0 {
            return Err(MathError::InvalidInput);
        }
        let (q_digits, r) = div_digits_by_digit(&self.digits[..self.used], d);
        let mut q = BigInt::with_capacity(q_digits.len().max(1))?;
        if !q_digits.is_empty() {
            q.digits[..q_digits.len()].copy_from_slice(&q_digits);
            q.used = q_digits.len();
        }
        q.sign = self.sign;
        q.clamp();
        Ok((q, r))
    }
}

/// Divides a raw little-endian magnitude by a single digit. Returns the
/// (un-trimmed, same length as `digits`) quotient limbs and the remainder.
fn div_digits_by_digit(digits: &[Digit], d: Digit) -> (Vec<Digit>, Digit) {
    let mut q = vec![0 as Digit; digits.len()];
    let mut rem: DoubleDigit = 0;
    for i in (0..digits.len()).rev() {
        let cur = (rem << LIMB_BITS) | digits[i] as DoubleDigit;
        q[i] = (cur / d as DoubleDigit) as Digit;
        rem = cur % d as DoubleDigit;
    }
    (q, rem as Digit)
}

/// Knuth's Algorithm D (TAOCP vol. 2, 4.3.1) on raw little-endian magnitude
/// digit slices. Requires `b.len() >= 2` and `a.len() >= b.len()` (the
/// caller handles the single-digit divisor and `|a| < |b|` cases itself).
/// Returns `(quotient, remainder)` digit vectors, un-trimmed.
fn knuth_divmod(a: &[Digit], b: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
    let n = b.len();
    let m = a.len() - n;
    let base: DoubleDigit = 1 << LIMB_BITS;

    // Normalize so the divisor's top limb has its highest significant bit
    // set, bounding the quotient-digit estimate's error to at most 2.
    let top_bits = Digit::BITS - b[n - 1].leading_zeros();
    let d = LIMB_BITS - top_bits;

    let v = shl_bits_vec(b, d);
    debug_assert_eq!(v.len(), n + 1);
    debug_assert_eq!(v[n], 0);
    let v = &v[..n];

    let mut u = shl_bits_vec(a, d);
    u.resize(m + n + 1, 0);

    let mut q = vec![0 as Digit; m + 1];

    for j in (0..=m).rev() {
        let top2 = ((u[j + n] as DoubleDigit) << LIMB_BITS) | u[j + n - 1] as DoubleDigit;
        let vtop = v[n - 1] as DoubleDigit;
        let mut qhat = top2 / vtop;
        let mut rhat = top2 % vtop;
        if qhat >= base {
            qhat = base - 1;
            rhat = top2 - qhat * vtop;
        }
        loop {
            let overshoots = qhat >= base
                || qhat * v[n - 2] as DoubleDigit > (rhat << LIMB_BITS) + u[j + n - 2] as DoubleDigit;
            if !overshoots {
                break;
            }
            qhat -= 1;
            rhat += vtop;
            if rhat >= base {
                break;
            }
        }

        // Multiply-and-subtract qhat * v from u[j..j+n+1].
        let mut carry: DoubleDigit = 0;
        let mut borrow: i128 = 0;
        for i in 0..n {
            let p = qhat * v[i] as DoubleDigit + carry;
            carry = p >> LIMB_BITS;
            let p_lo = (p & DIGIT_MASK as DoubleDigit) as i128;
            let mut t = u[j + i] as i128 - p_lo - borrow;
            if t < 0 {
                t += base as i128;
                borrow = 1;
            } else {
                borrow = 0;
            }
            u[j + i] = t as Digit;
        }
        let mut t = u[j + n] as i128 - carry as i128 - borrow;
        let underflow = t < 0;
        if underflow {
            t += base as i128;
        }
        u[j + n] = t as Digit;

        if underflow {
            // qhat was one too large: add the divisor back and step down.
            qhat -= 1;
            let mut carry2: DoubleDigit = 0;
            for i in 0..n {
                let sum = u[j + i] as DoubleDigit + v[i] as DoubleDigit + carry2;
                u[j + i] = (sum & DIGIT_MASK as DoubleDigit) as Digit;
                carry2 = sum >> LIMB_BITS;
            }
            u[j + n] = ((u[j + n] as DoubleDigit + carry2) & DIGIT_MASK as DoubleDigit) as Digit;
        }
        q[j] = qhat as Digit;
    }

    let remainder = shr_bits_vec(&u[..n], d);
    (q, remainder)
}

fn shl_bits_vec(src: &[Digit], d: u32) -> Vec<Digit> {
    let mut out = vec![0 as Digit; src.len() + 1];
    if d == 0 {
        out[..src.len()].copy_from_slice(src);
        return out;
    }
    let mut carry: Digit = 0;
    for i in 0..src.len() {
        let v = src[i];
        out[i] = ((v << d) | carry) & DIGIT_MASK;
        carry = v >> (LIMB_BITS - d);
    }
    out[src.len()] = carry;
    out
}

fn shr_bits_vec(src: &[Digit], d: u32) -> Vec<Digit> {
    let len = src.len();
    let mut out = vec![0 as Digit; len];
    if d == 0 {
        out.copy_from_slice(src);
        return out;
    }
    let mut carry: Digit = 0;
    for i in (0..len).rev() {
        let v = src[i];
        out[i] = (v >> d) | carry;
        carry = (v << (LIMB_BITS - d)) & DIGIT_MASK;
    }
    out
}
