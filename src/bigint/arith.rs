//! Unsigned core arithmetic & signed add/subtract dispatch (`spec.md` §4.C).
//!
//! Every operation here computes into a freshly allocated `BigInt` and
//! returns it rather than writing through an output parameter — `spec.md`
//! §9's "compute into a temporary and swap in on success" aliasing strategy,
//! adapted to idiomatic Rust ownership: since every input is borrowed
//! immutably and the result is a new value, a caller writing `a = a.add(&b)?`
//! or passing the same `BigInt` as both operands is automatically alias-safe.

use super::{BigInt, DIGIT_MASK, Digit, DoubleDigit, LIMB_BITS, Sign};
use crate::error::MathError;
use std::cmp::Ordering;

impl BigInt {
    /// Unsigned magnitude addition. Ignores both operands' signs; the
    /// result is always [`Sign::NonNegative`].
    pub fn add_mag(&self, other: &BigInt) -> Result<BigInt, MathError> {
        let (hi, lo) = if self.used >= other.used {
            (self, other)
        } else {
            (other, self)
        };
        let mut out = BigInt::with_capacity(hi.used + 1)?;
        let mut carry: DoubleDigit = 0;
        for i in 0..hi.used {
            let a = hi.digits[i] as DoubleDigit;
            let b = if i < lo.used { lo.digits[i] as DoubleDigit } else { 0 };
            let sum = a + b + carry;
            out.digits[i] = (sum & DIGIT_MASK as DoubleDigit) as Digit;
            carry = sum >> LIMB_BITS;
        }
        out.digits[hi.used] = carry as Digit;
        out.used = hi.used + 1;
        out.clamp();
        Ok(out)
    }

    /// Unsigned magnitude subtraction. Requires `|self| >= |other|`; the
    /// caller (the signed dispatcher below) is responsible for operand
    /// order. Result is always [`Sign::NonNegative`].
    pub fn sub_mag(&self, other: &BigInt) -> Result<BigInt, MathError> {
        debug_assert!(self.cmp_mag(other) != Ordering::Less);
        let mut out = BigInt::with_capacity(self.used)?;
        let mut borrow: i128 = 0;
        for i in 0..self.used {
            let a = self.digits[i] as i128;
            let b = if i < other.used { other.digits[i] as i128 } else { 0 };
            let mut diff = a - b - borrow;
            if diff < 0 {
                diff += 1i128 << LIMB_BITS;
                borrow = 1;
            } else {
                borrow = 0;
            }
            out.digits[i] = diff as Digit;
        }
        out.used = self.used;
        out.clamp();
        Ok(out)
    }

    /// Signed addition. Same-sign operands add magnitudes and keep the
    /// shared sign; differing signs compare magnitudes, subtract the
    /// smaller from the larger, and take the sign of the larger.
    pub fn add(&self, other: &BigInt) -> Result<BigInt, MathError> {
        if self.sign == other.sign {
            let mut out = self.add_mag(other)?;
            out.sign = self.sign;
            out.clamp();
            return Ok(out);
        }
        match self.cmp_mag(other) {
            Ordering::Equal => Ok(BigInt::new()),
            Ordering::Greater => {
                let mut out = self.sub_mag(other)?;
                out.sign = self.sign;
                out.clamp();
                Ok(out)
            }
            Ordering::Less => {
                let mut out = other.sub_mag(self)?;
                out.sign = other.sign;
                out.clamp();
                Ok(out)
            }
        }
    }

    /// Signed subtraction: `self - other`, implemented as addition with
    /// `other`'s sign inverted.
    pub fn sub(&self, other: &BigInt) -> Result<BigInt, MathError> {
        self.add(&other.neg())
    }

    /// Negation. Zero stays [`Sign::NonNegative`] (negative zero is
    /// forbidden by `spec.md` §3 invariant 1).
    pub fn neg(&self) -> BigInt {
        let mut out = self.clone();
        if !out.is_zero() {
            out.sign = out.sign.flip();
        }
        out
    }

    /// Adds a single limb-sized non-negative value.
    pub fn add_digit(&self, d: Digit) -> Result<BigInt, MathError> {
        self.add(&BigInt::from_u64(d))
    }

    /// Subtracts a single limb-sized non-negative value.
    pub fn sub_digit(&self, d: Digit) -> Result<BigInt, MathError> {
        self.sub(&BigInt::from_u64(d))
    }
}
