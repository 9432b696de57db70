//! Diminished-Radix (DR) reduction (`spec.md` §4.F): applies when
//! `m = B^k - c` for a small `c`, admitting reduction via shift-and-add
//! instead of division.

use crate::bigint::{BigInt, DIGIT_MASK, Digit};
use crate::error::MathError;
use std::cmp::Ordering;

/// A DR reduction context for a fixed modulus of the form `B^k - c`.
pub struct DrCtx {
    m: BigInt,
    k: usize,
    c: Digit,
}

impl DrCtx {
    /// True if `m` has the shape `B^k - c` with `c` fitting in a limb:
    /// every limb but the lowest equals [`DIGIT_MASK`].
    pub fn is_applicable(m: &BigInt) -> bool {
        if m.used() < 2 {
            return false;
        }
        m.digits()[1..].iter().all(|&d| d == DIGIT_MASK)
    }

    /// Extracts `c` from `m` and builds a context. Fails with
    /// [`MathError::InvalidInput`] if [`Self::is_applicable`] is false.
    pub fn setup(m: &BigInt) -> Result<Self, MathError> {
        if !Self::is_applicable(m) {
            return Err(MathError::InvalidInput);
        }
        let k = m.used();
        let c = (DIGIT_MASK + 1) - m.digits()[0];
        Ok(Self { m: m.clone(), k, c })
    }

    /// The modulus this context was set up against.
    pub fn modulus(&self) -> &BigInt {
        &self.m
    }

    /// Reduces `x` modulo `m` by repeatedly folding the high limbs (worth
    /// `c` each, since `B^k ≡ c (mod m)`) into the low `k` limbs, then
    /// conditionally subtracting `m`.
    pub fn reduce(&self, x: &BigInt) -> Result<BigInt, MathError> {
        let mut cur = x.clone();
        while cur.used() > self.k {
            let (hi, lo) = cur.magnitude_split(self.k)?;
            let scaled = hi.mul(&BigInt::from_u64(self.c))?;
            cur = lo.add(&scaled)?;
        }
        while cur.cmp(&self.m) != Ordering::Less {
            cur = cur.sub(&self.m)?;
        }
        Ok(cur)
    }
}
