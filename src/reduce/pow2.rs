//! 2ᵏ-style reduction (`spec.md` §4.F): applies when `m = 2^p - k` for a
//! small `k`, either limb-sized ([`Pow2Ctx`]) or a general `BigInt`
//! ([`Pow2LargeCtx`]), admitting reduction via bit-level shift-and-add.

use crate::bigint::{BigInt, Digit};
use crate::error::MathError;
use std::cmp::Ordering;

/// A 2ᵏ reduction context where `k` fits in a single limb.
pub struct Pow2Ctx {
    m: BigInt,
    p: u32,
    k: Digit,
}

impl Pow2Ctx {
    /// Returns `(p, k)` if `m = 2^p - k` for some limb-sized `k`, where
    /// `p = bit_count(m)`.
    pub fn is_applicable(m: &BigInt) -> Option<(u32, Digit)> {
        let p = m.bit_count() as u32;
        if p == 0 {
            return None;
        }
        let pow = BigInt::from_u64(1).shift_left_bits(p).ok()?;
        let delta = pow.sub(m).ok()?;
        if delta.is_negative() || delta.used() > 1 {
            return None;
        }
        Some((p, delta.digit_at(0)))
    }

    /// Builds a context from `m`. Fails with [`MathError::InvalidInput`]
    /// if [`Self::is_applicable`] returns `None`.
    pub fn setup(m: &BigInt) -> Result<Self, MathError> {
        let (p, k) = Self::is_applicable(m).ok_or(MathError::InvalidInput)?;
        Ok(Self { m: m.clone(), p, k })
    }

    /// The modulus this context was set up against.
    pub fn modulus(&self) -> &BigInt {
        &self.m
    }

    /// Reduces `x` modulo `m` by repeatedly folding the bits above `p`
    /// (worth `k` each, since `2^p ≡ k (mod m)`) into the low `p` bits,
    /// then conditionally subtracting `m`.
    pub fn reduce(&self, x: &BigInt) -> Result<BigInt, MathError> {
        let mut cur = x.clone();
        while cur.bit_count() as u32 > self.p {
            let low = cur.mod_pow2(self.p)?;
            let high = cur.shift_right_bits(self.p)?;
            cur = low.add(&high.mul(&BigInt::from_u64(self.k))?)?;
        }
        while cur.cmp(&self.m) != Ordering::Less {
            cur = cur.sub(&self.m)?;
        }
        Ok(cur)
    }
}

/// A 2ᵏ reduction context where `k` does not fit in a single limb, but is
/// still small relative to `m` (`spec.md` §4.F "2ᵏ large").
pub struct Pow2LargeCtx {
    m: BigInt,
    p: u32,
    k: BigInt,
}

impl Pow2LargeCtx {
    /// Returns `(p, k)` if `m = 2^p - k` with `k` strictly shorter (in
    /// bits) than `m`, which bounds the number of folding rounds
    /// [`Self::reduce`] needs to converge.
    pub fn is_applicable(m: &BigInt) -> Option<(u32, BigInt)> {
        let p = m.bit_count() as u32;
        if p == 0 {
            return None;
        }
        let pow = BigInt::from_u64(1).shift_left_bits(p).ok()?;
        let delta = pow.sub(m).ok()?;
        if delta.is_negative() || delta.bit_count() >= m.bit_count() {
            return None;
        }
        Some((p, delta))
    }

    /// Builds a context from `m`. Fails with [`MathError::InvalidInput`]
    /// if [`Self::is_applicable`] returns `None`.
    pub fn setup(m: &BigInt) -> Result<Self, MathError> {
        let (p, k) = Self::is_applicable(m).ok_or(MathError::InvalidInput)?;
        Ok(Self { m: m.clone(), p, k })
    }

    /// The modulus this context was set up against.
    pub fn modulus(&self) -> &BigInt {
        &self.m
    }

    /// Same shape as [`Pow2Ctx::reduce`], with the folding factor `k` a
    /// full `BigInt` instead of a single limb.
    pub fn reduce(&self, x: &BigInt) -> Result<BigInt, MathError> {
        let mut cur = x.clone();
        while cur.bit_count() as u32 > self.p {
            let low = cur.mod_pow2(self.p)?;
            let high = cur.shift_right_bits(self.p)?;
            cur = low.add(&high.mul(&self.k)?)?;
        }
        while cur.cmp(&self.m) != Ordering::Less {
            cur = cur.sub(&self.m)?;
        }
        Ok(cur)
    }
}
