//! Barrett reduction (`spec.md` §4.F): division-free modular reduction
//! using a precomputed reciprocal approximation.

use crate::bigint::BigInt;
use crate::error::MathError;
use std::cmp::Ordering;

/// A Barrett reduction context for a fixed modulus `m`: `μ = ⌊B^{2k}/m⌋`
/// where `k = used(m)`. Valid only while `m` is unchanged.
pub struct BarrettCtx {
    m: BigInt,
    mu: BigInt,
    k: usize,
}

impl BarrettCtx {
    /// Precomputes `μ` for `m`. Fails with [`MathError::InvalidInput`] if
    /// `m` is not a positive modulus.
    pub fn setup(m: &BigInt) -> Result<Self, MathError> {
        if m.is_zero() || m.is_negative() {
            return Err(MathError::InvalidInput);
        }
        let k = m.used();
        let base_2k = BigInt::from_u64(1).shift_left_digits(2 * k)?;
        let mu = base_2k.div(m)?;
        Ok(Self { m: m.clone(), mu, k })
    }

    /// The modulus this context was set up against.
    pub fn modulus(&self) -> &BigInt {
        &self.m
    }

    /// Reduces `x` modulo `m`. Intended for `0 <= x <= m²`, per `spec.md`
    /// §4.F, but the final correction loop makes it safe for any sign or
    /// magnitude of `x`.
    pub fn reduce(&self, x: &BigInt) -> Result<BigInt, MathError> {
        let q1 = x.shift_right_digits(self.k.saturating_sub(1))?;
        let q2 = q1.mul(&self.mu)?;
        let q3 = q2.shift_right_digits(self.k + 1)?;
        let mut r = x.sub(&q3.mul(&self.m)?)?;
        while r.is_negative() {
            r = r.add(&self.m)?;
        }
        while r.cmp(&self.m) != Ordering::Less {
            r = r.sub(&self.m)?;
        }
        Ok(r)
    }
}
