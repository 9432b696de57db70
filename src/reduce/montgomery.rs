//! Montgomery reduction (`spec.md` §4.F): modular reduction in a domain
//! where elements are implicitly multiplied by `R = B^{used(m)}`, letting
//! division by `R` become a carry-free shift.

use crate::bigint::{BigInt, DIGIT_MASK, Digit, LIMB_BITS};
use crate::error::MathError;
use std::cmp::Ordering;

/// A Montgomery reduction context for a fixed odd modulus `m`.
pub struct MontgomeryCtx {
    m: BigInt,
    /// `ρ = -m⁻¹ mod B`.
    rho: Digit,
    k: usize,
}

impl MontgomeryCtx {
    /// Precomputes `ρ` for `m`. Fails with [`MathError::InvalidInput`] if
    /// `m` is not odd and positive.
    pub fn setup(m: &BigInt) -> Result<Self, MathError> {
        if m.is_zero() || m.is_negative() || m.get_bit(0)? == 0 {
            return Err(MathError::InvalidInput);
        }
        let b = m.digit_at(0);
        let rho = compute_rho(b);
        Ok(Self { m: m.clone(), rho, k: m.used() })
    }

    /// The modulus this context was set up against.
    pub fn modulus(&self) -> &BigInt {
        &self.m
    }

    /// `R mod m`, the normalizer used to move a value into the Montgomery
    /// domain (`spec.md` §4.F's `α`). Computed by repeated doubling and
    /// conditional subtraction, per `spec.md`.
    pub fn normalizer(&self) -> Result<BigInt, MathError> {
        let mut alpha = BigInt::from_u64(1);
        let total_bits = self.k as u32 * LIMB_BITS;
        for _ in 0..total_bits {
            alpha = alpha.shift_left_bits(1)?;
            if alpha.cmp(&self.m) != Ordering::Less {
                alpha = alpha.sub(&self.m)?;
            }
        }
        Ok(alpha)
    }

    /// Moves `x` into the Montgomery domain: `x·R mod m`.
    pub fn to_domain(&self, x: &BigInt) -> Result<BigInt, MathError> {
        let reduced = x.modulo(&self.m)?;
        reduced.mul(&self.normalizer()?)?.modulo(&self.m)
    }

    /// Montgomery reduction (REDC): for `0 <= x < m·R`, computes
    /// `x·R⁻¹ mod m`. Applied once per multiply to fold a double-wide
    /// product back into the domain, and once at the very end of an
    /// exponentiation to leave the domain.
    pub fn reduce(&self, x: &BigInt) -> Result<BigInt, MathError> {
        let mut t = x.clone();
        for i in 0..self.k {
            let xi = t.digit_at(i);
            let mu = xi.wrapping_mul(self.rho) & DIGIT_MASK;
            if mu != 0 {
                let term = self.m.mul(&BigInt::from_u64(mu))?.shift_left_digits(i)?;
                t = t.add(&term)?;
            }
        }
        let mut r = t.shift_right_digits(self.k)?;
        while r.cmp(&self.m) != Ordering::Less {
            r = r.sub(&self.m)?;
        }
        Ok(r)
    }
}

/// Computes `-b⁻¹ mod 2^LIMB_BITS` for odd `b` by Hensel-lifting a Newton
/// iteration for the modular inverse mod `2^64` (`LIMB_BITS <= 60` divides
/// `64`, so the low `LIMB_BITS` bits of that wider inverse are already the
/// inverse mod `2^LIMB_BITS`), then truncating and negating.
fn compute_rho(b: Digit) -> Digit {
    debug_assert!(b & 1 == 1);
    // x_{n+1} = x_n * (2 - b*x_n) mod 2^64; doubles correct bits each step.
    let mut x: u64 = b;
    for _ in 0..6 {
        x = x.wrapping_mul(2u64.wrapping_sub(b.wrapping_mul(x)));
    }
    let inv = x & DIGIT_MASK;
    (1u64 << LIMB_BITS).wrapping_sub(inv) & DIGIT_MASK
}
