//! Modular exponentiation (`spec.md` §4.H): a sliding-window ladder that
//! dispatches to whichever reduction in [`crate::reduce`] fits the
//! modulus.
//!
//! Algorithm, per `spec.md` §4.H:
//! 1. Pick a reduction: Montgomery if `P` is odd, DR or 2ᵏ if `P` has the
//!    matching shape, Barrett otherwise.
//! 2. Pick a window size from the bit length of the exponent.
//! 3. Precompute the odd powers `G¹, G³, …, G^{2^w-1}` in the reduction
//!    domain.
//! 4. Scan the exponent from the most significant bit, squaring at every
//!    bit and multiplying by the right odd power at the end of each
//!    window run.
//! 5. Convert the result out of the reduction domain.

use crate::bigint::BigInt;
use crate::error::MathError;
use crate::reduce::{BarrettCtx, DrCtx, MontgomeryCtx, Pow2Ctx, Pow2LargeCtx};
use std::cmp::Ordering;

enum Reduction {
    Montgomery(MontgomeryCtx),
    Dr(DrCtx),
    Pow2(Pow2Ctx),
    Pow2Large(Pow2LargeCtx),
    Barrett(BarrettCtx),
}

impl Reduction {
    fn select(m: &BigInt) -> Result<Self, MathError> {
        if m.is_zero() || m.is_negative() {
            return Err(MathError::InvalidInput);
        }
        if m.get_bit(0)? == 1 {
            return Ok(Reduction::Montgomery(MontgomeryCtx::setup(m)?));
        }
        if DrCtx::is_applicable(m) {
            return Ok(Reduction::Dr(DrCtx::setup(m)?));
        }
        if Pow2Ctx::is_applicable(m).is_some() {
            return Ok(Reduction::Pow2(Pow2Ctx::setup(m)?));
        }
        if Pow2LargeCtx::is_applicable(m).is_some() {
            return Ok(Reduction::Pow2Large(Pow2LargeCtx::setup(m)?));
        }
        Ok(Reduction::Barrett(BarrettCtx::setup(m)?))
    }

    fn modulus(&self) -> &BigInt {
        match self {
            Reduction::Montgomery(c) => c.modulus(),
            Reduction::Dr(c) => c.modulus(),
            Reduction::Pow2(c) => c.modulus(),
            Reduction::Pow2Large(c) => c.modulus(),
            Reduction::Barrett(c) => c.modulus(),
        }
    }

    /// Moves `x` into the reduction's domain.
    fn enter(&self, x: &BigInt) -> Result<BigInt, MathError> {
        match self {
            Reduction::Montgomery(c) => c.to_domain(x),
            _ => x.modulo(self.modulus()),
        }
    }

    /// Folds a double-wide product back into the domain.
    fn reduce(&self, x: &BigInt) -> Result<BigInt, MathError> {
        match self {
            Reduction::Montgomery(c) => c.reduce(x),
            Reduction::Dr(c) => c.reduce(x),
            Reduction::Pow2(c) => c.reduce(x),
            Reduction::Pow2Large(c) => c.reduce(x),
            Reduction::Barrett(c) => c.reduce(x),
        }
    }

    /// Multiplies two domain values and reduces the product.
    fn mul_reduce(&self, a: &BigInt, b: &BigInt) -> Result<BigInt, MathError> {
        self.reduce(&a.mul(b)?)
    }

    /// Leaves the domain: a no-op everywhere except Montgomery, where a
    /// final REDC strips the `R` factor.
    fn leave(&self, x: &BigInt) -> Result<BigInt, MathError> {
        match self {
            Reduction::Montgomery(c) => c.reduce(x),
            _ => Ok(x.clone()),
        }
    }
}

/// Window size selected from the exponent's bit length (`spec.md` §4.H
/// step 2), capped at 7.
fn window_size(bits: u64) -> u32 {
    match bits {
        0..=7 => 1,
        8..=23 => 2,
        24..=69 => 3,
        70..=196 => 4,
        197..=539 => 5,
        540..=1305 => 6,
        _ => 7,
    }
}

/// Computes `G^X mod P`.
///
/// Fails with [`MathError::InvalidInput`] if `X` is negative (the optional
/// "invert after computing `G^|X|`" extension `spec.md` §4.H allows is not
/// implemented) or if `P <= 0`.
pub fn exptmod(g: &BigInt, x: &BigInt, p: &BigInt) -> Result<BigInt, MathError> {
    if x.is_negative() {
        return Err(MathError::InvalidInput);
    }
    if p.is_zero() || p.is_negative() {
        return Err(MathError::InvalidInput);
    }
    if p.is_one() {
        return Ok(BigInt::new());
    }
    if x.is_zero() {
        return BigInt::from_u64(1).modulo(p);
    }

    let red = Reduction::select(p)?;
    let g_domain = red.enter(g)?;

    let bits = x.bit_count();
    let w = window_size(bits);
    let table_len = 1usize << (w - 1);

    let mut odd_powers = Vec::with_capacity(table_len);
    odd_powers.push(g_domain.clone());
    if table_len > 1 {
        let g_sq = red.mul_reduce(&g_domain, &g_domain)?;
        for i in 1..table_len {
            let next = red.mul_reduce(&odd_powers[i - 1], &g_sq)?;
            odd_powers.push(next);
        }
    }

    let mut result = red.enter(&BigInt::from_u64(1))?;
    let mut i = bits as i64 - 1;
    while i >= 0 {
        if x.get_bit(i)? == 0 {
            result = red.mul_reduce(&result, &result)?;
            i -= 1;
            continue;
        }

        let mut winlen: i64 = (w as i64).min(i + 1);
        while winlen > 1 && x.get_bit(i - winlen + 1)? == 0 {
            winlen -= 1;
        }

        for _ in 0..winlen {
            result = red.mul_reduce(&result, &result)?;
        }

        let mut value: u64 = 0;
        for j in 0..winlen {
            value = (value << 1) | x.get_bit(i - j)? as u64;
        }
        let idx = (value >> 1) as usize;
        result = red.mul_reduce(&result, &odd_powers[idx])?;

        i -= winlen;
    }

    let out = red.leave(&result)?;
    if out.cmp(p) == Ordering::Less {
        Ok(out)
    } else {
        out.modulo(p)
    }
}
