//! Square root modulo a prime (`spec.md` §4.G): Tonelli-Shanks, with a
//! shortcut for `p ≡ 3 (mod 4)`.

use super::jacobi::jacobi;
use crate::bigint::BigInt;
use crate::error::MathError;
use std::cmp::Ordering;

/// One square root of `n` modulo the prime `p` (the other is `p - root`).
/// Fails with [`MathError::InvalidInput`] if `n` is a quadratic
/// non-residue mod `p`, and with [`MathError::IterationLimit`] if the
/// search for a non-residue or the main loop exceeds its bound (should
/// not happen for a genuine prime `p`).
pub fn sqrtmod_prime(n: &BigInt, p: &BigInt) -> Result<BigInt, MathError> {
    let n = n.modulo(p)?;
    if n.is_zero() {
        return Ok(BigInt::new());
    }
    if jacobi(&n, p)? != 1 {
        return Err(MathError::InvalidInput);
    }

    let p_mod4 = p.mod_pow2(2)?.to_u64().unwrap_or(0);
    if p_mod4 == 3 {
        // n^((p+1)/4) mod p.
        let exp = p.add_digit(1)?.div_by_two()?.div_by_two()?;
        return crate::expmod::exptmod(&n, &exp, p);
    }

    // General Tonelli-Shanks: write p-1 = q * 2^s with q odd.
    let mut q = p.sub_digit(1)?;
    let mut s = 0u32;
    while q.get_bit(0)? == 0 {
        q = q.div_by_two()?;
        s += 1;
    }

    // Find a quadratic non-residue z.
    let mut z = BigInt::from_u64(2);
    loop {
        if jacobi(&z, p)? == -1 {
            break;
        }
        z = z.add_digit(1)?;
        if z.cmp(p) != Ordering::Less {
            return Err(MathError::IterationLimit);
        }
    }

    let mut m = s;
    let mut c = crate::expmod::exptmod(&z, &q, p)?;
    let mut t = crate::expmod::exptmod(&n, &q, p)?;
    let q_plus1_half = q.add_digit(1)?.div_by_two()?;
    let mut r = crate::expmod::exptmod(&n, &q_plus1_half, p)?;

    let max_rounds = p.bit_count().max(64) as usize + 64;
    for _ in 0..max_rounds {
        if t.is_one() {
            return Ok(r);
        }

        let mut i = 1u32;
        let mut t2i = t.mul(&t)?.modulo(p)?;
        while !t2i.is_one() {
            i += 1;
            if i >= m {
                return Err(MathError::IterationLimit);
            }
            t2i = t2i.mul(&t2i)?.modulo(p)?;
        }

        let exp = BigInt::from_u64(1).shift_left_bits(m - i - 1)?;
        let b = crate::expmod::exptmod(&c, &exp, p)?;
        m = i;
        c = b.mul(&b)?.modulo(p)?;
        t = t.mul(&c)?.modulo(p)?;
        r = r.mul(&b)?.modulo(p)?;
    }

    Err(MathError::IterationLimit)
}
