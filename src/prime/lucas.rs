//! Strong Lucas-Selfridge primality test (`spec.md` §4.I).

use super::fermat::PrimalityResult;
use crate::bigint::BigInt;
use crate::error::MathError;
use crate::numtheory::{gcd, isqrt, jacobi};
use std::cmp::Ordering;

/// One strong Lucas-Selfridge test of `n`. Assumes `n` is odd, `> 2`, and
/// has already survived trial division against small primes.
pub fn lucas_selfridge(n: &BigInt) -> Result<PrimalityResult, MathError> {
    if is_perfect_square(n)? {
        return Ok(PrimalityResult::DefinitelyComposite);
    }

    // Selfridge's method A: search 5, -7, 9, -11, ... for the first D with
    // Jacobi symbol (D|n) == -1.
    let mut abs_d: i64 = 5;
    let mut sign: i64 = 1;
    let (d_val, q_val) = loop {
        let d = abs_d * sign;
        let d_big = BigInt::from_i64(d);
        let g = gcd(&d_big.abs(), n)?;
        if g.cmp(n) == Ordering::Equal {
            return Ok(PrimalityResult::DefinitelyComposite);
        }
        if !g.is_one() {
            return Ok(PrimalityResult::DefinitelyComposite);
        }
        if jacobi(&d_big, n)? == -1 {
            break (d, (1 - d) / 4);
        }
        if abs_d > 1_000_000 {
            return Err(MathError::IterationLimit);
        }
        abs_d += 2;
        sign = -sign;
    };

    let d_big = BigInt::from_i64(d_val);
    let p_big = BigInt::from_u64(1);
    let q_big = BigInt::from_i64(q_val).modulo(n)?;

    let np1 = n.add_digit(1)?;
    let mut dd = np1.clone();
    let mut s = 0u32;
    while dd.get_bit(0)? == 0 {
        dd = dd.div_by_two()?;
        s += 1;
    }

    let (mut u, mut v, mut qk) = lucas_chain(&p_big, &q_big, &d_big, &dd, n)?;

    if u.is_zero() {
        return Ok(PrimalityResult::ProbablyPrime);
    }
    for r in 0..s {
        if v.is_zero() {
            return Ok(PrimalityResult::ProbablyPrime);
        }
        if r + 1 < s {
            let v_sq = v.mul(&v)?.modulo(n)?;
            let two_qk = qk.shift_left_bits(1)?.modulo(n)?;
            v = v_sq.sub(&two_qk)?.modulo(n)?;
            qk = qk.mul(&qk)?.modulo(n)?;
        }
    }
    Ok(PrimalityResult::DefinitelyComposite)
}

fn is_perfect_square(n: &BigInt) -> Result<bool, MathError> {
    let r = isqrt(n)?;
    Ok(r.mul(&r)?.cmp(n) == Ordering::Equal)
}

/// Computes `x / 2 mod n` for `n` odd, given `x` already reduced mod `n`
/// after the caller's arithmetic.
fn half_mod(x: &BigInt, n: &BigInt) -> Result<BigInt, MathError> {
    let x = x.modulo(n)?;
    if x.get_bit(0)? == 1 {
        x.add(n)?.div_by_two()
    } else {
        x.div_by_two()
    }
}

/// Computes `(U_k, V_k, Q^k) mod n` for the Lucas sequences with
/// parameters `P`, `Q`, and discriminant `D = P² - 4Q`, by doubling
/// through the bits of `k`. Shared by the strong Lucas-Selfridge test
/// above and the Frobenius-Underwood test in [`super::frobenius`].
pub(crate) fn lucas_chain(
    p: &BigInt,
    q: &BigInt,
    d: &BigInt,
    k: &BigInt,
    n: &BigInt,
) -> Result<(BigInt, BigInt, BigInt), MathError> {
    let bits = k.bit_count();
    let mut u = BigInt::from_u64(1);
    let mut v = p.modulo(n)?;
    let mut qk = q.modulo(n)?;

    for i in (0..bits.saturating_sub(1)).rev() {
        u = u.mul(&v)?.modulo(n)?;
        let v_sq = v.mul(&v)?.modulo(n)?;
        let two_qk = qk.shift_left_bits(1)?.modulo(n)?;
        v = v_sq.sub(&two_qk)?.modulo(n)?;
        qk = qk.mul(&qk)?.modulo(n)?;

        if k.get_bit(i as i64)? == 1 {
            let new_u = half_mod(&p.mul(&u)?.add(&v)?, n)?;
            let new_v = half_mod(&d.mul(&u)?.add(&p.mul(&v)?)?, n)?;
            u = new_u;
            v = new_v;
            qk = qk.mul(q)?.modulo(n)?;
        }
    }

    Ok((u, v, qk))
}
