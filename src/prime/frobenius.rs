//! Frobenius (Underwood) primality test (`spec.md` §4.I).
//!
//! Finds the smallest `b >= 3` with Jacobi symbol `(b² - 4 | N) == -1`
//! (`spec.md` §9's open question on parameter selection resolves to this
//! deterministic smallest-`b` search, matching `tommath.h`'s
//! `mp_prime_frobenius_underwood`), then works in the ring `Z_N[x]/(x² -
//! bx + 1)`: with `Q = 1`, `x^k = U_k·x - U_{k-1}` for the Lucas sequence
//! `U` with parameters `(P, Q) = (b, 1)`. The candidate passes if
//! `U_{N+1} ≡ 0` and `V_{N+1} ≡ 2` (mod `N`).

use super::fermat::PrimalityResult;
use super::lucas::lucas_chain;
use crate::bigint::BigInt;
use crate::error::MathError;
use crate::numtheory::jacobi;

/// One Frobenius-Underwood test of `n`. Assumes `n` is odd and `> 2`.
pub fn frobenius(n: &BigInt) -> Result<PrimalityResult, MathError> {
    let mut b: i64 = 3;
    let d_val = loop {
        let d = b * b - 4;
        let d_big = BigInt::from_i64(d);
        if jacobi(&d_big, n)? == -1 {
            break d;
        }
        b += 1;
        if b > 1_000_000 {
            return Err(MathError::IterationLimit);
        }
    };

    let p_big = BigInt::from_i64(b);
    let q_big = BigInt::from_u64(1);
    let d_big = BigInt::from_i64(d_val);
    let np1 = n.add_digit(1)?;

    let (u, v, _qk) = lucas_chain(&p_big, &q_big, &d_big, &np1, n)?;

    let two = BigInt::from_u64(2).modulo(n)?;
    if u.is_zero() && v.cmp(&two) == std::cmp::Ordering::Equal {
        Ok(PrimalityResult::ProbablyPrime)
    } else {
        Ok(PrimalityResult::DefinitelyComposite)
    }
}
