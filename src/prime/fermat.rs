//! Fermat primality test (`spec.md` §4.I): `b^(a-1) mod a == 1`.

use crate::bigint::BigInt;
use crate::error::MathError;

/// Ternary result every primality subroutine in this module returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimalityResult {
    DefinitelyComposite,
    ProbablyPrime,
}

/// One Fermat test of `a` to base `b`.
pub fn fermat(a: &BigInt, b: &BigInt) -> Result<PrimalityResult, MathError> {
    let exp = a.sub_digit(1)?;
    let r = crate::expmod::exptmod(b, &exp, a)?;
    Ok(if r.is_one() {
        PrimalityResult::ProbablyPrime
    } else {
        PrimalityResult::DefinitelyComposite
    })
}
