//! Miller-Rabin primality test (`spec.md` §4.I).

use super::fermat::PrimalityResult;
use crate::bigint::BigInt;
use crate::error::MathError;

/// One Miller-Rabin test of `a` to base `b`.
pub fn miller_rabin(a: &BigInt, b: &BigInt) -> Result<PrimalityResult, MathError> {
    let a_minus1 = a.sub_digit(1)?;
    if a_minus1.is_zero() {
        return Ok(PrimalityResult::DefinitelyComposite);
    }

    let mut d = a_minus1.clone();
    let mut s = 0u32;
    while d.get_bit(0)? == 0 {
        d = d.div_by_two()?;
        s += 1;
    }

    let mut x = crate::expmod::exptmod(b, &d, a)?;
    if x.is_one() || x.cmp(&a_minus1) == std::cmp::Ordering::Equal {
        return Ok(PrimalityResult::ProbablyPrime);
    }

    for _ in 1..s {
        x = x.mul(&x)?.modulo(a)?;
        if x.cmp(&a_minus1) == std::cmp::Ordering::Equal {
            return Ok(PrimalityResult::ProbablyPrime);
        }
        if x.is_one() {
            return Ok(PrimalityResult::DefinitelyComposite);
        }
    }

    Ok(PrimalityResult::DefinitelyComposite)
}

/// Number of Miller-Rabin trials such that the probability of a random
/// (not adversarially chosen) composite of the given bit size passing is
/// acceptably low (`spec.md` §4.I, matching `tommath.h`'s documented FIPS
/// 186-4-compliant `mp_prime_rabin_miller_trials` table). Fewer trials
/// suffice as the candidate grows, since the average-case error bound
/// tightens with size.
pub fn rabin_miller_trials(bit_size: u64) -> i32 {
    const SIZES: [(u64, i32); 8] = [
        (128, 28),
        (256, 16),
        (384, 10),
        (512, 7),
        (640, 6),
        (768, 5),
        (896, 4),
        (1024, 4),
    ];
    for &(k, t) in &SIZES {
        if bit_size <= k {
            return t;
        }
    }
    2
}
