//! Primality testing and prime search (`spec.md` §4.I): trial division,
//! the Fermat/Miller-Rabin/Lucas-Selfridge/Frobenius-Underwood test
//! family, and the composite `is_prime`/`next_prime`/`rand_prime`
//! operations built on top of them.

mod fermat;
mod frobenius;
mod lucas;
mod miller_rabin;
mod table;

pub use fermat::{PrimalityResult, fermat};
pub use frobenius::frobenius;
pub use lucas::lucas_selfridge;
pub use miller_rabin::{miller_rabin, rabin_miller_trials};
pub use table::PRIME_TABLE;

use crate::bigint::BigInt;
use crate::error::MathError;
use crate::rng::RandomSource;

/// Flags controlling [`rand_prime`]'s candidate generation, matching
/// `tommath.h`'s `MP_PRIME_*` bit values exactly so the numeric constants
/// stay portable if a caller hardcodes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandPrimeFlags(u32);

impl RandPrimeFlags {
    /// No special shape requirement beyond "odd, of the requested size".
    pub const NONE: Self = Self(0);
    /// Candidate forced congruent to `3 mod 4`.
    pub const BBS: Self = Self(0x0001);
    /// Candidate forced safe: `(p - 1) / 2` must also be prime. Implies
    /// [`Self::BBS`], since an odd safe prime greater than `2` is always
    /// `3 mod 4`.
    pub const SAFE: Self = Self(0x0002);
    /// Second-highest bit of the candidate forced to `1`, tightening the
    /// lower bound on the generated value's size.
    pub const TWO_MSB_ON: Self = Self(0x0008);

    fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for RandPrimeFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Trial-divides `a` against [`PRIME_TABLE`]. Returns `true` if `a` is
/// exactly one of the tabulated primes, `false` if it is divisible by one
/// of them without being equal to it (definitely composite), and `None`
/// if none of the table's primes divide `a` (inconclusive).
fn trial_division(a: &BigInt) -> Result<Option<bool>, MathError> {
    for &p in PRIME_TABLE.iter() {
        let p_big = BigInt::from_u64(p);
        if a.cmp(&p_big) == std::cmp::Ordering::Equal {
            return Ok(Some(true));
        }
        let r = a.div_rem(&p_big)?.remainder;
        if r.is_zero() {
            return Ok(Some(false));
        }
    }
    Ok(None)
}

/// Full probabilistic primality decision for `a` (`spec.md` §4.I step 2):
/// trial division, a mandatory Miller-Rabin screen to bases 2 and 3, then a
/// strong Lucas-Selfridge test, for a BPSW-style composite test. `t`
/// requests additional Miller-Rabin rounds against [`PRIME_TABLE`] starting
/// at 5, beyond the mandatory bases-{2,3} rounds; `t < 0` selects
/// [`rabin_miller_trials`] automatically from `a`'s bit size.
pub fn is_prime(a: &BigInt, t: i32) -> Result<bool, MathError> {
    if a.cmp_digit(2) == std::cmp::Ordering::Less {
        return Ok(false);
    }
    if a.get_bit(0)? == 0 {
        return Ok(a.cmp_digit(2) == std::cmp::Ordering::Equal);
    }

    match trial_division(a)? {
        Some(verdict) => return Ok(verdict),
        None => {}
    }

    // Mandatory Miller-Rabin rounds to bases 2 and 3 (`spec.md` §4.I step
    // 3), independent of the `t` optional rounds below.
    for base in [2u64, 3] {
        let b = BigInt::from_u64(base);
        if matches!(miller_rabin(a, &b)?, PrimalityResult::DefinitelyComposite) {
            return Ok(false);
        }
    }

    let rounds = if t < 0 {
        rabin_miller_trials(a.bit_count())
    } else {
        t
    };
    // `t` additional rounds against the low primes in `PRIME_TABLE`
    // starting at 5 (`spec.md` §4.I step 5): 2 and 3 were already spent
    // above as the mandatory step-3 bases.
    for &base in PRIME_TABLE.iter().skip(2).take(rounds.max(0) as usize) {
        let b = BigInt::from_u64(base);
        if b.cmp(a) != std::cmp::Ordering::Less {
            break;
        }
        if matches!(miller_rabin(a, &b)?, PrimalityResult::DefinitelyComposite) {
            return Ok(false);
        }
    }

    match lucas_selfridge(a) {
        Ok(PrimalityResult::DefinitelyComposite) => return Ok(false),
        Ok(PrimalityResult::ProbablyPrime) => {}
        Err(MathError::IterationLimit) => {
            // Discriminant search exhausted; fall back to the
            // Frobenius-Underwood test, matching `tommath.h`'s documented
            // alternative when Selfridge's method A stalls.
            if matches!(frobenius(a)?, PrimalityResult::DefinitelyComposite) {
                return Ok(false);
            }
        }
        Err(e) => return Err(e),
    }

    Ok(true)
}

/// Finds the first prime strictly greater than `a`, scanning odd
/// candidates (`spec.md` §4.I `next_prime`). `bbs_style` restricts the
/// search to candidates congruent to `3 mod 4`.
pub fn next_prime(a: &BigInt, t: i32, bbs_style: bool) -> Result<BigInt, MathError> {
    let mut cur = if a.cmp_digit(2) == std::cmp::Ordering::Less {
        BigInt::from_u64(2)
    } else {
        let mut c = a.add_digit(1)?;
        if c.get_bit(0)? == 0 {
            c = c.add_digit(1)?;
        }
        if bbs_style {
            while c.modulo(&BigInt::from_u64(4))?.to_u64() != Some(3) {
                c = c.add_digit(2)?;
            }
        }
        c
    };

    loop {
        if is_prime(&cur, t)? {
            return Ok(cur);
        }
        cur = if bbs_style {
            cur.add_digit(4)?
        } else {
            cur.add_digit(2)?
        };
    }
}

/// Generates a random prime of exactly `bits` bits (`spec.md` §4.I
/// `rand_prime`), forcing the top bit so the result is never shorter than
/// requested, the low bit so it is always odd, and any shape constraints
/// named by `flags`. Draws candidates from `rng` until one of them passes
/// [`is_prime`] (and, under [`RandPrimeFlags::SAFE`], until its safe-prime
/// companion does too).
pub fn rand_prime(
    bits: u64,
    flags: RandPrimeFlags,
    t: i32,
    rng: &mut impl RandomSource,
) -> Result<BigInt, MathError> {
    if bits < 2 {
        return Err(MathError::InvalidInput);
    }
    let safe = flags.contains(RandPrimeFlags::SAFE);
    let bbs = safe || flags.contains(RandPrimeFlags::BBS);
    let two_msb = flags.contains(RandPrimeFlags::TWO_MSB_ON);

    let byte_len = bits.div_ceil(8) as usize;
    let mut buf = vec![0u8; byte_len];

    loop {
        rng.try_fill(&mut buf)?;

        let mut cand = BigInt::new();
        for &byte in &buf {
            cand = cand.shift_left_bits(8)?.bitor_mag(&BigInt::from_u64(byte as u64))?;
        }
        cand = cand.mod_pow2(bits as u32)?;

        cand = set_bit(&cand, bits - 1)?; // top bit: exact requested size
        if two_msb && bits >= 2 {
            cand = set_bit(&cand, bits - 2)?;
        }
        cand = set_bit(&cand, 0)?; // odd
        if bbs {
            cand = set_bit(&cand, 1)?; // together with bit 0: 3 mod 4
        }

        if !is_prime(&cand, t)? {
            continue;
        }

        if safe {
            let half = cand.sub_digit(1)?.div_by_two()?;
            if !is_prime(&half, t)? {
                continue;
            }
        }

        return Ok(cand);
    }
}

fn set_bit(a: &BigInt, i: u64) -> Result<BigInt, MathError> {
    let bit = BigInt::from_u64(1).shift_left_bits(i as u32)?;
    a.bitor_mag(&bit)
}
