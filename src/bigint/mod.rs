//! The big-integer representation and its low-level arithmetic kernel
//! (`spec.md` §3, §4.A-§4.E): the digit-vector data model, normalization
//! invariants, and the base algorithms.
//!
//! ## Structure
//!
//! - `digit`
//!   Storage, grow/shrink/clamp, copy, exchange — the memory discipline
//!   every other operation in this module builds on.
//! - `cmp`
//!   Sign normalization and ordered/magnitude comparison.
//! - `arith`
//!   Signed and unsigned add/subtract.
//! - `shift`
//!   Digit- and bit-granularity shifts, and magnitude/two's-complement
//!   bitwise AND/OR/XOR.
//! - `bits`
//!   Capacity and digit introspection (`bit_count`, `get_bit`, `lsb_zeros`,
//!   `unsigned_bin_size`) — the narrow surface external radix/binary I/O
//!   collaborators consume.
//! - `mul` / `sqr`
//!   Schoolbook, Comba, Karatsuba, and Toom-Cook 3-way multiplication and
//!   squaring, dispatched by operand size.
//! - `div`
//!   Normalized long division and the small-integer specializations.

mod arith;
mod bits;
mod cmp;
mod digit;
mod div;
mod mul;
mod shift;
mod sqr;

pub use bits::*;
pub use cmp::*;
pub use div::DivRem;

use crate::error::MathError;

/// Bits of magnitude held in each limb (`B` in `spec.md` §3). Fixed at the
/// largest width the source permits (`tommath.h`'s `MP_64BIT` branch,
/// `MP_DIGIT_BIT == 60`) rather than made generic over `{7, 15, 28, 31, 60}`:
/// the source itself picks exactly one width per build.
pub const LIMB_BITS: u32 = 60;

/// A single limb. Only the low [`LIMB_BITS`] bits are ever significant; the
/// high bits are zero by invariant.
pub type Digit = u64;

/// A double-wide accumulator used by Comba columns and carry propagation.
pub type DoubleDigit = u128;

/// Mask selecting the significant bits of a limb.
pub const DIGIT_MASK: Digit = (1u64 << LIMB_BITS) - 1;

/// Floor on allocated capacity for any live `BigInt` (`spec.md` §3 invariant
/// 4). Matches `tommath.h`'s default, non-`MP_LOW_MEM` `MP_PREC` of 32
/// limbs.
pub const MIN_PRECISION: usize = 32;

/// Sign of a [`BigInt`]. Negative zero is forbidden (`spec.md` §3 invariant
/// 1): `clamp` always forces [`Sign::NonNegative`] when `used == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    NonNegative,
    Negative,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        }
    }
}

/// A signed integer of unbounded magnitude.
///
/// `digits` is little-endian (index 0 least significant); `used` is the
/// count of significant limbs; `digits.len()` is the allocated capacity.
/// Every limb with index `< used` is non-zero at the top (`digits[used-1]
/// != 0`) and every limb is `< 2^LIMB_BITS`. Every public operation upholds
/// these invariants on its destination before returning (`spec.md` §3, §4.A).
#[derive(Clone)]
pub struct BigInt {
    pub(crate) digits: Vec<Digit>,
    pub(crate) used: usize,
    pub(crate) sign: Sign,
}

impl BigInt {
    /// Initializes to zero with the default minimum capacity.
    pub fn new() -> Self {
        Self {
            digits: vec![0; MIN_PRECISION],
            used: 0,
            sign: Sign::NonNegative,
        }
    }

    /// Initializes to zero with at least `n` limbs of capacity.
    pub fn with_capacity(n: usize) -> Result<Self, MathError> {
        let mut out = Self::new();
        out.grow(n.max(MIN_PRECISION))?;
        Ok(out)
    }

    /// Initializes as a copy of `src` (`init_copy`).
    pub fn from_bigint(src: &BigInt) -> Result<Self, MathError> {
        let mut out = Self::with_capacity(src.used)?;
        out.copy_from(src)?;
        Ok(out)
    }

    /// True if the value is mathematical zero.
    pub fn is_zero(&self) -> bool {
        self.used == 0
    }

    /// True if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Number of significant limbs.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Allocated capacity, in limbs.
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// Significant limbs, least-significant first. Empty for zero.
    pub fn digits(&self) -> &[Digit] {
        &self.digits[..self.used]
    }

    /// Limb `i`, or `0` if `i >= used()`. Used by reduction kernels that
    /// walk a fixed limb range regardless of the operand's actual length.
    pub(crate) fn digit_at(&self, i: usize) -> Digit {
        if i < self.used { self.digits[i] } else { 0 }
    }

    /// Builds a `BigInt` from a signed 64-bit value.
    pub fn from_i64(value: i64) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::NonNegative
        };
        let mag = value.unsigned_abs();
        Self::from_magnitude_u64(mag, sign)
    }

    /// Builds a `BigInt` from an unsigned 64-bit value.
    pub fn from_u64(value: u64) -> Self {
        Self::from_magnitude_u64(value, Sign::NonNegative)
    }

    fn from_magnitude_u64(mut mag: u64, sign: Sign) -> Self {
        let mut out = Self::new();
        if mag == 0 {
            return out;
        }
        // Never fails: MIN_PRECISION always covers a u64's worth of limbs.
        while mag != 0 {
            out.digits[out.used] = mag & DIGIT_MASK;
            out.used += 1;
            mag >>= LIMB_BITS;
        }
        out.sign = sign;
        out
    }

    /// Absolute value. Zero stays [`Sign::NonNegative`].
    pub fn abs(&self) -> BigInt {
        let mut out = self.clone();
        out.sign = Sign::NonNegative;
        out
    }

    /// True if the value is exactly `1`.
    pub fn is_one(&self) -> bool {
        self.cmp_digit(1) == std::cmp::Ordering::Equal
    }

    /// Attempts to narrow the magnitude into a `u64`. Fails (returns `None`)
    /// if the magnitude does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        if self.used > 2 {
            return None;
        }
        let mut acc: u128 = 0;
        for (i, &d) in self.digits().iter().enumerate() {
            acc |= (d as u128) << (i as u32 * LIMB_BITS);
        }
        u64::try_from(acc).ok()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BigInt {
    /// Debug formatting exists for test assertions and developer diagnostics
    /// only; it is not the radix-conversion surface `spec.md` §1 excludes
    /// from the core. Prints as `-?` followed by the limbs, most significant
    /// first, each as hex.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        if self.used == 0 {
            return f.write_str("0x0");
        }
        f.write_str("0x")?;
        for (i, d) in self.digits().iter().rev().enumerate() {
            if i == 0 {
                write!(f, "{:x}", d)?;
            } else {
                write!(f, "_{:015x}", d)?;
            }
        }
        Ok(())
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}
impl Eq for BigInt {}
