//! Capacity and digit introspection (`spec.md` §6): the narrow read-only
//! surface external radix-conversion and binary-I/O collaborators consume.

use super::{BigInt, LIMB_BITS};
use crate::error::MathError;

impl BigInt {
    /// Position of the highest set bit, plus one; `0` for zero.
    pub fn bit_count(&self) -> u64 {
        if self.used == 0 {
            return 0;
        }
        let top = self.digits[self.used - 1];
        let top_bits = u64::BITS - top.leading_zeros();
        (self.used as u64 - 1) * LIMB_BITS as u64 + top_bits as u64
    }

    /// Count of trailing zero bits in the magnitude. `0` for zero.
    pub fn lsb_zeros(&self) -> u64 {
        if self.used == 0 {
            return 0;
        }
        let mut count = 0u64;
        for &d in &self.digits[..self.used] {
            if d == 0 {
                count += LIMB_BITS as u64;
                continue;
            }
            count += d.trailing_zeros() as u64;
            break;
        }
        count
    }

    /// Minimum number of bytes needed to hold the unsigned magnitude:
    /// `⌈bit_count / 8⌉`.
    pub fn unsigned_bin_size(&self) -> u64 {
        self.bit_count().div_ceil(8)
    }

    /// Reads bit `i` of the magnitude (`0` or `1`). Fails with
    /// [`MathError::InvalidInput`] if `i` is negative, matching `spec.md`
    /// §6's `get_bit(a, i) ∈ {0, 1, error-if-negative-index}`.
    pub fn get_bit(&self, i: i64) -> Result<u8, MathError> {
        if i < 0 {
            return Err(MathError::InvalidInput);
        }
        let i = i as u64;
        let limb = (i / LIMB_BITS as u64) as usize;
        if limb >= self.used {
            return Ok(0);
        }
        let bit = (i % LIMB_BITS as u64) as u32;
        Ok(((self.digits[limb] >> bit) & 1) as u8)
    }
}
