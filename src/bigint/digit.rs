//! Digit vector & memory discipline (`spec.md` §4.A).

use super::{BigInt, MIN_PRECISION, Sign};
use crate::error::MathError;

impl BigInt {
    /// Ensures capacity is at least `n` limbs, zero-filling any newly added
    /// limbs. Never shrinks. Surfaces allocation failure as
    /// [`MathError::Memory`] rather than aborting, via `try_reserve`.
    pub fn grow(&mut self, n: usize) -> Result<(), MathError> {
        if self.digits.len() >= n {
            return Ok(());
        }
        let additional = n - self.digits.len();
        self.digits
            .try_reserve_exact(additional)
            .map_err(|_| MathError::Memory)?;
        self.digits.resize(n, 0);
        Ok(())
    }

    /// Trims leading zero limbs while the top limb is zero, and forces the
    /// sign to [`Sign::NonNegative`] when the result is zero. Every
    /// arithmetic operation calls this on its destination before returning.
    pub fn clamp(&mut self) {
        while self.used > 0 && self.digits[self.used - 1] == 0 {
            self.used -= 1;
        }
        if self.used == 0 {
            self.sign = Sign::NonNegative;
        }
    }

    /// Frees excess capacity down to `max(used, MIN_PRECISION)`.
    pub fn shrink(&mut self) {
        let target = self.used.max(MIN_PRECISION);
        self.digits.truncate(target);
        self.digits.shrink_to_fit();
    }

    /// Releases storage, resetting the value to zero. Unlike [`Self::zero`],
    /// this also drops the backing allocation (paired with `init`, per
    /// `spec.md` §5's "every `init*` must be paired with `clear`").
    pub fn clear(&mut self) {
        self.digits.clear();
        self.digits.shrink_to_fit();
        self.used = 0;
        self.sign = Sign::NonNegative;
    }

    /// Resets the value to zero in place, keeping the current allocation.
    /// Zeroes every limb, including ones beyond `used`, so no stale
    /// magnitude lingers in freed-but-retained storage.
    pub fn zero(&mut self) {
        self.digits.iter_mut().for_each(|d| *d = 0);
        self.used = 0;
        self.sign = Sign::NonNegative;
    }

    /// Overwrites `self` with a copy of `src`. Tolerates `self` and `src`
    /// aliasing the same object (a no-op in that case).
    pub fn copy_from(&mut self, src: &BigInt) -> Result<(), MathError> {
        if std::ptr::eq(self, src) {
            return Ok(());
        }
        self.grow(src.used)?;
        self.digits[..src.used].copy_from_slice(&src.digits[..src.used]);
        for d in &mut self.digits[src.used..self.used.max(src.used)] {
            *d = 0;
        }
        self.used = src.used;
        self.sign = src.sign;
        Ok(())
    }

    /// Swaps two `BigInt`s' descriptors in O(1) (swap, not copy).
    pub fn exchange(a: &mut BigInt, b: &mut BigInt) {
        std::mem::swap(a, b);
    }
}
