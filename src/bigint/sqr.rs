//! Squaring dispatch: schoolbook, Comba, and Karatsuba squaring, each
//! exploiting `aᵢ·aⱼ == aⱼ·aᵢ` to halve the cross-term work relative to a
//! general multiply; Toom-3 squaring delegates to [`super::mul::BigInt::toom3_mul`]
//! directly (`spec.md` §4.D: "squaring may reuse the multiplication ladder
//! where a dedicated doubling identity isn't implemented").

use super::{BigInt, DIGIT_MASK, Digit, DoubleDigit, LIMB_BITS, Sign};
use crate::config::{self, WARRAY_LIMIT};
use crate::error::MathError;

impl BigInt {
    /// Signed squaring. Always non-negative; dispatches on `self.used`
    /// against the same cutoffs used for multiplication.
    pub fn sqr(&self) -> Result<BigInt, MathError> {
        if self.is_zero() {
            return Ok(BigInt::new());
        }
        let cutoffs = config::cutoffs();
        let mut mag = if self.used >= cutoffs.toom_sqr {
            self.toom3_mul(self)?
        } else if self.used >= cutoffs.karatsuba_sqr {
            self.karatsuba_sqr()?
        } else if self.used < WARRAY_LIMIT {
            self.comba_sqr()?
        } else {
            self.schoolbook_sqr()?
        };
        mag.sign = Sign::NonNegative;
        mag.clamp();
        Ok(mag)
    }

    /// Schoolbook square via the doubling identity: every off-diagonal
    /// product `aᵢ·aⱼ` (`i != j`) is counted once and doubled, and each
    /// diagonal `aᵢ²` is added once.
    pub fn schoolbook_sqr(&self) -> Result<BigInt, MathError> {
        let n = self.used;
        let rlen = 2 * n;
        let mut out = BigInt::with_capacity(rlen)?;
        if n == 0 {
            return Ok(out);
        }
        for i in 0..n {
            let ai = self.digits[i] as DoubleDigit;
            if ai == 0 {
                continue;
            }
            let mut carry: DoubleDigit = 0;
            for j in (i + 1)..n {
                let doubled = (ai * self.digits[j] as DoubleDigit) << 1;
                let sum = out.digits[i + j] as DoubleDigit + doubled + carry;
                out.digits[i + j] = (sum & DIGIT_MASK as DoubleDigit) as Digit;
                carry = sum >> LIMB_BITS;
            }
            let mut k = i + n;
            while carry > 0 {
                let sum = out.digits[k] as DoubleDigit + carry;
                out.digits[k] = (sum & DIGIT_MASK as DoubleDigit) as Digit;
                carry = sum >> LIMB_BITS;
                k += 1;
            }
        }
        // Diagonal terms aᵢ², added once each, not doubled.
        for i in 0..n {
            let mut carry = self.digits[i] as DoubleDigit * self.digits[i] as DoubleDigit;
            let mut k = 2 * i;
            while carry > 0 {
                let sum = out.digits[k] as DoubleDigit + (carry & DIGIT_MASK as DoubleDigit);
                out.digits[k] = (sum & DIGIT_MASK as DoubleDigit) as Digit;
                carry = (carry >> LIMB_BITS) + (sum >> LIMB_BITS);
                k += 1;
            }
        }
        out.used = rlen;
        out.clamp();
        Ok(out)
    }

    /// Column-wise (Comba) square via the doubling identity: for each
    /// output column `k`, only the pairs `(i, j)` with `i <= j` and `i + j
    /// == k` are summed — each off-diagonal pair doubled, each diagonal
    /// `aᵢ²` counted once — into a persistent double-wide accumulator,
    /// exactly halving the per-column multiply work `comba_mul` would do
    /// for the same operand twice.
    pub fn comba_sqr(&self) -> Result<BigInt, MathError> {
        let n = self.used;
        let rlen = 2 * n;
        let mut out = BigInt::with_capacity(rlen)?;
        if n == 0 {
            return Ok(out);
        }
        let mut acc: DoubleDigit = 0;
        for k in 0..rlen {
            let i_lo = k.saturating_sub(n - 1);
            let i_hi = (k / 2).min(n - 1);
            if i_lo <= i_hi {
                for i in i_lo..=i_hi {
                    let j = k - i;
                    let prod = self.digits[i] as DoubleDigit * self.digits[j] as DoubleDigit;
                    acc += if i == j { prod } else { prod << 1 };
                }
            }
            out.digits[k] = (acc & DIGIT_MASK as DoubleDigit) as Digit;
            acc >>= LIMB_BITS;
        }
        debug_assert_eq!(acc, 0);
        out.used = rlen;
        out.clamp();
        Ok(out)
    }

    /// Karatsuba square: splits the magnitude at `m = |self|/2` limbs and
    /// combines `hi²·B^{2m} + (mid² - hi² - lo²)·B^m + lo²`, where
    /// `mid = lo+hi`, recursing through [`Self::sqr`].
    pub fn karatsuba_sqr(&self) -> Result<BigInt, MathError> {
        let m = self.used / 2;
        let (hi, lo) = self.magnitude_split(m)?;

        let z0 = lo.sqr()?;
        let z2 = hi.sqr()?;
        let mid = lo.add(&hi)?;
        let z1_raw = mid.sqr()?;
        let z1 = z1_raw.sub(&z0)?.sub(&z2)?;

        let high = z2.shift_left_digits(2 * m)?;
        let mid_term = z1.shift_left_digits(m)?;
        high.add(&mid_term)?.add(&z0)
    }
}
