//! Multiplication dispatch: schoolbook, Comba, Karatsuba, Toom-Cook 3-way
//! (`spec.md` §4.D).
//!
//! `mul` picks an algorithm by `min(|a|, |b|)` against the process-wide
//! [`crate::config::cutoffs`], always operating on magnitudes and applying
//! the sign (XOR of operand signs) once at the end. Every recursive call
//! Karatsuba and Toom-3 make goes back through [`BigInt::mul`] itself, so
//! recursion depth is unbounded, per `spec.md` §4.D.

use super::{BigInt, DIGIT_MASK, Digit, DoubleDigit, LIMB_BITS, Sign};
use crate::config::{self, WARRAY_LIMIT};
use crate::error::MathError;

impl BigInt {
    /// Signed multiplication. Dispatches on operand size; sign of the
    /// product is the XOR of the operand signs, zero if either operand is
    /// zero.
    pub fn mul(&self, other: &BigInt) -> Result<BigInt, MathError> {
        if self.is_zero() || other.is_zero() {
            return Ok(BigInt::new());
        }
        let min_used = self.used.min(other.used);
        let cutoffs = config::cutoffs();

        let mut mag = if min_used >= cutoffs.toom_mul {
            self.toom3_mul(other)?
        } else if min_used >= cutoffs.karatsuba_mul {
            self.karatsuba_mul(other)?
        } else if min_used < WARRAY_LIMIT {
            self.comba_mul(other)?
        } else {
            self.schoolbook_mul(other)?
        };

        mag.sign = if self.sign == other.sign {
            Sign::NonNegative
        } else {
            Sign::Negative
        };
        mag.clamp();
        Ok(mag)
    }

    /// Plain O(n·m) schoolbook multiply of magnitudes.
    pub fn schoolbook_mul(&self, other: &BigInt) -> Result<BigInt, MathError> {
        let rlen = self.used + other.used;
        let mut out = BigInt::with_capacity(rlen)?;
        if self.used == 0 || other.used == 0 {
            return Ok(out);
        }
        for i in 0..self.used {
            let ai = self.digits[i] as DoubleDigit;
            if ai == 0 {
                continue;
            }
            let mut carry: DoubleDigit = 0;
            for j in 0..other.used {
                let sum = out.digits[i + j] as DoubleDigit + ai * other.digits[j] as DoubleDigit + carry;
                out.digits[i + j] = (sum & DIGIT_MASK as DoubleDigit) as Digit;
                carry = sum >> LIMB_BITS;
            }
            let mut k = i + other.used;
            while carry > 0 {
                let sum = out.digits[k] as DoubleDigit + carry;
                out.digits[k] = (sum & DIGIT_MASK as DoubleDigit) as Digit;
                carry = sum >> LIMB_BITS;
                k += 1;
            }
        }
        out.used = rlen;
        out.clamp();
        Ok(out)
    }

    /// Column-wise (Comba) multiply of magnitudes: for each output column
    /// `k`, sums every `a[i]*b[k-i]` pair into a persistent double-wide
    /// accumulator, extracting one digit and carrying the remainder into
    /// the next column. Reserved by [`Self::mul`]'s dispatcher for operand
    /// sizes under [`crate::config::WARRAY_LIMIT`], matching `spec.md`
    /// §4.D's dispatch table.
    pub fn comba_mul(&self, other: &BigInt) -> Result<BigInt, MathError> {
        let rlen = self.used + other.used;
        let mut out = BigInt::with_capacity(rlen)?;
        if self.used == 0 || other.used == 0 {
            return Ok(out);
        }
        let mut acc: DoubleDigit = 0;
        for k in 0..rlen {
            let i_lo = k.saturating_sub(other.used - 1);
            let i_hi = k.min(self.used - 1);
            if i_lo <= i_hi {
                for i in i_lo..=i_hi {
                    let j = k - i;
                    acc += self.digits[i] as DoubleDigit * other.digits[j] as DoubleDigit;
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

    /// Karatsuba multiply: splits each magnitude at `m = min(|a|,|b|)/2`
    /// limbs into `(hi, lo)`, computes `lo·lo`, `hi·hi`, and
    /// `(lo+hi)·(lo+hi)` (three recursive multiplies through [`Self::mul`]),
    /// and combines `hi·hi·B^{2m} + (mid - lo·lo - hi·hi)·B^m + lo·lo`.
    pub fn karatsuba_mul(&self, other: &BigInt) -> Result<BigInt, MathError> {
        let m = self.used.min(other.used) / 2;
        let (a1, a0) = self.magnitude_split(m)?;
        let (b1, b0) = other.magnitude_split(m)?;

        let z0 = a0.mul(&b0)?;
        let z2 = a1.mul(&b1)?;
        let a_sum = a0.add(&a1)?;
        let b_sum = b0.add(&b1)?;
        let z1_raw = a_sum.mul(&b_sum)?;
        let z1 = z1_raw.sub(&z0)?.sub(&z2)?;

        let high = z2.shift_left_digits(2 * m)?;
        let mid = z1.shift_left_digits(m)?;
        high.add(&mid)?.add(&z0)
    }

    /// Toom-Cook 3-way multiply: splits each magnitude into three limbs of
    /// `m = ⌈max(|a|,|b|)/3⌉` digits (coefficients of a degree-2
    /// polynomial in `B^m`), evaluates both polynomials at the five points
    /// `{0, 1, -1, -2, ∞}`, performs the five point-wise multiplications
    /// through [`Self::mul`], and interpolates the degree-4 product
    /// polynomial back before substituting `x = B^m`.
    pub fn toom3_mul(&self, other: &BigInt) -> Result<BigInt, MathError> {
        let m = (self.used.max(other.used) + 2) / 3;
        let m = m.max(1);

        let (a0, a1, a2) = self.toom_split3(m)?;
        let (b0, b1, b2) = other.toom_split3(m)?;

        let eval = |c0: &BigInt, c1: &BigInt, c2: &BigInt| -> Result<[BigInt; 5], MathError> {
            let v0 = c0.clone();
            let v1 = c0.add(c1)?.add(c2)?;
            let vm1 = c0.sub(c1)?.add(c2)?;
            let two_c1 = c1.shift_left_bits(1)?;
            let four_c2 = c2.shift_left_bits(2)?;
            let vm2 = c0.sub(&two_c1)?.add(&four_c2)?;
            let vinf = c2.clone();
            Ok([v0, v1, vm1, vm2, vinf])
        };

        let [v0a, v1a, vm1a, vm2a, vinfa] = eval(&a0, &a1, &a2)?;
        let [v0b, v1b, vm1b, vm2b, vinfb] = eval(&b0, &b1, &b2)?;

        let p0 = v0a.mul(&v0b)?;
        let p1 = v1a.mul(&v1b)?;
        let pm1 = vm1a.mul(&vm1b)?;
        let pm2 = vm2a.mul(&vm2b)?;
        let pinf = vinfa.mul(&vinfb)?;

        // Interpolation (Bodrato-style solve for c0..c4 of c(x) = c4x^4 + .. + c0).
        let c0 = p0.clone();
        let c4 = pinf.clone();

        let sum_p1_pm1 = p1.add(&pm1)?;
        let c2 = sum_p1_pm1.exact_div_small(2)?.sub(&c0)?.sub(&c4)?;

        let diff_p1_pm1 = p1.sub(&pm1)?;
        let half_diff = diff_p1_pm1.exact_div_small(2)?;

        let four_c2 = c2.shift_left_bits(2)?;
        let sixteen_c4 = c4.shift_left_bits(4)?;
        let inner = c0.add(&four_c2)?.add(&sixteen_c4)?.sub(&pm2)?;
        let numerator = inner.sub(&diff_p1_pm1)?;
        let c3 = numerator.exact_div_small(6)?;

        let c1 = half_diff.sub(&c3)?;

        let term1 = c1.shift_left_digits(m)?;
        let term2 = c2.shift_left_digits(2 * m)?;
        let term3 = c3.shift_left_digits(3 * m)?;
        let term4 = c4.shift_left_digits(4 * m)?;

        c0.add(&term1)?.add(&term2)?.add(&term3)?.add(&term4)
    }

    /// Splits the magnitude into `(hi, lo)` at `m` limbs: `lo` holds the low
    /// `m` limbs, `hi` the rest. Both are non-negative regardless of
    /// `self`'s sign.
    pub(crate) fn magnitude_split(&self, m: usize) -> Result<(BigInt, BigInt), MathError> {
        let keep = m.min(self.used);
        let mut lo = BigInt::with_capacity(keep.max(1))?;
        if keep > 0 {
            lo.digits[..keep].copy_from_slice(&self.digits[..keep]);
            lo.used = keep;
        }
        lo.clamp();
        let mut hi = self.shift_right_digits(m)?;
        hi.sign = Sign::NonNegative;
        Ok((hi, lo))
    }

    /// Splits the magnitude into three `m`-limb coefficients `(c0, c1, c2)`
    /// for Toom-Cook, least-significant first. Each is non-negative.
    pub(crate) fn toom_split3(&self, m: usize) -> Result<(BigInt, BigInt, BigInt), MathError> {
        let c0 = self.magnitude_window(0, m)?;
        let c1 = self.magnitude_window(m, 2 * m)?;
        let c2 = self.magnitude_window(2 * m, self.used.max(2 * m))?;
        Ok((c0, c1, c2))
    }

    fn magnitude_window(&self, lo: usize, hi: usize) -> Result<BigInt, MathError> {
        let lo = lo.min(self.used);
        let hi = hi.min(self.used);
        if hi <= lo {
            return Ok(BigInt::new());
        }
        let len = hi - lo;
        let mut out = BigInt::with_capacity(len)?;
        out.digits[..len].copy_from_slice(&self.digits[lo..hi]);
        out.used = len;
        out.clamp();
        Ok(out)
    }

    /// Exact division of the magnitude by a small constant (`2`, `3`, or
    /// `6`, as used by Toom-3 interpolation). Fails with
    /// [`MathError::Unknown`] if the division is not exact — which would
    /// indicate an interpolation bug, never a valid input here.
    pub(crate) fn exact_div_small(&self, d: Digit) -> Result<BigInt, MathError> {
        let (q, r) = self.div_by_digit(d)?;
        if r != 0 {
            return Err(MathError::Unknown);
        }
        Ok(q)
    }
}
