//! Digit/bit shifts and magnitude/two's-complement bitwise operations
//! (`spec.md` §4.C).

use super::{BigInt, DIGIT_MASK, Digit, DoubleDigit, LIMB_BITS, Sign};
use crate::error::MathError;

impl BigInt {
    /// Prepends `n` zero limbs (multiplies by `2^(n*LIMB_BITS)`).
    pub fn shift_left_digits(&self, n: usize) -> Result<BigInt, MathError> {
        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }
        let mut out = BigInt::with_capacity(self.used + n)?;
        out.digits[n..n + self.used].copy_from_slice(&self.digits[..self.used]);
        out.used = self.used + n;
        out.sign = self.sign;
        out.clamp();
        Ok(out)
    }

    /// Drops the `n` least significant limbs (divides by `2^(n*LIMB_BITS)`,
    /// truncating toward zero).
    pub fn shift_right_digits(&self, n: usize) -> Result<BigInt, MathError> {
        if n >= self.used {
            return Ok(BigInt::new());
        }
        let new_used = self.used - n;
        let mut out = BigInt::with_capacity(new_used)?;
        out.digits[..new_used].copy_from_slice(&self.digits[n..self.used]);
        out.used = new_used;
        out.sign = self.sign;
        out.clamp();
        Ok(out)
    }

    /// Shifts left by `b` bits (multiplies by `2^b`), carrying across limb
    /// boundaries.
    pub fn shift_left_bits(&self, b: u32) -> Result<BigInt, MathError> {
        if self.is_zero() || b == 0 {
            return Ok(self.clone());
        }
        let digit_shift = (b / LIMB_BITS) as usize;
        let bit_shift = b % LIMB_BITS;
        let shifted = self.shift_left_digits(digit_shift)?;
        if bit_shift == 0 {
            return Ok(shifted);
        }
        let mut out = BigInt::with_capacity(shifted.used + 1)?;
        let mut carry: Digit = 0;
        for i in 0..shifted.used {
            let v = shifted.digits[i];
            out.digits[i] = ((v << bit_shift) | carry) & DIGIT_MASK;
            carry = v >> (LIMB_BITS - bit_shift);
        }
        out.digits[shifted.used] = carry;
        out.used = shifted.used + 1;
        out.sign = self.sign;
        out.clamp();
        Ok(out)
    }

    /// Shifts right by `b` bits (divides by `2^b`, truncating toward zero),
    /// discarding the bits shifted out.
    pub fn shift_right_bits(&self, b: u32) -> Result<BigInt, MathError> {
        Ok(self.shift_right_bits_rem(b)?.0)
    }

    /// Shifts right by `b` bits, also returning the dropped low bits as a
    /// non-negative remainder (`spec.md` §4.C: "the right-shift must
    /// optionally produce the dropped remainder as a second output").
    pub fn shift_right_bits_rem(&self, b: u32) -> Result<(BigInt, BigInt), MathError> {
        if b == 0 || self.is_zero() {
            return Ok((self.clone(), BigInt::new()));
        }
        // The dropped low bits, always reported as a non-negative magnitude.
        let mut magnitude_only = self.clone();
        magnitude_only.sign = Sign::NonNegative;
        let remainder = magnitude_only.mod_pow2(b)?;

        let digit_shift = (b / LIMB_BITS) as usize;
        let bit_shift = b % LIMB_BITS;

        if digit_shift >= self.used {
            return Ok((BigInt::new(), remainder));
        }

        let mut shifted = self.shift_right_digits(digit_shift)?;
        if bit_shift > 0 {
            let mut out = BigInt::with_capacity(shifted.used)?;
            let mut carry: Digit = 0;
            for i in (0..shifted.used).rev() {
                let v = shifted.digits[i];
                out.digits[i] = (v >> bit_shift) | carry;
                carry = (v << (LIMB_BITS - bit_shift)) & DIGIT_MASK;
            }
            out.used = shifted.used;
            out.sign = self.sign;
            out.clamp();
            shifted = out;
        } else {
            shifted.sign = self.sign;
        }

        Ok((shifted, remainder))
    }

    /// Arithmetic-style divide-by-two: a single-bit right shift (`spec.md`
    /// §4.E `div_by_2`).
    pub fn div_by_two(&self) -> Result<BigInt, MathError> {
        self.shift_right_bits(1)
    }

    /// Masks the low `k` bits of the magnitude, keeping the original sign
    /// (`spec.md` §4.E `mod_2^k`): not a mathematical modulo for negative
    /// inputs, matching the source's bit-masking semantics.
    pub fn mod_pow2(&self, k: u32) -> Result<BigInt, MathError> {
        if k == 0 || self.is_zero() {
            return Ok(BigInt::new());
        }
        let digit_shift = (k / LIMB_BITS) as usize;
        let bit_shift = k % LIMB_BITS;
        let keep = digit_shift.min(self.used);
        let mut out = BigInt::with_capacity(keep + 1)?;
        if keep > 0 {
            out.digits[..keep].copy_from_slice(&self.digits[..keep]);
            out.used = keep;
        }
        if bit_shift > 0 && digit_shift < self.used {
            let mask = (1u64 << bit_shift) - 1;
            out.grow(digit_shift + 1)?;
            out.digits[digit_shift] = self.digits[digit_shift] & mask;
            out.used = out.used.max(digit_shift + 1);
        }
        out.sign = self.sign;
        out.clamp();
        Ok(out)
    }

    /// Magnitude-only bitwise AND: operands are zero-padded to the longer
    /// length and compared as plain digit vectors, ignoring sign.
    pub fn bitand_mag(&self, other: &BigInt) -> Result<BigInt, MathError> {
        self.bitop_mag(other, |a, b| a & b)
    }
    /// Magnitude-only bitwise OR.
    pub fn bitor_mag(&self, other: &BigInt) -> Result<BigInt, MathError> {
        self.bitop_mag(other, |a, b| a | b)
    }
    /// Magnitude-only bitwise XOR.
    pub fn bitxor_mag(&self, other: &BigInt) -> Result<BigInt, MathError> {
        self.bitop_mag(other, |a, b| a ^ b)
    }

    fn bitop_mag(&self, other: &BigInt, f: impl Fn(Digit, Digit) -> Digit) -> Result<BigInt, MathError> {
        let n = self.used.max(other.used);
        let mut out = BigInt::with_capacity(n)?;
        for i in 0..n {
            let a = if i < self.used { self.digits[i] } else { 0 };
            let b = if i < other.used { other.digits[i] } else { 0 };
            out.digits[i] = f(a, b) & DIGIT_MASK;
        }
        out.used = n;
        out.clamp();
        Ok(out)
    }

    /// Two's-complement (infinite-precision, sign-extended) bitwise AND:
    /// both operands are interpreted as infinite sign-extended bit strings,
    /// and the result is produced in the same interpretation.
    pub fn bitand_2c(&self, other: &BigInt) -> Result<BigInt, MathError> {
        self.bitop_2c(other, BitOp::And)
    }
    /// Two's-complement bitwise OR.
    pub fn bitor_2c(&self, other: &BigInt) -> Result<BigInt, MathError> {
        self.bitop_2c(other, BitOp::Or)
    }
    /// Two's-complement bitwise XOR.
    pub fn bitxor_2c(&self, other: &BigInt) -> Result<BigInt, MathError> {
        self.bitop_2c(other, BitOp::Xor)
    }

    fn bitop_2c(&self, other: &BigInt, op: BitOp) -> Result<BigInt, MathError> {
        let limbs = self.used.max(other.used) + 1;
        let a = self.to_twos_complement(limbs)?;
        let b = other.to_twos_complement(limbs)?;
        let ext_a = self.is_negative();
        let ext_b = other.is_negative();

        let mut raw = vec![0 as Digit; limbs];
        for i in 0..limbs {
            raw[i] = op.apply_digit(a[i], b[i]);
        }
        let ext_result = op.apply_bit(ext_a, ext_b);

        BigInt::from_twos_complement(&raw, ext_result)
    }

    /// Produces `limbs` little-endian words holding `self`'s two's
    /// complement representation truncated/extended to that exact width.
    fn to_twos_complement(&self, limbs: usize) -> Result<Vec<Digit>, MathError> {
        let mut out = vec![0 as Digit; limbs];
        out[..self.used.min(limbs)].copy_from_slice(&self.digits[..self.used.min(limbs)]);
        if self.is_negative() {
            // invert then add one, modulo 2^(limbs*LIMB_BITS)
            for d in out.iter_mut() {
                *d = (!*d) & DIGIT_MASK;
            }
            let mut carry: DoubleDigit = 1;
            for d in out.iter_mut() {
                if carry == 0 {
                    break;
                }
                let sum = *d as DoubleDigit + carry;
                *d = (sum & DIGIT_MASK as DoubleDigit) as Digit;
                carry = sum >> LIMB_BITS;
            }
        }
        Ok(out)
    }

    /// Inverse of [`Self::to_twos_complement`]: reconstructs a signed
    /// `BigInt` from raw two's-complement limbs and the sign of the
    /// (infinite) extension bit.
    fn from_twos_complement(raw: &[Digit], negative: bool) -> Result<BigInt, MathError> {
        let limbs = raw.len();
        let mut out = BigInt::with_capacity(limbs)?;
        if !negative {
            out.digits[..limbs].copy_from_slice(raw);
            out.used = limbs;
            out.clamp();
            return Ok(out);
        }
        let mut mag = vec![0 as Digit; limbs];
        for i in 0..limbs {
            mag[i] = (!raw[i]) & DIGIT_MASK;
        }
        let mut carry: DoubleDigit = 1;
        for d in mag.iter_mut() {
            if carry == 0 {
                break;
            }
            let sum = *d as DoubleDigit + carry;
            *d = (sum & DIGIT_MASK as DoubleDigit) as Digit;
            carry = sum >> LIMB_BITS;
        }
        out.digits[..limbs].copy_from_slice(&mag);
        out.used = limbs;
        out.sign = Sign::Negative;
        out.clamp();
        Ok(out)
    }
}

#[derive(Clone, Copy)]
enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    fn apply_digit(self, a: Digit, b: Digit) -> Digit {
        (match self {
            BitOp::And => a & b,
            BitOp::Or => a | b,
            BitOp::Xor => a ^ b,
        }) & DIGIT_MASK
    }

    fn apply_bit(self, a: bool, b: bool) -> bool {
        match self {
            BitOp::And => a && b,
            BitOp::Or => a || b,
            BitOp::Xor => a != b,
        }
    }
}
