//! Sign & comparison (`spec.md` §4.B).

use super::{BigInt, Digit, Sign};
use std::cmp::Ordering;

impl BigInt {
    /// Compares magnitudes only, ignoring sign: by `used`, then
    /// limb-by-limb from the most significant limb down.
    pub fn cmp_mag(&self, other: &BigInt) -> Ordering {
        if self.used != other.used {
            return self.used.cmp(&other.used);
        }
        for i in (0..self.used).rev() {
            let ord = self.digits[i].cmp(&other.digits[i]);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// Signed comparison: differing signs decide it outright; equal signs
    /// fall back to [`Self::cmp_mag`], inverted when both are negative.
    pub fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::NonNegative) => Ordering::Less,
            (Sign::NonNegative, Sign::NonNegative) => self.cmp_mag(other),
            (Sign::Negative, Sign::Negative) => self.cmp_mag(other).reverse(),
        }
    }

    /// Compares against a single non-negative limb-sized value without
    /// allocating a temporary `BigInt`.
    pub fn cmp_digit(&self, d: Digit) -> Ordering {
        if self.sign == Sign::Negative {
            return Ordering::Less;
        }
        match self.used {
            0 => 0u64.cmp(&d),
            1 => self.digits[0].cmp(&d),
            _ => Ordering::Greater,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        BigInt::cmp(self, other)
    }
}
