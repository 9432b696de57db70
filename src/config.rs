//! Process-wide tunable cutoffs for the multiplication/squaring dispatch
//! ladder (`spec.md` §4.D, §5, §9): the only mutable state this crate shares
//! across callers.
//!
//! A single struct behind one `RwLock`, with an explicit setter, rather than
//! scattered globals — the same shape the teacher's `os` module uses to hold
//! one process-wide, platform-fixed indirection (`sys_random`) instead of
//! `cfg`-gating every call site.

use std::sync::RwLock;

/// Operand-size thresholds (in limbs of the smaller operand) at which the
/// multiplication and squaring dispatchers in `bigint::mul`/`bigint::sqr`
/// switch algorithms.
///
/// Defaults follow the well-known libtommath defaults for a 64-bit-limb
/// build: Karatsuba below 80/120 limbs falls back to schoolbook/Comba;
/// Toom-3 only engages above 350/400 limbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cutoffs {
    pub karatsuba_mul: usize,
    pub karatsuba_sqr: usize,
    pub toom_mul: usize,
    pub toom_sqr: usize,
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self {
            karatsuba_mul: 80,
            karatsuba_sqr: 120,
            toom_mul: 350,
            toom_sqr: 400,
        }
    }
}

static CUTOFFS: RwLock<Cutoffs> = RwLock::new(Cutoffs {
    karatsuba_mul: 80,
    karatsuba_sqr: 120,
    toom_mul: 350,
    toom_sqr: 400,
});

/// Returns the current process-wide cutoffs.
pub fn cutoffs() -> Cutoffs {
    *CUTOFFS.read().unwrap_or_else(|e| e.into_inner())
}

/// Replaces the process-wide cutoffs.
///
/// Expected to be called once at startup; concurrent mutation while other
/// threads are multiplying is undefined, per `spec.md` §5.
pub fn set_cutoffs(cutoffs: Cutoffs) {
    *CUTOFFS.write().unwrap_or_else(|e| e.into_inner()) = cutoffs;
}

/// Number of limbs below which the `used`-bits of a Comba product still fit
/// the double-wide accumulator without overflowing it: `2^(word_bits - 2B + 1)`
/// for this crate's `B = 60`-bit limb and 128-bit accumulator, i.e. `2^9`.
pub const WARRAY_LIMIT: usize = 1 << (128 - 2 * crate::bigint::LIMB_BITS + 1);
