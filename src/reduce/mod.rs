//! The modular reduction family (`spec.md` §4.F): Barrett, Montgomery,
//! Diminished-Radix, and 2ᵏ-style reductions.
//!
//! Each reduction has two phases: `setup` precomputes against a fixed
//! modulus, `reduce` applies that precomputation repeatedly. `expmod`
//! (the `crate::expmod` module) is the main consumer, picking whichever
//! of these fits a given modulus; each is also usable directly by a
//! caller that wants to fold many values modulo the same fixed `m`.

mod barrett;
mod dr;
mod montgomery;
mod pow2;

pub use barrett::BarrettCtx;
pub use dr::DrCtx;
pub use montgomery::MontgomeryCtx;
pub use pow2::{Pow2Ctx, Pow2LargeCtx};
