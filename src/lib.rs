//! A multiple-precision (big-integer) arithmetic core.
//!
//! This crate represents signed integers of arbitrary magnitude and
//! provides the suite of operations number-theoretic and cryptographic
//! code builds on: modular exponentiation, modular inverse, GCD,
//! primality testing, and square roots modulo a prime.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Radix
//! conversion (decimal/hex parsing and formatting), binary import/export,
//! and any CLI or embedding application are explicitly out of scope: this
//! crate exposes only the narrow interface those collaborators need —
//! allocate, assign a small value, mutate via arithmetic, inspect
//! digits/bits, release.
//!
//! # Module overview
//!
//! - `bigint`
//!   The big-integer representation and its low-level arithmetic kernel:
//!   the digit-vector data model, normalization invariants, and the base
//!   algorithms (schoolbook, Comba, Karatsuba, Toom-Cook 3-way
//!   multiplication; long division; squaring; shifts).
//!
//! - `reduce`
//!   The modular reduction family (Barrett, Montgomery, Diminished-Radix,
//!   2ᵏ and 2ᵏ-large) used internally by `expmod`, and available directly
//!   to callers that want to repeatedly reduce against a fixed modulus.
//!
//! - `numtheory`
//!   GCD, LCM, extended Euclid, modular inverse, Jacobi/Kronecker symbols,
//!   integer n-th root and square root, and square roots modulo a prime.
//!
//! - `expmod`
//!   The modular exponentiation engine: a sliding-window ladder that
//!   dispatches to whichever reduction in `reduce` fits the modulus.
//!
//! - `prime`
//!   Trial division, Miller-Rabin, strong Lucas-Selfridge, Frobenius
//!   (Underwood), and the composite BPSW-style `is_prime` decision
//!   procedure, plus `next_prime` and `rand_prime`.
//!
//! - `rng`
//!   The ChaCha20-based CSPRNG used as the default random-byte source
//!   behind `rand_prime`/`next_prime`'s BBS candidate generation, and by
//!   this crate's own round-trip property tests. Any type implementing
//!   `rng::RandomSource` can be used in its place.
//!
//! - `config`
//!   The one piece of process-wide mutable state this crate has: the
//!   Karatsuba/Toom-3 cutoffs the multiplication and squaring dispatchers
//!   read.
//!
//! - `error`
//!   The crate-wide error taxonomy (`MathError`) every fallible operation
//!   returns.
//!
//! # Design goals
//!
//! - No lazy evaluation: every operation materializes its result.
//! - No thread-affinity or implicit parallelism.
//! - No side-channel guarantees beyond the constant-window schedule of
//!   modular exponentiation; other paths are not claimed constant-time.
//! - Fail-fast: operations never panic on a data-dependent condition
//!   (division by zero, a missing modular inverse, an exhausted random
//!   source) — those surface as `Err(MathError)`.

pub mod bigint;
pub mod config;
pub mod error;
pub mod expmod;
pub mod numtheory;
pub mod prime;
pub mod reduce;
pub(crate) mod os;
pub mod rng;
