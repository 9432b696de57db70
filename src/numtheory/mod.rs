//! Number theory (`spec.md` §4.G): GCD, LCM, extended Euclid, modular
//! inverse, Jacobi/Kronecker symbols, integer n-th root and square root,
//! and square roots modulo a prime.

mod gcd;
mod invmod;
mod jacobi;
mod root;
mod sqrtmod;

pub use gcd::{ExtEuclid, exteuclid, gcd, lcm};
pub use invmod::invmod;
pub use jacobi::{jacobi, kronecker};
pub use root::{isqrt, nth_root};
pub use sqrtmod::sqrtmod_prime;
