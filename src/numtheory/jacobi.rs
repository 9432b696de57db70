//! Jacobi and Kronecker symbols (`spec.md` §4.G).

use crate::bigint::BigInt;
use crate::error::MathError;

/// Jacobi symbol `(a|n)`, for `n` odd and positive, via the iterative
/// reciprocity-based recursion. Fails with [`MathError::InvalidInput`] if
/// `n` is not odd and positive.
pub fn jacobi(a: &BigInt, n: &BigInt) -> Result<i32, MathError> {
    if n.is_negative() || n.is_zero() || n.get_bit(0)? == 0 {
        return Err(MathError::InvalidInput);
    }

    let mut a = a.modulo(n)?;
    let mut n = n.clone();
    let mut result = 1i32;

    while !a.is_zero() {
        while a.get_bit(0)? == 0 {
            a = a.div_by_two()?;
            let r = n_mod8(&n)?;
            if r == 3 || r == 5 {
                result = -result;
            }
        }
        std::mem::swap(&mut a, &mut n);
        if a_mod4(&a)? == 3 && a_mod4(&n)? == 3 {
            result = -result;
        }
        a = a.modulo(&n)?;
    }

    if n.is_one() { Ok(result) } else { Ok(0) }
}

fn n_mod8(n: &BigInt) -> Result<u64, MathError> {
    Ok(n.mod_pow2(3)?.to_u64().unwrap_or(0))
}

fn a_mod4(n: &BigInt) -> Result<u64, MathError> {
    Ok(n.mod_pow2(2)?.to_u64().unwrap_or(0))
}

/// Kronecker symbol `(a|n)`, extending the Jacobi symbol to any integer
/// `n` by handling the factor of 2 and the sign separately.
pub fn kronecker(a: &BigInt, n: &BigInt) -> Result<i32, MathError> {
    if n.is_zero() {
        return Ok(if a.abs().is_one() { 1 } else { 0 });
    }

    let mut a = a.clone();
    let mut n = n.clone();
    let mut result = 1i32;

    if n.is_negative() {
        n = n.abs();
        if a.is_negative() {
            result = -result;
        }
    }

    let mut twos = 0u32;
    while !n.is_zero() && n.get_bit(0)? == 0 {
        n = n.div_by_two()?;
        twos += 1;
    }

    if twos > 0 {
        let kr2 = kronecker_a_2(&a)?;
        if kr2 == 0 {
            return Ok(0);
        }
        for _ in 0..twos {
            result *= kr2;
        }
    }

    if n.is_one() {
        return Ok(result);
    }

    Ok(result * jacobi(&a, &n)?)
}

/// `(a|2)`: `0` if `a` is even, `1` if `a ≡ ±1 (mod 8)`, `-1` if
/// `a ≡ ±3 (mod 8)`.
fn kronecker_a_2(a: &BigInt) -> Result<i32, MathError> {
    if a.get_bit(0)? == 0 {
        return Ok(0);
    }
    let eight = BigInt::from_u64(8);
    let amod8 = a.modulo(&eight)?.to_u64().unwrap_or(0);
    Ok(match amod8 {
        1 | 7 => 1,
        3 | 5 => -1,
        _ => 0,
    })
}

