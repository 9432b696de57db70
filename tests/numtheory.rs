use bignum_core::bigint::BigInt;
use bignum_core::numtheory::{exteuclid, gcd, invmod, isqrt, jacobi, kronecker, lcm, nth_root, sqrtmod_prime};

#[test]
fn gcd_of_462_and_1071_is_21() {
    let a = BigInt::from_i64(462);
    let b = BigInt::from_i64(1071);
    assert_eq!(gcd(&a, &b).unwrap(), BigInt::from_i64(21));
}

#[test]
fn gcd_with_zero_is_the_other_operands_magnitude() {
    let a = BigInt::from_i64(-17);
    let zero = BigInt::new();
    assert_eq!(gcd(&a, &zero).unwrap(), BigInt::from_i64(17));
}

#[test]
fn lcm_of_4_and_6_is_12() {
    let a = BigInt::from_i64(4);
    let b = BigInt::from_i64(6);
    assert_eq!(lcm(&a, &b).unwrap(), BigInt::from_i64(12));
}

#[test]
fn extended_euclid_satisfies_bezouts_identity() {
    let a = BigInt::from_i64(240);
    let b = BigInt::from_i64(46);
    let e = exteuclid(&a, &b).unwrap();

    let lhs = e.u1.mul(&a).unwrap().add(&e.u2.mul(&b).unwrap()).unwrap();
    assert_eq!(lhs, e.u3);
    assert_eq!(e.u3, gcd(&a, &b).unwrap());
}

#[test]
fn extended_euclid_reports_a_nonnegative_gcd_for_a_negative_operand() {
    let a = BigInt::from_i64(-5);
    let b = BigInt::from_i64(9);
    let e = exteuclid(&a, &b).unwrap();

    assert!(!e.u3.is_negative());
    assert_eq!(e.u3, gcd(&a, &b).unwrap());
    let lhs = e.u1.mul(&a).unwrap().add(&e.u2.mul(&b).unwrap()).unwrap();
    assert_eq!(lhs, e.u3);
}

#[test]
fn invmod_of_3_mod_11_is_4() {
    let a = BigInt::from_i64(3);
    let m = BigInt::from_i64(11);
    let inv = invmod(&a, &m).unwrap();
    assert_eq!(inv, BigInt::from_i64(4));
    assert!(a.mul(&inv).unwrap().modulo(&m).unwrap().is_one());
}

#[test]
fn invmod_of_a_negative_value_is_still_a_correct_inverse() {
    let a = BigInt::from_i64(-5);
    let m = BigInt::from_i64(9);
    let inv = invmod(&a, &m).unwrap();
    assert_eq!(inv, BigInt::from_i64(7));
    assert!(a.mul(&inv).unwrap().modulo(&m).unwrap().is_one());
}

#[test]
fn invmod_fails_when_not_coprime() {
    let a = BigInt::from_i64(6);
    let m = BigInt::from_i64(9);
    assert!(invmod(&a, &m).is_err());
}

#[test]
fn jacobi_symbol_of_known_values() {
    assert_eq!(jacobi(&BigInt::from_i64(1001), &BigInt::from_i64(9907)).unwrap(), -1);
    assert_eq!(jacobi(&BigInt::from_i64(2), &BigInt::from_i64(15)).unwrap(), 1);
}

#[test]
fn kronecker_symbol_handles_the_even_modulus_that_jacobi_rejects() {
    let a = BigInt::from_i64(5);
    let n = BigInt::from_i64(12);
    // (5|12) = (5|4)(5|3) = 1 * (-1) = -1, since 5 ≡ 2 mod 3 is a non-residue.
    assert_eq!(kronecker(&a, &n).unwrap(), -1);
}

#[test]
fn isqrt_of_a_perfect_square_is_exact() {
    let a = BigInt::from_i64(1_000_000 * 1_000_000);
    assert_eq!(isqrt(&a).unwrap(), BigInt::from_i64(1_000_000));
}

#[test]
fn isqrt_floors_a_non_square() {
    let a = BigInt::from_i64(10);
    let r = isqrt(&a).unwrap();
    assert_eq!(r, BigInt::from_i64(3));
    assert!(r.mul(&r).unwrap().cmp(&a) != std::cmp::Ordering::Greater);
    let next = r.add_digit(1).unwrap();
    assert!(next.mul(&next).unwrap().cmp(&a) == std::cmp::Ordering::Greater);
}

#[test]
fn nth_root_of_a_perfect_cube() {
    let a = BigInt::from_i64(-8);
    let r = nth_root(&a, 3).unwrap();
    assert_eq!(r, BigInt::from_i64(-2));
}

#[test]
fn nth_root_rejects_even_root_of_negative() {
    let a = BigInt::from_i64(-4);
    assert!(nth_root(&a, 2).is_err());
}

#[test]
fn sqrtmod_prime_of_10_mod_13_is_6_or_7() {
    let n = BigInt::from_i64(10);
    let p = BigInt::from_i64(13);
    let r = sqrtmod_prime(&n, &p).unwrap();
    assert!(r == BigInt::from_i64(6) || r == BigInt::from_i64(7));
    assert_eq!(r.mul(&r).unwrap().modulo(&p).unwrap(), n.modulo(&p).unwrap());
}

#[test]
fn sqrtmod_prime_rejects_a_quadratic_non_residue() {
    let n = BigInt::from_i64(2);
    let p = BigInt::from_i64(13);
    assert!(sqrtmod_prime(&n, &p).is_err());
}

#[test]
fn sqrtmod_prime_works_for_a_prime_not_congruent_to_3_mod_4() {
    // 17 ≡ 1 (mod 4): exercises the full Tonelli-Shanks path, not the
    // p ≡ 3 (mod 4) shortcut.
    let p = BigInt::from_i64(17);
    let n = BigInt::from_i64(15);
    let r = sqrtmod_prime(&n, &p).unwrap();
    assert_eq!(r.mul(&r).unwrap().modulo(&p).unwrap(), n.modulo(&p).unwrap());
}
