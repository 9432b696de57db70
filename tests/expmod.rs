use bignum_core::bigint::BigInt;
use bignum_core::expmod::exptmod;

#[test]
fn two_to_the_tenth_mod_a_prime() {
    let g = BigInt::from_i64(2);
    let x = BigInt::from_i64(10);
    let p = BigInt::from_i64(1_000_000_007);
    assert_eq!(exptmod(&g, &x, &p).unwrap(), BigInt::from_i64(1024));
}

#[test]
fn four_to_the_13th_mod_497_is_445() {
    let g = BigInt::from_i64(4);
    let x = BigInt::from_i64(13);
    let p = BigInt::from_i64(497);
    assert_eq!(exptmod(&g, &x, &p).unwrap(), BigInt::from_i64(445));
}

#[test]
fn exponent_zero_is_always_one_mod_p() {
    let g = BigInt::from_i64(123456);
    let x = BigInt::new();
    let p = BigInt::from_i64(97);
    assert_eq!(exptmod(&g, &x, &p).unwrap(), BigInt::from_i64(1));
}

#[test]
fn modulus_one_is_always_zero() {
    let g = BigInt::from_i64(5);
    let x = BigInt::from_i64(5);
    let p = BigInt::from_i64(1);
    assert!(exptmod(&g, &x, &p).unwrap().is_zero());
}

#[test]
fn negative_exponent_is_rejected() {
    let g = BigInt::from_i64(5);
    let x = BigInt::from_i64(-1);
    let p = BigInt::from_i64(97);
    assert!(exptmod(&g, &x, &p).is_err());
}

#[test]
fn even_modulus_uses_a_non_montgomery_reduction_and_still_agrees_with_plain_modulo() {
    // 2^61 - 1 is odd; use 2 * (2^61 - 1) so the dispatcher cannot pick
    // Montgomery and must fall through to Barrett or a 2^k-family context.
    let base = BigInt::from_u64(1).shift_left_bits(61).unwrap().sub_digit(1).unwrap();
    let p = base.mul(&BigInt::from_i64(2)).unwrap();
    let g = BigInt::from_i64(7);
    let x = BigInt::from_i64(1000);

    let via_exptmod = exptmod(&g, &x, &p).unwrap();

    let mut acc = BigInt::from_i64(1);
    for _ in 0..1000 {
        acc = acc.mul(&g).unwrap().modulo(&p).unwrap();
    }
    assert_eq!(via_exptmod, acc);
}

#[test]
fn large_exponent_exercises_a_wide_sliding_window() {
    let g = BigInt::from_i64(3);
    let x = BigInt::from_u64(1).shift_left_bits(300).unwrap().add_digit(17).unwrap();
    let p = BigInt::from_u64(1).shift_left_bits(255).unwrap().sub_digit(19).unwrap();

    let result = exptmod(&g, &x, &p).unwrap();
    assert!(result.cmp(&p) == std::cmp::Ordering::Less);
    assert!(!result.is_negative());
}
