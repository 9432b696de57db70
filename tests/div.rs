use bignum_core::bigint::BigInt;

#[test]
fn div_rem_satisfies_a_eq_q_times_b_plus_r() {
    let a = BigInt::from_i64(-1_000_003);
    let b = BigInt::from_i64(97);

    let dr = a.div_rem(&b).unwrap();
    let reconstructed = dr.quotient.mul(&b).unwrap().add(&dr.remainder).unwrap();
    assert_eq!(reconstructed, a);
}

#[test]
fn remainder_follows_dividend_sign_not_divisor() {
    let a = BigInt::from_i64(-7);
    let b = BigInt::from_i64(3);
    let r = a.rem(&b).unwrap();
    assert!(r.is_negative() || r.is_zero());
}

#[test]
fn modulo_is_always_in_zero_to_divisor_range() {
    let a = BigInt::from_i64(-7);
    let m = BigInt::from_i64(3);
    let r = a.modulo(&m).unwrap();
    assert!(!r.is_negative());
    assert!(r.cmp(&m) == std::cmp::Ordering::Less);
}

#[test]
fn div_by_zero_is_an_error() {
    let a = BigInt::from_u64(1);
    let z = BigInt::new();
    assert!(a.div_rem(&z).is_err());
}

#[test]
fn knuth_division_matches_single_digit_division_for_a_one_limb_divisor() {
    let a = BigInt::from_u64(1).shift_left_bits(400).unwrap().add_digit(9).unwrap();
    let b = BigInt::from_u64(7);

    let dr = a.div_rem(&b).unwrap();
    let (q2, r2) = a.div_by_digit(7).unwrap();

    assert_eq!(dr.quotient, q2);
    assert_eq!(dr.remainder, BigInt::from_u64(r2));
}

#[test]
fn knuth_division_handles_a_multi_limb_divisor() {
    let a = BigInt::from_u64(1).shift_left_bits(512).unwrap();
    let b = BigInt::from_u64(1).shift_left_bits(200).unwrap().add_digit(13).unwrap();

    let dr = a.div_rem(&b).unwrap();
    let reconstructed = dr.quotient.mul(&b).unwrap().add(&dr.remainder).unwrap();
    assert_eq!(reconstructed, a);
    assert!(dr.remainder.cmp_mag(&b) == std::cmp::Ordering::Less);
}
