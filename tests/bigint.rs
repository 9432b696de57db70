use bignum_core::bigint::BigInt;

#[test]
fn zero_stays_nonnegative_after_negation() {
    let zero = BigInt::new();
    assert!(!zero.neg().is_negative());
}

#[test]
fn add_then_sub_round_trips() {
    let a = BigInt::from_i64(-123_456_789);
    let b = BigInt::from_i64(987_654_321);

    let sum = a.add(&b).unwrap();
    let back = sum.sub(&b).unwrap();

    assert_eq!(back, a);
}

#[test]
fn magnitude_clamped_after_cancelling_subtraction() {
    let a = BigInt::from_u64(42);
    let b = BigInt::from_u64(42);

    let diff = a.sub(&b).unwrap();
    assert!(diff.is_zero());
    assert_eq!(diff.used(), 0);
    assert!(!diff.is_negative());
}

#[test]
fn shift_left_then_right_by_same_amount_identity() {
    let a = BigInt::from_u64(0xDEAD_BEEF_u64);
    let shifted = a.shift_left_bits(97).unwrap();
    let back = shifted.shift_right_bits(97).unwrap();
    assert_eq!(back, a);
}

#[test]
fn shift_right_bits_rem_recombines_to_original() {
    let a = BigInt::from_u64(0x1_0000_0001);
    let (hi, rem) = a.shift_right_bits_rem(9).unwrap();
    let back = hi.shift_left_bits(9).unwrap().add(&rem).unwrap();
    assert_eq!(back, a);
}

#[test]
fn get_bit_matches_manual_shifts() {
    let a = BigInt::from_u64(0b1011_0100);
    assert_eq!(a.get_bit(0).unwrap(), 0);
    assert_eq!(a.get_bit(2).unwrap(), 1);
    assert_eq!(a.get_bit(7).unwrap(), 1);
    assert_eq!(a.get_bit(8).unwrap(), 0);
}

#[test]
fn get_bit_rejects_negative_index() {
    let a = BigInt::from_u64(1);
    assert!(a.get_bit(-1).is_err());
}

#[test]
fn bit_count_and_lsb_zeros_of_a_power_of_two() {
    let a = BigInt::from_u64(1).shift_left_bits(130).unwrap();
    assert_eq!(a.bit_count(), 131);
    assert_eq!(a.lsb_zeros(), 130);
}

#[test]
fn mul_two_to_the_64_by_itself_is_2_to_the_128() {
    let a = BigInt::from_u64(1).shift_left_bits(64).unwrap();
    let product = a.mul(&a).unwrap();
    let expected = BigInt::from_u64(1).shift_left_bits(128).unwrap();
    assert_eq!(product, expected);
}

#[test]
fn schoolbook_comba_karatsuba_toom_agree_on_the_same_operands() {
    let mut rng = bignum_core::rng::Csprng::from_seed([7u8; 32]);
    let mut buf = [0u8; 200];
    rng.fill_bytes(&mut buf);
    let mut buf2 = [0u8; 210];
    rng.fill_bytes(&mut buf2);

    let a = from_be_bytes(&buf);
    let b = from_be_bytes(&buf2);

    let schoolbook = a.schoolbook_mul(&b).unwrap();
    let comba = a.comba_mul(&b).unwrap();
    let karatsuba = a.karatsuba_mul(&b).unwrap();
    let toom = a.toom3_mul(&b).unwrap();

    assert_eq!(schoolbook, comba);
    assert_eq!(schoolbook, karatsuba);
    assert_eq!(schoolbook, toom);
}

#[test]
fn sqr_matches_self_times_self_across_dispatch_paths() {
    let a = BigInt::from_u64(0xFFFF_FFFF_FFFF_FFF);
    let squared = a.sqr().unwrap();
    let multiplied = a.mul(&a).unwrap();
    assert_eq!(squared, multiplied);
}

fn from_be_bytes(bytes: &[u8]) -> BigInt {
    let mut out = BigInt::new();
    for &byte in bytes {
        out = out
            .shift_left_bits(8)
            .unwrap()
            .bitor_mag(&BigInt::from_u64(byte as u64))
            .unwrap();
    }
    out
}
