use bignum_core::bigint::BigInt;
use bignum_core::reduce::{BarrettCtx, DrCtx, MontgomeryCtx, Pow2Ctx, Pow2LargeCtx};

fn modulus_2_255_minus_19() -> BigInt {
    BigInt::from_u64(1)
        .shift_left_bits(255)
        .unwrap()
        .sub_digit(19)
        .unwrap()
}

#[test]
fn barrett_matches_plain_modulo() {
    let m = modulus_2_255_minus_19();
    let ctx = BarrettCtx::setup(&m).unwrap();

    let x = BigInt::from_u64(1).shift_left_bits(400).unwrap().add_digit(7).unwrap();
    let expected = x.modulo(&m).unwrap();
    assert_eq!(ctx.reduce(&x).unwrap(), expected);
}

#[test]
fn montgomery_round_trips_through_domain_and_back() {
    let m = BigInt::from_u64(1_000_000_007 * 2 + 1); // odd modulus
    let ctx = MontgomeryCtx::setup(&m).unwrap();

    let x = BigInt::from_u64(123_456);
    let domain = ctx.to_domain(&x).unwrap();
    let back = ctx.reduce(&domain).unwrap();
    assert_eq!(back, x.modulo(&m).unwrap());
}

#[test]
fn montgomery_reduce_matches_plain_modulo_for_a_raw_product() {
    let m = BigInt::from_u64(97);
    let ctx = MontgomeryCtx::setup(&m).unwrap();

    let a = ctx.to_domain(&BigInt::from_u64(11)).unwrap();
    let b = ctx.to_domain(&BigInt::from_u64(13)).unwrap();
    let product = a.mul(&b).unwrap();
    let reduced = ctx.reduce(&product).unwrap();
    let domain_product = ctx.to_domain(&BigInt::from_u64(11 * 13)).unwrap();
    assert_eq!(reduced, domain_product);
}

#[test]
fn dr_is_applicable_for_2_to_the_k_minus_small_c() {
    let m = BigInt::from_u64(1).shift_left_digits(3).unwrap().sub_digit(5).unwrap();
    assert!(DrCtx::is_applicable(&m));
    let ctx = DrCtx::setup(&m).unwrap();

    let x = BigInt::from_u64(1).shift_left_digits(5).unwrap().add_digit(3).unwrap();
    let expected = x.modulo(&m).unwrap();
    assert_eq!(ctx.reduce(&x).unwrap(), expected);
}

#[test]
fn dr_is_not_applicable_for_an_arbitrary_modulus() {
    let m = BigInt::from_u64(97);
    assert!(!DrCtx::is_applicable(&m));
}

#[test]
fn pow2_matches_plain_modulo() {
    let m = BigInt::from_u64(1).shift_left_bits(61).unwrap().sub_digit(1).unwrap();
    let (_, _) = Pow2Ctx::is_applicable(&m).unwrap();
    let ctx = Pow2Ctx::setup(&m).unwrap();

    let x = BigInt::from_u64(1).shift_left_bits(130).unwrap().add_digit(5).unwrap();
    let expected = x.modulo(&m).unwrap();
    assert_eq!(ctx.reduce(&x).unwrap(), expected);
}

#[test]
fn pow2_large_matches_plain_modulo_when_k_does_not_fit_a_limb() {
    let k = BigInt::from_u64(1).shift_left_bits(70).unwrap().add_digit(3).unwrap();
    let p = 400u32;
    let m = BigInt::from_u64(1).shift_left_bits(p).unwrap().sub(&k).unwrap();
    assert!(Pow2LargeCtx::is_applicable(&m).is_some());
    let ctx = Pow2LargeCtx::setup(&m).unwrap();

    let x = BigInt::from_u64(1).shift_left_bits(800).unwrap().add_digit(11).unwrap();
    let expected = x.modulo(&m).unwrap();
    assert_eq!(ctx.reduce(&x).unwrap(), expected);
}
