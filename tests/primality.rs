use bignum_core::bigint::BigInt;
use bignum_core::numtheory::gcd;
use bignum_core::prime::{RandPrimeFlags, is_prime, next_prime, rand_prime};
use bignum_core::rng::Csprng;

#[test]
fn small_primes_and_composites_are_classified_correctly() {
    for p in [2u64, 3, 5, 7, 11, 97, 7919] {
        assert!(is_prime(&BigInt::from_u64(p), -1).unwrap(), "{p} should be prime");
    }
    for c in [1u64, 4, 6, 9, 15, 100, 7921] {
        assert!(!is_prime(&BigInt::from_u64(c), -1).unwrap(), "{c} should be composite");
    }
}

#[test]
fn mersenne_prime_2_to_the_89_minus_1_is_probably_prime() {
    let n = BigInt::from_u64(1).shift_left_bits(89).unwrap().sub_digit(1).unwrap();
    assert!(is_prime(&n, 8).unwrap());
}

#[test]
fn composite_mersenne_number_2_to_the_67_minus_1_is_rejected() {
    let n = BigInt::from_u64(1).shift_left_bits(67).unwrap().sub_digit(1).unwrap();
    assert!(!is_prime(&n, 8).unwrap());
}

#[test]
fn carmichael_number_561_fails_as_composite() {
    // 561 = 3 * 11 * 17 passes Fermat to many bases but not the full test.
    let n = BigInt::from_u64(561);
    assert!(!is_prime(&n, -1).unwrap());
}

#[test]
fn next_prime_after_100_is_101() {
    let a = BigInt::from_u64(100);
    assert_eq!(next_prime(&a, 4, false).unwrap(), BigInt::from_u64(101));
}

#[test]
fn next_prime_bbs_style_after_100_is_103() {
    let a = BigInt::from_u64(100);
    assert_eq!(next_prime(&a, 4, true).unwrap(), BigInt::from_u64(103));
}

#[test]
fn next_prime_bbs_style_result_is_congruent_to_3_mod_4() {
    let a = BigInt::from_u64(1000);
    let p = next_prime(&a, 4, true).unwrap();
    assert_eq!(p.modulo(&BigInt::from_u64(4)).unwrap(), BigInt::from_u64(3));
}

#[test]
fn rand_prime_produces_a_prime_of_the_requested_size() {
    let mut rng = Csprng::from_seed([0x5au8; 32]);
    let p = rand_prime(64, RandPrimeFlags::NONE, -1, &mut rng).unwrap();
    assert!(is_prime(&p, -1).unwrap());
    assert_eq!(p.bit_count(), 64);
}

#[test]
fn rand_prime_bbs_flag_yields_a_candidate_congruent_to_3_mod_4() {
    let mut rng = Csprng::from_seed([0x5bu8; 32]);
    let p = rand_prime(48, RandPrimeFlags::BBS, -1, &mut rng).unwrap();
    assert_eq!(p.modulo(&BigInt::from_u64(4)).unwrap(), BigInt::from_u64(3));
}

#[test]
fn rand_prime_safe_flag_yields_a_prime_whose_half_predecessor_is_also_prime() {
    let mut rng = Csprng::from_seed([0x5cu8; 32]);
    let p = rand_prime(40, RandPrimeFlags::SAFE, -1, &mut rng).unwrap();
    assert!(is_prime(&p, -1).unwrap());
    let half = p.sub_digit(1).unwrap().div_by_two().unwrap();
    assert!(is_prime(&half, -1).unwrap());
}

#[test]
fn rand_prime_two_msb_flag_sets_the_second_highest_bit() {
    let mut rng = Csprng::from_seed([0x5du8; 32]);
    let p = rand_prime(48, RandPrimeFlags::TWO_MSB_ON, -1, &mut rng).unwrap();
    assert_eq!(p.get_bit(46).unwrap(), 1);
}

#[test]
fn gcd_of_two_distinct_primes_is_one() {
    let a = BigInt::from_u64(101);
    let b = BigInt::from_u64(103);
    assert!(gcd(&a, &b).unwrap().is_one());
}
