//! Benchmarks the multiplication dispatch ladder across the size ranges
//! that select schoolbook/Comba, Karatsuba, and Toom-3, so a change to the
//! cutoffs in `config.rs` can be judged against real timings rather than
//! guesswork.

use bignum_core::bigint::BigInt;
use bignum_core::rng::Csprng;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn random_bigint(rng: &mut Csprng, limbs: usize) -> BigInt {
    let mut acc = BigInt::from_u64(0);
    for _ in 0..limbs {
        let mut buf = [0u8; 8];
        rng.fill_bytes(&mut buf);
        let limb = u64::from_le_bytes(buf) & ((1u64 << 60) - 1);
        acc = acc.shift_left_bits(60).unwrap().add(&BigInt::from_u64(limb)).unwrap();
    }
    acc
}

fn bench_mul(c: &mut Criterion) {
    let mut rng = Csprng::from_seed([0x5Au8; 32]);
    let mut group = c.benchmark_group("mul_dispatch");

    // Below the Karatsuba cutoff: schoolbook/Comba.
    // Between the Karatsuba and Toom cutoffs: Karatsuba.
    // Above the Toom cutoff: Toom-Cook 3-way.
    for &limbs in &[16usize, 64, 200, 500] {
        let a = random_bigint(&mut rng, limbs);
        let b = random_bigint(&mut rng, limbs);
        group.bench_with_input(BenchmarkId::from_parameter(limbs), &limbs, |bencher, _| {
            bencher.iter(|| black_box(&a).mul(black_box(&b)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul);
criterion_main!(benches);
