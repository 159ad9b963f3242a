#[macro_use]
extern crate criterion;
use criterion::Criterion;
use num_bigint::{BigInt, BigUint};
use prob_prime::{is_prime64, is_probable_prime_with, pow_mod, PrimeRng};

pub fn bench_pow_mod(c: &mut Criterion) {
    let base = BigUint::from(0x9e3779b97f4a7c15u64);
    let exponent = (BigUint::from(1u8) << 256u16) - 1u8;
    let modulus = (BigUint::from(1u8) << 255u16) - 19u8;
    let mut group = c.benchmark_group("pow_mod");

    group.bench_function("binary", |b| {
        b.iter(|| pow_mod(base.clone(), exponent.clone(), &modulus))
    });
    group.bench_function("num_bigint modpow", |b| {
        b.iter(|| base.modpow(&exponent, &modulus))
    });

    group.finish();
}

pub fn bench_is_prime(c: &mut Criterion) {
    const N: usize = 1_000_000;
    const STEP: usize = 101;
    let mut group = c.benchmark_group("is_prime");

    group.bench_function("64bit deterministic", |b| {
        b.iter(|| {
            (1..N)
                .step_by(STEP)
                .filter(|&n| is_prime64(n as u64))
                .count()
        })
    });
    group.bench_function("miller-rabin 25 rounds", |b| {
        let mut rng = PrimeRng::new();
        b.iter(|| {
            (1..N)
                .step_by(STEP)
                .filter(|&n| is_probable_prime_with(&BigInt::from(n), 25, &mut rng))
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_pow_mod, bench_is_prime);
criterion_main!(benches);
