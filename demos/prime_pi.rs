//! Compute the prime counting function π(n) by brute force through the
//! probabilistic tester and compare against known values. A slow way to
//! count primes, but a good accuracy smoke test for the round count: with
//! only a few rounds an occasional false "probably prime" shows up as a
//! FAIL line.

use num_bigint::BigInt;
use prob_prime::{is_probable_prime_with, PrimeRng};

/// Rounds per candidate; error per verdict is at most 4^-20.
const ROUNDS: usize = 20;

/// The number of primes below n, by testing every integer in turn.
fn prime_pi_brute(n: u64, rng: &mut PrimeRng) -> u64 {
    (2..n)
        .filter(|&m| is_probable_prime_with(&BigInt::from(m), ROUNDS, rng))
        .count() as u64
}

fn main() {
    env_logger::init();

    println!("Calculating pi(n) with the Miller-Rabin tester, {} rounds per candidate\n", ROUNDS);

    let expected: [u64; 8] = [0, 4, 25, 168, 1229, 9592, 78498, 664579];
    let mut rng = PrimeRng::new();

    let mut n = 1u64;
    for &e in expected.iter() {
        let primes = prime_pi_brute(n, &mut rng);
        if primes == e {
            println!("There are {} primes less than {}", primes, n);
        } else {
            println!(
                "There are {} primes less than {} --- FAIL, expected {}",
                primes, n, e
            );
        }
        n *= 10;
    }
}
