//! Standalone primality functions that can be used without owning a
//! generator or a sieve.

use crate::rand::PrimeRng;
use crate::sieve::SMALL_PRIMES;
use crate::traits::PrimalityUtils;
use crate::primality::miller_rabin;
use num_bigint::BigInt;
use rand::Rng;
use std::convert::TryFrom;

/// Probabilistic primality test of an arbitrary precision integer.
///
/// The sign of `n` carries no meaning and is stripped before testing. Each
/// of the `rounds` trials draws its witness from a fresh, default-seeded
/// [PrimeRng]; use [is_probable_prime_with] to control the witness source.
///
/// By convention of this tester 1 is classified as probably prime even
/// though it is neither prime nor composite by definition.
pub fn is_probable_prime(n: &BigInt, rounds: usize) -> bool {
    let mut rng = PrimeRng::new();
    is_probable_prime_with(n, rounds, &mut rng)
}

/// Same as [is_probable_prime], with the witness generator supplied by the
/// caller. Seeding the generator explicitly makes the verdicts of this
/// function reproducible.
pub fn is_probable_prime_with<R: Rng + ?Sized>(n: &BigInt, rounds: usize, rng: &mut R) -> bool {
    miller_rabin(n.magnitude(), rounds, rng)
}

/// Fast deterministic primality test on a u64 integer, based on strong
/// probable prime tests against fixed witness sets. For larger targets or
/// controlled confidence use [is_probable_prime].
///
/// Unlike the probabilistic tester this function classifies 1 as composite.
pub fn is_prime64(target: u64) -> bool {
    // shortcuts
    if target == 0 {
        return false;
    }
    if target & 1 == 0 {
        return target == 2;
    }

    // first look up the prime table
    if target <= 311 {
        return SMALL_PRIMES.binary_search(&(target as u32)).is_ok();
    }

    // then do deterministic Miller-rabin tests
    // the witness collections are from http://miller-rabin.appspot.com/
    if let Ok(u) = u16::try_from(target) {
        // 2, 3 for u16 range
        return u.is_sprp(2) && u.is_sprp(3);
    }
    if let Ok(u) = u32::try_from(target) {
        // 2, 7, 61 for u32 range
        return u.is_sprp(2) && u.is_sprp(7) && u.is_sprp(61);
    }

    // 2, 325, 9375, 28178, 450775, 9780504, 1795265022 for u64 range
    const WITNESS64: [u64; 7] = [2, 325, 9375, 28178, 450775, 9780504, 1795265022];
    WITNESS64.iter().all(|&x| target.is_sprp(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::PrimeSieve;
    use std::collections::HashSet;

    #[test]
    fn edge_verdicts() {
        assert!(is_probable_prime(&BigInt::from(1), 20));
        assert!(is_probable_prime(&BigInt::from(2), 20));
        assert!(is_probable_prime(&BigInt::from(3), 20));
        assert!(!is_probable_prime(&BigInt::from(4), 20));
        assert!(!is_probable_prime(&BigInt::from(0), 20));

        // sign-blind
        assert!(is_probable_prime(&BigInt::from(-17), 20));
        assert!(!is_probable_prime(&BigInt::from(-18), 20));
    }

    #[test]
    fn agrees_with_sieve() {
        const LIMIT: u64 = 20_000;
        let mut sieve = PrimeSieve::new();
        let primes: HashSet<u64> = sieve.primes(LIMIT).cloned().collect();

        let mut rng = PrimeRng::new();
        for n in 0..LIMIT {
            let verdict = is_probable_prime_with(&BigInt::from(n), 20, &mut rng);
            // the tester accepts 1 by convention, the sieve does not list it
            let expected = primes.contains(&n) || n == 1;
            assert_eq!(verdict, expected, "disagreement with sieve at {}", n);
        }
    }

    #[test]
    fn engine_agrees_with_deterministic_u64() {
        let mut rng = PrimeRng::new();
        for _ in 0..300 {
            let n: u64 = rng.uniform(&2u64, &u64::MAX);
            let probable = miller_rabin(&n, 30, &mut rng);
            assert_eq!(probable, is_prime64(n), "disagreement at {}", n);
        }
    }

    #[test]
    fn prime64_known_values() {
        assert!(!is_prime64(0));
        assert!(!is_prime64(1));
        assert!(is_prime64(2));
        assert!(is_prime64(3));
        assert!(!is_prime64(4));
        assert!(is_prime64(311));
        assert!(!is_prime64(311 * 313));
        assert!(is_prime64(6469693333));
        assert!(is_prime64(2147483647)); // 2^31 - 1
        assert!(!is_prime64(2047)); // strong pseudoprime to base 2
        assert!(is_prime64(18446744073709551557)); // largest u64 prime
        assert!(!is_prime64(u64::MAX));
    }
}
