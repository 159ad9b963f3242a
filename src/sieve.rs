//! Small prime table and a growable sieve of Eratosthenes, used for trial
//! division screening and as an exact oracle in tests.

use bitvec::bitvec;
use num_integer::Integer;
use num_traits::FromPrimitive;

/// The first 64 primes, used for trial division screening of candidates.
pub const SMALL_PRIMES: [u32; 64] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311,
];

/// Quick check whether `n` is divisible by any of [SMALL_PRIMES].
///
/// Returns true only if `n` is definitely composite; a candidate equal to
/// one of the small primes is not reported as having a factor.
pub fn has_small_factor<T: Integer + FromPrimitive>(n: &T) -> bool {
    for &p in SMALL_PRIMES.iter() {
        let p = match T::from_u32(p) {
            Some(p) => p,
            // the type cannot even hold this prime
            None => break,
        };
        if n.is_multiple_of(&p) {
            return n > &p;
        }
    }
    false
}

/// A growable odd-only sieve of Eratosthenes keeping the list of all primes
/// below a watermark.
pub struct PrimeSieve {
    list: Vec<u64>, // list of found prime numbers
    current: u64,   // all primes below this odd number are in the list
}

impl PrimeSieve {
    pub fn new() -> Self {
        let list = vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
        PrimeSieve { list, current: 41 }
    }

    /// The largest prime found so far.
    #[inline]
    pub fn bound(&self) -> u64 {
        *self.list.last().unwrap()
    }

    /// Whether `num` is in the sieved prime list. Only meaningful for `num`
    /// below the reserved limit.
    #[inline]
    pub fn contains(&self, num: u64) -> bool {
        self.list.binary_search(&num).is_ok()
    }

    /// Extend the prime list to cover everything below `limit`.
    pub fn reserve(&mut self, limit: u64) {
        let odd_limit = limit | 1;
        if odd_limit <= self.current {
            return;
        }
        let current = self.current; // prevent borrowing self
        debug_assert!(current % 2 == 1);

        // create the sieve and filter it with the known primes
        let mut sieve = bitvec![0; ((odd_limit - current) / 2) as usize];
        for p in self.list.iter().skip(1) {
            // skip the pre-filtered 2
            let start = if p * p < current {
                p * ((current / p) | 1) // start from an odd multiple
            } else {
                p * p
            };
            for multi in (start..odd_limit).step_by(2 * (*p as usize)) {
                if multi >= current {
                    sieve.set(((multi - current) / 2) as usize, true);
                }
            }
        }

        // sieve with the newly found primes
        for p in (current..num_integer::sqrt(odd_limit) + 1).step_by(2) {
            for multi in (p * p..odd_limit).step_by(2 * (p as usize)) {
                if multi >= current {
                    sieve.set(((multi - current) / 2) as usize, true);
                }
            }
        }

        self.list
            .extend(sieve.iter_zeros().map(|x| (x as u64) * 2 + current));
        self.current = odd_limit;
    }

    /// Returns all primes **below** `limit`, sorted ascending.
    pub fn primes(&mut self, limit: u64) -> std::iter::Take<std::slice::Iter<u64>> {
        self.reserve(limit);
        let position = match self.list.binary_search(&limit) {
            Ok(p) => p,
            Err(p) => p,
        };
        self.list.iter().take(position)
    }

    /// The prime counting function: the number of primes not exceeding `limit`.
    pub fn prime_pi(&mut self, limit: u64) -> usize {
        self.reserve(limit.saturating_add(1));
        match self.list.binary_search(&limit) {
            Ok(p) => p + 1,
            Err(p) => p,
        }
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    const PRIME50: [u64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];
    const PRIME100: [u64; 25] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97,
    ];

    #[test]
    fn prime_generation() {
        let mut sieve = PrimeSieve::new();
        assert_eq!(sieve.primes(50).cloned().collect::<Vec<_>>(), PRIME50);
        assert_eq!(sieve.primes(100).cloned().collect::<Vec<_>>(), PRIME100);
        // shrinking the limit must not disturb the list
        assert_eq!(sieve.primes(50).cloned().collect::<Vec<_>>(), PRIME50);
    }

    #[test]
    fn prime_counting() {
        let mut sieve = PrimeSieve::new();
        assert_eq!(sieve.prime_pi(1), 0);
        assert_eq!(sieve.prime_pi(2), 1);
        assert_eq!(sieve.prime_pi(10), 4);
        assert_eq!(sieve.prime_pi(100), 25);
        assert_eq!(sieve.prime_pi(1000), 168);
        assert_eq!(sieve.prime_pi(10000), 1229);
    }

    #[test]
    fn sieve_membership() {
        let mut sieve = PrimeSieve::new();
        sieve.reserve(10000);
        assert!(sieve.contains(2));
        assert!(sieve.contains(9973));
        assert!(!sieve.contains(9999));
        assert!(sieve.bound() >= 9973);
    }

    #[test]
    fn small_factor_screen() {
        assert!(!has_small_factor(&1u64));
        assert!(!has_small_factor(&2u64));
        assert!(!has_small_factor(&311u64)); // the prime itself is not a hit
        assert!(!has_small_factor(&313u64));
        assert!(has_small_factor(&622u64));
        assert!(has_small_factor(&(311u64 * 313)));
        assert!(!has_small_factor(&(313u64 * 317)));

        let n = (BigUint::from(1u8) << 100u8) + 1u8; // divisible by 17
        assert!(has_small_factor(&n));
        let m89 = (BigUint::from(1u8) << 89u8) - 1u8; // a Mersenne prime
        assert!(!has_small_factor(&m89));

        // primes beyond the capacity of u8 are skipped instead of tried
        assert!(!has_small_factor(&1u8));
        assert!(has_small_factor(&253u8)); // 11 * 23
    }
}
