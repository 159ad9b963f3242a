//! The random integer source and the probable prime search driver.

use crate::primality::miller_rabin;
use crate::sieve::has_small_factor;
use crate::traits::{PrimalityTestConfig, RandPrime, UniformRange};
use log::warn;
use num_bigint::{BigUint, RandBigInt};
use rand::rngs::StdRng;
use rand::{Error, Rng, RngCore, SeedableRng};
use std::fs::File;
use std::io::{self, Read};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of entropy bytes consumed when a generator seeds itself lazily.
pub const DEFAULT_SEED_BYTES: usize = 32;

/// A byte stream of OS-provided randomness, consumed only during seeding.
pub trait EntropySource {
    /// Fill the whole buffer with entropy bytes, or fail as a whole.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

/// The default entropy source, reading from `/dev/urandom`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        File::open("/dev/urandom")?.read_exact(buf)
    }
}

/// The random integer source feeding the witness loop and the candidate
/// search.
///
/// A `PrimeRng` is an explicitly owned value; nothing is shared behind the
/// scenes, so concurrent use requires either external synchronization or
/// one instance per thread. The underlying PRNG is created lazily on the
/// first draw, seeded with [DEFAULT_SEED_BYTES] bytes of entropy, unless
/// [seed](PrimeRng::seed) was called first. [release](PrimeRng::release)
/// drops the PRNG state and returns to the uninitialized state.
///
/// Both the PRNG type and the entropy source are injectable, which is how
/// the tests obtain reproducible draws. `PrimeRng` also implements
/// [rand::RngCore], so all `rand` ecosystem APIs, including [RandPrime],
/// work on it directly.
pub struct PrimeRng<R: RngCore + SeedableRng = StdRng, E: EntropySource = OsEntropy> {
    rng: Option<R>,
    entropy: E,
}

impl PrimeRng {
    /// Create an uninitialized generator backed by the OS entropy device.
    pub fn new() -> Self {
        PrimeRng {
            rng: None,
            entropy: OsEntropy,
        }
    }
}

impl Default for PrimeRng {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + SeedableRng, E: EntropySource> PrimeRng<R, E> {
    /// Create an uninitialized generator drawing its seed material from the
    /// given entropy source.
    pub fn with_entropy(entropy: E) -> Self {
        PrimeRng { rng: None, entropy }
    }

    /// Wrap an already seeded PRNG. No lazy seeding will take place until
    /// the generator is released.
    pub fn with_rng(rng: R, entropy: E) -> Self {
        PrimeRng {
            rng: Some(rng),
            entropy,
        }
    }

    /// (Re)seed the generator.
    ///
    /// With `entropy_bytes > 0`, that many bytes are read from the entropy
    /// source and folded, most significant byte first, into the PRNG seed.
    /// If the entropy source fails, a warning is logged and a coarse
    /// time-based seed is used instead. With `entropy_bytes == 0` the time
    /// seed is used directly.
    ///
    /// Returns the number of entropy bytes actually consumed, which is 0
    /// whenever the time fallback was taken.
    pub fn seed(&mut self, entropy_bytes: usize) -> usize {
        if entropy_bytes > 0 {
            let mut bytes = vec![0u8; entropy_bytes];
            match self.entropy.fill(&mut bytes) {
                Ok(()) => {
                    self.rng = Some(Self::seed_from_bytes(&bytes));
                    return entropy_bytes;
                }
                Err(e) => warn!("entropy source unavailable ({}), seeding from the clock", e),
            }
        }
        self.rng = Some(R::seed_from_u64(clock_seed()));
        0
    }

    // Fold the entropy bytes into a single big integer seed, then spread it
    // over the PRNG's seed array so every byte contributes even when the
    // array is shorter than the input.
    fn seed_from_bytes(bytes: &[u8]) -> R {
        let folded = BigUint::from_bytes_be(bytes);
        let mut seed = R::Seed::default();
        let dest = seed.as_mut();
        for (i, b) in folded.to_bytes_be().iter().enumerate() {
            dest[i % dest.len()] ^= b;
        }
        R::from_seed(seed)
    }

    /// Draw a value uniformly from the closed interval `[lowest, highest]`.
    ///
    /// When `lowest == highest` the bound is returned directly without
    /// consulting (or lazily initializing) the generator.
    ///
    /// # Panics
    /// Panics if `lowest > highest`.
    pub fn uniform<T>(&mut self, lowest: &T, highest: &T) -> T
    where
        T: UniformRange + Clone + PartialOrd,
    {
        assert!(lowest <= highest, "invalid range: lowest > highest");
        if lowest == highest {
            return lowest.clone();
        }
        T::uniform_inclusive(self.generator(), lowest, highest)
    }

    /// Drop the PRNG state and return to the uninitialized state. The next
    /// draw seeds itself afresh.
    pub fn release(&mut self) {
        self.rng = None;
    }

    fn generator(&mut self) -> &mut R {
        if self.rng.is_none() {
            self.seed(DEFAULT_SEED_BYTES);
        }
        self.rng.as_mut().unwrap()
    }
}

impl<R: RngCore + SeedableRng, E: EntropySource> RngCore for PrimeRng<R, E> {
    fn next_u32(&mut self) -> u32 {
        self.generator().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.generator().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generator().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.generator().try_fill_bytes(dest)
    }
}

fn clock_seed() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    now.as_secs() ^ u64::from(now.subsec_nanos())
}

macro_rules! impl_randprime_prim {
    ($($T:ty)*) => {$(
        impl<R: Rng + ?Sized> RandPrime<$T> for R {
            fn gen_prime(&mut self, bit_size: usize, config: Option<PrimalityTestConfig>) -> $T {
                assert!(bit_size > 0, "the target bit size cannot be zero");
                if bit_size > (<$T>::BITS as usize) {
                    panic!("the target bit size exceeds the capacity of the integer type")
                }
                let config = config.unwrap_or_default();

                loop {
                    let t: $T = self.gen();
                    let mut t = t >> (<$T>::BITS as usize - bit_size);
                    if bit_size > 2 {
                        t |= 1; // filter even numbers
                    }
                    if bit_size > 1 && t < 2 {
                        continue;
                    }
                    if has_small_factor(&t) {
                        continue;
                    }
                    if miller_rabin(&t, config.screen_rounds, self)
                        && miller_rabin(&t, config.rounds, self)
                    {
                        break t;
                    }
                }
            }

            fn gen_prime_exact(&mut self, bit_size: usize, config: Option<PrimalityTestConfig>) -> $T {
                assert!(bit_size > 0, "the target bit size cannot be zero");
                if bit_size > (<$T>::BITS as usize) {
                    panic!("the target bit size exceeds the capacity of the integer type")
                }
                let config = config.unwrap_or_default();

                loop {
                    let t: $T = self.gen();
                    let mut t = t >> (<$T>::BITS as usize - bit_size);
                    t |= (1 as $T) << (bit_size - 1);
                    if bit_size > 2 {
                        t |= 1; // filter even numbers
                    }
                    if has_small_factor(&t) {
                        continue;
                    }
                    if miller_rabin(&t, config.screen_rounds, self)
                        && miller_rabin(&t, config.rounds, self)
                    {
                        break t;
                    }
                }
            }
        }
    )*}
}
impl_randprime_prim!(u8 u16 u32 u64 u128);

impl<R: Rng + ?Sized> RandPrime<BigUint> for R {
    fn gen_prime(&mut self, bit_size: usize, config: Option<PrimalityTestConfig>) -> BigUint {
        assert!(bit_size > 0, "the target bit size cannot be zero");
        let config = config.unwrap_or_default();
        let two = BigUint::from(2u8);

        loop {
            let mut t = self.gen_biguint(bit_size as u64);
            if bit_size > 2 {
                t.set_bit(0, true); // filter even numbers
            }
            if bit_size > 1 && t < two {
                continue;
            }
            if has_small_factor(&t) {
                continue;
            }
            if miller_rabin(&t, config.screen_rounds, self)
                && miller_rabin(&t, config.rounds, self)
            {
                break t;
            }
        }
    }

    fn gen_prime_exact(&mut self, bit_size: usize, config: Option<PrimalityTestConfig>) -> BigUint {
        assert!(bit_size > 0, "the target bit size cannot be zero");
        let config = config.unwrap_or_default();

        loop {
            let mut t = self.gen_biguint(bit_size as u64);
            t.set_bit(bit_size as u64 - 1, true);
            if bit_size > 2 {
                t.set_bit(0, true); // filter even numbers
            }
            if has_small_factor(&t) {
                continue;
            }
            if miller_rabin(&t, config.screen_rounds, self)
                && miller_rabin(&t, config.rounds, self)
            {
                break t;
            }
        }
    }
}
