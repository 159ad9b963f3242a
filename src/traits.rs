use rand::Rng;

/// Bit-level access on an integer, as required by the witness decomposition
/// and the candidate construction. Usually maps directly onto the integer
/// type's own bit operations.
pub trait BitTest {
    /// Minimum number of bits required to represent the number (0 for zero)
    fn bits(&self) -> usize;

    /// Test the bit at `position`, counting from the least significant bit
    fn bit(&self, position: usize) -> bool;

    /// The exponent of factor 2 in the number, i.e. the number of trailing zero bits
    fn trailing_zeros(&self) -> usize;
}

/// Uniform sampling from a closed interval. This is the capability the
/// witness loop and the random integer source are written against, so that
/// one implementation serves the fixed-width and big integer backends.
pub trait UniformRange: Sized {
    /// Draw a value from `[lowest, highest]`, both ends included.
    ///
    /// Implementations may assume `lowest <= highest`; callers check the
    /// bounds (see [crate::PrimeRng::uniform]).
    fn uniform_inclusive<R: Rng + ?Sized>(rng: &mut R, lowest: &Self, highest: &Self) -> Self;
}

/// Single-witness strong probable prime test (one round of Miller-Rabin).
pub trait PrimalityUtils: Sized {
    /// Test if the integer is a strong probable prime to the given witness.
    ///
    /// A `false` answer proves the number composite; a `true` answer means
    /// the witness did not expose it.
    fn is_sprp(&self, witness: Self) -> bool;
}

/// Round counts for a probabilistic primality check.
///
/// `screen_rounds` are run first to cheaply reject most composites before
/// the full `rounds` are spent; a candidate is accepted only after passing
/// both stages. The residual error of an accepted candidate is bounded by
/// `4^-(screen_rounds + rounds)` in the worst case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimalityTestConfig {
    /// Number of witness rounds used for cheap pre-screening (0 disables the stage)
    pub screen_rounds: usize,
    /// Number of witness rounds a screened candidate must additionally pass
    pub rounds: usize,
}

impl Default for PrimalityTestConfig {
    fn default() -> Self {
        Self {
            screen_rounds: 2,
            rounds: 25,
        }
    }
}

impl PrimalityTestConfig {
    /// Create a configuration for cryptographic-scale candidates
    pub fn strict() -> Self {
        Self {
            screen_rounds: 2,
            rounds: 64,
        }
    }

    /// Create a configuration running exactly `rounds` full rounds after
    /// the default screening
    pub fn with_rounds(rounds: usize) -> Self {
        Self {
            rounds,
            ..Self::default()
        }
    }
}

/// Extension trait on [rand::Rng] for generating random probable primes.
pub trait RandPrime<T> {
    /// Generate a random probable prime with bit length **at most** `bit_size`.
    ///
    /// The candidate stream is screened by trial division against
    /// [crate::SMALL_PRIMES] and then tested per `config`
    /// ([PrimalityTestConfig::default] if `None`).
    ///
    /// # Panics
    /// Panics if `bit_size` is zero or exceeds the capacity of the target type.
    fn gen_prime(&mut self, bit_size: usize, config: Option<PrimalityTestConfig>) -> T;

    /// Generate a random probable prime with bit length **exactly** `bit_size`
    /// (the top bit is forced set).
    ///
    /// # Panics
    /// Panics if `bit_size` is zero or exceeds the capacity of the target type.
    fn gen_prime_exact(&mut self, bit_size: usize, config: Option<PrimalityTestConfig>) -> T;
}
