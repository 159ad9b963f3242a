//! Miller-Rabin probabilistic primality testing and random probable prime
//! generation with arbitrary precision, based on the `num` crates.
//!
//! The crate is built around three pieces:
//! - [pow_mod]: arbitrary precision modular exponentiation;
//! - [miller_rabin] and its front doors [is_probable_prime] /
//!   [is_probable_prime_with]: the witness loop with configurable round
//!   count (error bound `4^-rounds`);
//! - [PrimeRng]: an owned, explicitly seedable random integer source, with
//!   the [RandPrime] extension trait for searching random probable primes
//!   of a target bit length.
//!
//! The engine is generic over the [PrimalityBase] capability traits and is
//! instantiated both at [num_bigint::BigUint] and at the fixed-width
//! unsigned integers; the fixed-width instantiations stay exact because the
//! modular arithmetic widens internally. For `u64` inputs the deterministic
//! [is_prime64] shortcut is both faster and exact.
//!
//! Note that this tester classifies 1 as probably prime, a compatibility
//! convention kept from its ancestry; see [is_probable_prime].
//!
//! # Examples
//! ```
//! use num_bigint::{BigInt, BigUint};
//! use prob_prime::{is_probable_prime, PrimeRng, RandPrime};
//!
//! assert!(is_probable_prime(&BigInt::from(97), 25));
//! assert!(!is_probable_prime(&BigInt::from(91), 25));
//!
//! let mut rng = PrimeRng::new();
//! let p: BigUint = rng.gen_prime_exact(64, None);
//! assert_eq!(p.bits(), 64);
//! ```

mod integer;
mod power;
mod primality;
mod sieve;
mod traits;

pub mod nt_funcs;
pub mod rand;

pub use crate::nt_funcs::{is_prime64, is_probable_prime, is_probable_prime_with};
pub use crate::power::pow_mod;
pub use crate::primality::{miller_rabin, PrimalityBase, PrimalityRefBase};
pub use crate::rand::{EntropySource, OsEntropy, PrimeRng, DEFAULT_SEED_BYTES};
pub use crate::sieve::{has_small_factor, PrimeSieve, SMALL_PRIMES};
pub use crate::traits::{BitTest, PrimalityTestConfig, PrimalityUtils, RandPrime, UniformRange};
