//! The Miller-Rabin witness engine.

use crate::power::pow_mod;
use crate::traits::{BitTest, PrimalityUtils, UniformRange};
use num_integer::Integer;
use num_modular::{ModularCoreOps, ModularUnaryOps};
use num_traits::{FromPrimitive, NumRef, One, RefNum, Zero};
use rand::Rng;

/// The integer capabilities required by the primality engine, implemented by
/// the unsigned primitives and [num_bigint::BigUint] alike. The modular
/// operations come from `num-modular`, which widens fixed-width multiplies
/// internally so that no instantiation can overflow.
pub trait PrimalityBase:
    Integer
    + FromPrimitive
    + NumRef
    + Clone
    + BitTest
    + UniformRange
    + for<'r> ModularCoreOps<&'r Self, &'r Self, Output = Self>
    + for<'r> ModularUnaryOps<&'r Self, Output = Self>
{
}
impl<T> PrimalityBase for T where
    T: Integer
        + FromPrimitive
        + NumRef
        + Clone
        + BitTest
        + UniformRange
        + for<'r> ModularCoreOps<&'r Self, &'r Self, Output = Self>
        + for<'r> ModularUnaryOps<&'r Self, Output = Self>
{
}

/// Reference-side companion of [PrimalityBase].
pub trait PrimalityRefBase<Base>: RefNum<Base> + std::ops::Shr<usize, Output = Base> {}
impl<T, Base> PrimalityRefBase<Base> for T where
    T: RefNum<Base> + std::ops::Shr<usize, Output = Base>
{
}

/// Split an even `n - 1` into `d * 2^s` with `d` odd.
fn decompose<T>(tm1: &T) -> (T, usize)
where
    T: PrimalityBase,
    for<'r> &'r T: PrimalityRefBase<T>,
{
    let s = tm1.trailing_zeros();
    let d = tm1 >> s;
    (d, s)
}

/// Run one witness against the candidate, given the precomputed
/// decomposition `candidate - 1 = d * 2^s`. Returns false iff the witness
/// proves the candidate composite.
fn witness_round<T>(candidate: &T, tm1: &T, d: &T, s: usize, witness: T) -> bool
where
    T: PrimalityBase,
    for<'r> &'r T: PrimalityRefBase<T>,
{
    let mut x = pow_mod(witness, d.clone(), candidate);
    if x.is_one() || &x == tm1 {
        return true;
    }

    for _ in 1..s {
        x = x.sqm(candidate);
        if x.is_one() {
            // hit 1 from a nontrivial square root, definitely composite
            return false;
        }
        if &x == tm1 {
            return true;
        }
    }
    false
}

/// The Miller-Rabin probabilistic primality test with random witnesses.
///
/// Runs `rounds` independent trials, each drawing a witness uniformly from
/// `[2, candidate - 2]` out of `rng`. A `false` verdict is always correct;
/// a `true` verdict ("probably prime") carries a residual error probability
/// of at most `4^-rounds`, so zero rounds are vacuously true.
///
/// 1, 2 and 3 are reported prime, 1 by a long-standing convention of this
/// tester rather than by mathematical definition. Zero and even candidates
/// above 3 are rejected without consulting the generator.
pub fn miller_rabin<T, R>(candidate: &T, rounds: usize, rng: &mut R) -> bool
where
    T: PrimalityBase,
    for<'r> &'r T: PrimalityRefBase<T>,
    R: Rng + ?Sized,
{
    if candidate.is_zero() {
        return false;
    }
    if candidate <= &T::from_u8(3).unwrap() {
        return true;
    }
    if candidate.is_even() {
        return false;
    }

    let tm1 = candidate - T::one();
    let (d, s) = decompose(&tm1);
    debug_assert!(d.is_odd());

    let two = T::one() + T::one();
    let highest = candidate - &two;
    for _ in 0..rounds {
        let witness = T::uniform_inclusive(rng, &two, &highest);
        if !witness_round(candidate, &tm1, &d, s, witness) {
            return false;
        }
    }
    true
}

impl<T> PrimalityUtils for T
where
    T: PrimalityBase,
    for<'r> &'r T: PrimalityRefBase<T>,
{
    fn is_sprp(&self, witness: T) -> bool {
        if self <= &T::one() {
            return false;
        }

        let tm1 = self - T::one();
        let (d, s) = decompose(&tm1);
        witness_round(self, &tm1, &d, s, witness)
    }
}
