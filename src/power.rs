//! Modular exponentiation

use crate::primality::{PrimalityBase, PrimalityRefBase};
use num_integer::Integer;
use num_modular::{ModularCoreOps, ModularUnaryOps};
use num_traits::{One, Zero};

/// Compute `base ^ exponent mod modulus` through right-to-left binary
/// exponentiation.
///
/// The base is squared modulo `modulus` at each step while the exponent is
/// halved, and the squares at set exponent bits are multiplied into the
/// accumulator, taking O(log(exponent)) modular multiplications in total.
/// Intermediate products are reduced at every step, so the fixed-width
/// instantiations are as exact as the big integer one (the multiplications
/// widen internally instead of wrapping).
///
/// The result is fully reduced: `0 <= result < modulus`, and a modulus of 1
/// yields 0.
pub fn pow_mod<T>(base: T, exponent: T, modulus: &T) -> T
where
    T: PrimalityBase,
    for<'r> &'r T: PrimalityRefBase<T>,
{
    let mut result = T::one() % modulus;
    let mut base = base % modulus;
    let mut exponent = exponent;

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = result.mulm(&base, modulus);
        }
        exponent = &exponent >> 1;
        base = base.sqm(modulus);
    }
    result
}
