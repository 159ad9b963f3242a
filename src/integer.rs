//! Backend implementations for integers

use crate::traits::{BitTest, UniformRange};
use num_bigint::{BigInt, BigUint, RandBigInt};
use rand::Rng;

macro_rules! impl_bittest_prim {
    ($($T:ty)*) => {$(
        impl BitTest for $T {
            #[inline]
            fn bits(&self) -> usize {
                (<$T>::BITS - self.leading_zeros()) as usize
            }
            #[inline]
            fn bit(&self, position: usize) -> bool {
                self & (1 << position) > 0
            }
            #[inline]
            fn trailing_zeros(&self) -> usize {
                <$T>::trailing_zeros(*self) as usize
            }
        }
    )*}
}
impl_bittest_prim!(u8 u16 u32 u64 u128 usize);

impl BitTest for BigUint {
    fn bits(&self) -> usize {
        BigUint::bits(&self) as usize
    }
    fn bit(&self, position: usize) -> bool {
        self.bit(position as u64)
    }
    #[inline]
    fn trailing_zeros(&self) -> usize {
        match BigUint::trailing_zeros(&self) {
            Some(a) => a as usize,
            None => 0,
        }
    }
}

macro_rules! impl_uniformrange_prim {
    ($($T:ty)*) => {$(
        impl UniformRange for $T {
            #[inline]
            fn uniform_inclusive<R: Rng + ?Sized>(rng: &mut R, lowest: &Self, highest: &Self) -> Self {
                rng.gen_range(*lowest..=*highest)
            }
        }
    )*}
}
impl_uniformrange_prim!(u8 u16 u32 u64 u128 usize);

// The bigint samplers take an exclusive upper bound, so the closed interval
// becomes [lowest, highest + 1).
impl UniformRange for BigUint {
    fn uniform_inclusive<R: Rng + ?Sized>(rng: &mut R, lowest: &Self, highest: &Self) -> Self {
        rng.gen_biguint_range(lowest, &(highest + 1u32))
    }
}

impl UniformRange for BigInt {
    fn uniform_inclusive<R: Rng + ?Sized>(rng: &mut R, lowest: &Self, highest: &Self) -> Self {
        rng.gen_bigint_range(lowest, &(highest + 1i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_test() {
        assert_eq!(BitTest::bits(&0u64), 0);
        assert_eq!(BitTest::bits(&1u64), 1);
        assert_eq!(BitTest::bits(&255u64), 8);
        assert_eq!(BitTest::bits(&256u64), 9);
        assert!(BitTest::bit(&5u64, 0));
        assert!(!BitTest::bit(&5u64, 1));
        assert!(BitTest::bit(&5u64, 2));
        assert_eq!(BitTest::trailing_zeros(&40u64), 3);

        let big = BigUint::from(1u8) << 130u8;
        assert_eq!(BitTest::bits(&big), 131);
        assert!(BitTest::bit(&big, 130));
        assert!(!BitTest::bit(&big, 129));
        assert_eq!(BitTest::trailing_zeros(&big), 130);
        assert_eq!(BitTest::trailing_zeros(&BigUint::from(0u8)), 0);
    }

    #[test]
    fn uniform_range_matches_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let v = u64::uniform_inclusive(&mut rng, &10, &20);
            assert!((10..=20).contains(&v));
        }

        let lo = BigUint::from(u128::MAX) * 3u8;
        let hi = &lo + 100u8;
        for _ in 0..1000 {
            let v = BigUint::uniform_inclusive(&mut rng, &lo, &hi);
            assert!(lo <= v && v <= hi);
        }

        let lo = BigInt::from(-50);
        let hi = BigInt::from(-40);
        for _ in 0..1000 {
            let v = BigInt::uniform_inclusive(&mut rng, &lo, &hi);
            assert!(lo <= v && v <= hi);
        }
    }
}
