//! Find random probable primes with doubling bit lengths, each tested with
//! `1 + bits / 2` Miller-Rabin rounds after a cheap two-round screen.
//!
//! The first result is 1, the only candidate at bit length 1, which the
//! tester accepts by its compatibility convention.

use num_bigint::BigUint;
use prob_prime::{PrimalityTestConfig, PrimeRng, RandPrime};

fn main() {
    env_logger::init();

    let mut rng = PrimeRng::new();
    let mut bits = 1usize;
    loop {
        let rounds = 1 + bits / 2;
        println!("Finding {}-bit prime w/ {} rounds ...", bits, rounds);

        let config = PrimalityTestConfig {
            screen_rounds: 2,
            rounds,
        };
        let p: BigUint = rng.gen_prime_exact(bits, Some(config));
        println!("{}\n", p);

        bits *= 2;
    }
}
