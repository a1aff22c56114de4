//! Pseudo-random number generator wrapper for input sampling.
//!
//! This module provides [`FairRng`], a PRNG wrapper that records the seed
//! it was initialised with so generation runs can be reproduced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Distribution;

/// Random number generator owned by an input router.
///
/// # Examples
///
/// ```rust
/// use fair_input::rng::FairRng;
///
/// let mut rng1 = FairRng::from_seed(42);
/// let mut rng2 = FairRng::from_seed(42);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
/// assert_eq!(rng1.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct FairRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, if one was supplied.
    seed: Option<u64>,
}

impl FairRng {
    /// Creates a new RNG initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of samples.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a new RNG seeded from operating system entropy.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Creates an RNG from an optional seed, falling back to entropy.
    #[inline]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation, or `None` for entropy.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Draws one value from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.inner)
    }

    /// Draws `count` i.i.d. values from `dist`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fair_input::rng::FairRng;
    /// use rand_distr::Bernoulli;
    ///
    /// let mut rng = FairRng::from_seed(7);
    /// let always = Bernoulli::new(1.0).unwrap();
    /// assert!(rng.sample_n(&always, 10).into_iter().all(|b| b));
    /// ```
    pub fn sample_n<T, D: Distribution<T>>(&mut self, dist: &D, count: usize) -> Vec<T> {
        (0..count).map(|_| self.sample(dist)).collect()
    }
}
