//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for the distribution samplers.
//!
//! A router owns exactly one [`FairRng`]; constructing it from a seed makes
//! every generation request on that router reproducible, which is what
//! allows a supplied-value store to be replayed into an identical model.
//!
//! ## Usage Example
//!
//! ```rust
//! use fair_input::rng::FairRng;
//! use rand_distr::Normal;
//!
//! let mut rng = FairRng::from_seed(12345);
//! let normal = Normal::new(0.0, 1.0).unwrap();
//! let draws: Vec<f64> = rng.sample_n(&normal, 100);
//! assert_eq!(draws.len(), 100);
//! ```

mod prng;

pub use prng::FairRng;
