//! # Input Router
//!
//! Classifies caller-supplied parameters into a distribution family,
//! validates them against target-specific rules, draws samples and records
//! the parameters used.
//!
//! ## Single-target pipeline
//!
//! 1. Reject non-finite values and out-of-range sample counts
//! 2. Bounded targets: every value except `stdev` must lie in [0, 1]
//! 3. Bernoulli-only targets: force the Bernoulli sampler
//! 4. Otherwise: family → required keywords → non-negativity → sampler
//!    (PERT checks ordering before drawing)
//! 5. Bounded targets: clip every sample into [0, 1]
//!
//! ## Usage Example
//!
//! ```rust
//! use fair_input::router::{InputRouter, RouterConfig};
//! use fair_input::types::{Keyword, ParameterSet};
//!
//! let config = RouterConfig::builder().seed(42).build().unwrap();
//! let mut router = InputRouter::with_config(config);
//!
//! let samples = router
//!     .generate("Loss Magnitude", 1_000, &ParameterSet::pert(1.0, 2.0, 3.0))
//!     .unwrap();
//! assert_eq!(samples.len(), 1_000);
//!
//! // The stored copy makes the default shape explicit
//! let stored = router.supplied_values().get("Loss Magnitude").unwrap();
//! assert_eq!(stored.as_single().unwrap().get(Keyword::Gamma), Some(4.0));
//! ```

mod combined;
mod config;
pub mod validation;

pub use combined::strip_multi_prefix;
pub use config::{ConfigError, RouterConfig, RouterConfigBuilder, MAX_SAMPLES, SEED_ENV_VAR};

use std::collections::BTreeMap;

use crate::distributions::DEFAULT_GAMMA;
use crate::error::InputError;
use crate::rng::FairRng;
use crate::store::{SuppliedValue, SuppliedValueStore};
use crate::types::{DistributionFamily, Keyword, ParameterSet};

use validation::{
    check_bounded_target, check_finite, check_non_negative, check_required_keywords,
    determine_family,
};

/// Routes generation requests for one risk model.
///
/// Owns the configuration, the random number generator and the
/// supplied-value store for the lifetime of the model. A router is not
/// shared across threads; use one router per model.
#[derive(Clone, Debug)]
pub struct InputRouter {
    config: RouterConfig,
    rng: FairRng,
    supplied: SuppliedValueStore,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Creates a router with the default FAIR configuration, seeded from entropy.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Creates a router from `config`.
    ///
    /// The RNG is seeded from `config.seed()` when present.
    pub fn with_config(config: RouterConfig) -> Self {
        let rng = FairRng::from_optional_seed(config.seed());
        Self {
            config,
            rng,
            supplied: SuppliedValueStore::new(),
        }
    }

    /// Returns the router configuration.
    #[inline]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Returns the seed the RNG was initialised with, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }

    /// Returns the record of parameters used by successful requests.
    #[inline]
    pub fn supplied_values(&self) -> &SuppliedValueStore {
        &self.supplied
    }

    /// Consumes the router, returning its supplied-value store.
    pub fn into_supplied_values(self) -> SuppliedValueStore {
        self.supplied
    }

    /// Generates `count` samples for `target` and records the parameters.
    ///
    /// The recorded copy has `gamma` set to the default shape when `low`
    /// was supplied without it. The record is written only on success and
    /// replaces any earlier entry for `target`.
    ///
    /// # Errors
    ///
    /// Any [`InputError`] raised by [`generate_single`](Self::generate_single).
    pub fn generate(
        &mut self,
        target: &str,
        count: usize,
        params: &ParameterSet,
    ) -> Result<Vec<f64>, InputError> {
        let samples = self.generate_single(target, count, params)?;
        self.supplied
            .record_single(target, params.normalized(DEFAULT_GAMMA));
        Ok(samples)
    }

    /// Generates `count` samples for `target` without recording them.
    ///
    /// # Errors
    ///
    /// - [`InputError::InvalidSampleCount`] if `count` is 0 or above the configured maximum
    /// - [`InputError::NonFiniteValue`] for NaN or infinite values
    /// - [`InputError::OutOfRange`] for bounded targets given values outside [0, 1]
    /// - [`InputError::EmptyParameters`], [`InputError::MixedKeywords`],
    ///   [`InputError::MissingKeyword`], [`InputError::NegativeValue`],
    ///   [`InputError::PertOrdering`] from family validation
    /// - [`InputError::Distribution`] if the sampling primitive rejects the parameters
    pub fn generate_single(
        &mut self,
        target: &str,
        count: usize,
        params: &ParameterSet,
    ) -> Result<Vec<f64>, InputError> {
        self.check_count(count)?;
        check_finite(params)?;

        let bounded = self.config.is_bounded(target);
        if bounded {
            check_bounded_target(target, params)?;
        }

        let family = if self.config.is_bernoulli_only(target) {
            bernoulli_only_family(target, params)?
        } else {
            let family = determine_family(params)?;
            check_required_keywords(family, params)?;
            check_non_negative(params)?;
            family
        };

        let mut samples = (family.sampler())(&mut self.rng, count, params)?;

        if bounded {
            let clipped = clip_unit_interval(&mut samples);
            if clipped > 0 {
                tracing::debug!(node = %target, clipped, "clipped samples into [0, 1]");
            }
        }

        tracing::debug!(node = %target, family = %family, count, "generated samples");
        Ok(samples)
    }

    /// Regenerates every entry of `store` with `count` samples each.
    ///
    /// Single entries go through [`generate`](Self::generate) and combined
    /// entries through [`generate_multi`](Self::generate_multi). Entries
    /// are staged on a copy of this router and committed together, so this
    /// router's store and RNG change only if every entry succeeds.
    ///
    /// # Errors
    ///
    /// The first [`InputError`] raised by any entry.
    pub fn replay(
        &mut self,
        store: &SuppliedValueStore,
        count: usize,
    ) -> Result<BTreeMap<String, Vec<f64>>, InputError> {
        let mut staged = InputRouter {
            config: self.config.clone(),
            rng: self.rng.clone(),
            supplied: SuppliedValueStore::new(),
        };

        let mut results = BTreeMap::new();
        for (key, value) in store {
            let samples = match value {
                SuppliedValue::Single(params) => staged.generate(key, count, params)?,
                SuppliedValue::Combined(nested) => staged.generate_multi(key, count, nested)?,
            };
            results.insert(key.clone(), samples);
        }

        self.rng = staged.rng;
        self.supplied.absorb(staged.supplied);
        Ok(results)
    }

    fn check_count(&self, count: usize) -> Result<(), InputError> {
        let max = self.config.max_samples();
        if count == 0 || count > max {
            return Err(InputError::InvalidSampleCount { count, max });
        }
        Ok(())
    }
}

/// Validates `p` for a bernoulli-only target, bypassing family mixing.
///
/// Only `p` is required and sign-checked. Other keywords take no part in
/// family validation, though the finiteness and bounded-range checks that
/// run before this one still cover them.
fn bernoulli_only_family(
    target: &str,
    params: &ParameterSet,
) -> Result<DistributionFamily, InputError> {
    let family = DistributionFamily::Bernoulli;
    let p = params.require(family, Keyword::P)?;
    if p < 0.0 {
        return Err(InputError::NegativeValue {
            keyword: Keyword::P,
            value: p,
        });
    }

    let ignored: Vec<Keyword> = params.keywords().filter(|k| *k != Keyword::P).collect();
    if !ignored.is_empty() {
        tracing::warn!(
            node = %target,
            ?ignored,
            "bernoulli-only target ignores keywords other than p"
        );
    }
    Ok(family)
}

/// Clamps every sample into [0, 1], returning how many were changed.
fn clip_unit_interval(samples: &mut [f64]) -> usize {
    let mut clipped = 0;
    for sample in samples.iter_mut() {
        let bounded = sample.clamp(0.0, 1.0);
        if bounded != *sample {
            *sample = bounded;
            clipped += 1;
        }
    }
    clipped
}
