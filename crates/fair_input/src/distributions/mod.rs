//! # Distribution Samplers
//!
//! Four stateless sampling adapters, one per [`DistributionFamily`]. Each
//! maps `(rng, count, parameters)` to `count` samples and is reached through
//! [`DistributionFamily::sampler`], never called by keyword inspection.
//!
//! Normal and Bernoulli draws are delegated to `rand_distr`. PERT draws go
//! through [`BetaPert`], a `rand_distr::Beta` variate scaled onto
//! `[low, high]`: given `low <= mode <= high` and a shape `gamma`, samples
//! are confined to `[low, high]` and concentrate around `mode` as `gamma`
//! grows.
//!
//! Samplers read their required keywords through
//! [`ParameterSet::require`], so a sampler called directly on an
//! incomplete set reports the missing keyword instead of panicking.
//!
//! [`DistributionFamily`]: crate::types::DistributionFamily
//! [`DistributionFamily::sampler`]: crate::types::DistributionFamily::sampler
//! [`ParameterSet::require`]: crate::types::ParameterSet::require

mod pert;
mod samplers;

pub use pert::BetaPert;
pub use samplers::{
    sample_bernoulli, sample_constant, sample_normal, sample_pert, Sampler, DEFAULT_GAMMA,
};
