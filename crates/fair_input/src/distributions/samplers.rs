//! Sampling adapters for each distribution family.

use rand_distr::{Bernoulli, Normal};

use super::pert::BetaPert;
use crate::error::InputError;
use crate::rng::FairRng;
use crate::router::validation::check_pert_ordering;
use crate::types::{DistributionFamily, Keyword, ParameterSet};

/// PERT shape parameter used when `gamma` is not supplied.
pub const DEFAULT_GAMMA: f64 = 4.0;

/// Signature shared by every sampler in the dispatch table.
pub type Sampler = fn(&mut FairRng, usize, &ParameterSet) -> Result<Vec<f64>, InputError>;

/// Returns `count` copies of `constant`.
pub fn sample_constant(
    _rng: &mut FairRng,
    count: usize,
    params: &ParameterSet,
) -> Result<Vec<f64>, InputError> {
    let value = params.require(DistributionFamily::Constant, Keyword::Constant)?;
    Ok(vec![value; count])
}

/// Draws `count` samples from Normal(`mean`, `stdev`).
///
/// # Errors
///
/// Returns [`InputError::Distribution`] if `stdev` is negative.
pub fn sample_normal(
    rng: &mut FairRng,
    count: usize,
    params: &ParameterSet,
) -> Result<Vec<f64>, InputError> {
    let family = DistributionFamily::Normal;
    let mean = params.require(family, Keyword::Mean)?;
    let stdev = params.require(family, Keyword::Stdev)?;

    let normal = Normal::new(mean, stdev).map_err(|e| InputError::distribution(family, e))?;
    Ok(rng.sample_n(&normal, count))
}

/// Draws `count` samples from Bernoulli(`p`) as 0.0 / 1.0.
///
/// # Errors
///
/// Returns [`InputError::Distribution`] if `p` lies outside [0, 1].
pub fn sample_bernoulli(
    rng: &mut FairRng,
    count: usize,
    params: &ParameterSet,
) -> Result<Vec<f64>, InputError> {
    let family = DistributionFamily::Bernoulli;
    let p = params.require(family, Keyword::P)?;

    let bernoulli = Bernoulli::new(p).map_err(|e| InputError::distribution(family, e))?;
    Ok(rng
        .sample_n(&bernoulli, count)
        .into_iter()
        .map(|hit| if hit { 1.0 } else { 0.0 })
        .collect())
}

/// Draws `count` samples from PERT(`low`, `mode`, `high`, `gamma`).
///
/// Ordering is checked here, immediately before sampling. A degenerate
/// range (`low == high`) yields `count` copies of `low`.
/// `gamma` defaults to [`DEFAULT_GAMMA`].
///
/// # Errors
///
/// - [`InputError::PertOrdering`] if `low <= mode <= high` does not hold
/// - [`InputError::Distribution`] if `gamma` is rejected by the primitive
pub fn sample_pert(
    rng: &mut FairRng,
    count: usize,
    params: &ParameterSet,
) -> Result<Vec<f64>, InputError> {
    let family = DistributionFamily::Pert;
    let low = params.require(family, Keyword::Low)?;
    let mode = params.require(family, Keyword::Mode)?;
    let high = params.require(family, Keyword::High)?;
    let gamma = params.get(Keyword::Gamma).unwrap_or(DEFAULT_GAMMA);

    check_pert_ordering(params)?;

    let pert = BetaPert::new(low, mode, high, gamma)?;
    Ok(rng.sample_n(&pert, count))
}
