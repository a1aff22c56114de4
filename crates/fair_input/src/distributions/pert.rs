//! Beta-PERT distribution for three-point estimates.

use rand::Rng;
use rand_distr::{Beta, Distribution};

use crate::error::InputError;
use crate::types::DistributionFamily;

/// PERT distribution over `[low, high]` with mode `mode` and shape `gamma`.
///
/// A Beta(α, β) variate scaled onto `[low, high]`, with
/// `α = 1 + γ (mode − low) / (high − low)` and
/// `β = 1 + γ (high − mode) / (high − low)`.
///
/// A zero-width range is degenerate and always yields `low`.
///
/// # Examples
///
/// ```rust
/// use fair_input::distributions::BetaPert;
/// use fair_input::rng::FairRng;
///
/// let pert = BetaPert::new(0.0, 2.0, 4.0, 4.0).unwrap();
/// assert_eq!(pert.mean(), 2.0);
///
/// let mut rng = FairRng::from_seed(1);
/// let draws = rng.sample_n(&pert, 100);
/// assert!(draws.iter().all(|x| (0.0..=4.0).contains(x)));
/// ```
#[derive(Clone, Debug)]
pub struct BetaPert {
    low: f64,
    range: f64,
    mean: f64,
    beta: Option<Beta<f64>>,
}

impl BetaPert {
    /// Creates a PERT distribution.
    ///
    /// Ordering (`low <= mode <= high`) is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Distribution`] if `gamma` is negative or the
    /// derived Beta shape parameters are rejected.
    pub fn new(low: f64, mode: f64, high: f64, gamma: f64) -> Result<Self, InputError> {
        let family = DistributionFamily::Pert;
        if !(gamma >= 0.0) {
            return Err(InputError::distribution(
                family,
                format!("gamma must be non-negative, got {}", gamma),
            ));
        }

        let range = high - low;
        let mean = (low + gamma * mode + high) / (gamma + 2.0);
        if range == 0.0 {
            return Ok(Self {
                low,
                range,
                mean: low,
                beta: None,
            });
        }

        let alpha = 1.0 + gamma * (mode - low) / range;
        let beta = 1.0 + gamma * (high - mode) / range;
        let beta = Beta::new(alpha, beta).map_err(|e| InputError::distribution(family, e))?;

        Ok(Self {
            low,
            range,
            mean,
            beta: Some(beta),
        })
    }

    /// Returns the distribution mean, `(low + γ·mode + high) / (γ + 2)`.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl Distribution<f64> for BetaPert {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.beta {
            Some(beta) => self.low + self.range * beta.sample(rng),
            None => self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::FairRng;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_symmetric_estimate() {
        let pert = BetaPert::new(0.2, 0.3, 0.4, 4.0).unwrap();
        assert_abs_diff_eq!(pert.mean(), 0.3, epsilon = 1e-12);

        let mut rng = FairRng::from_seed(3);
        let draws = rng.sample_n(&pert, 10_000);
        assert!(draws.iter().all(|x| (0.2..=0.4).contains(x)));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert_abs_diff_eq!(mean, 0.3, epsilon = 0.005);
    }

    #[test]
    fn test_mode_at_bound() {
        let pert = BetaPert::new(0.0, 0.0, 10.0, 4.0).unwrap();
        let mut rng = FairRng::from_seed(3);
        let draws = rng.sample_n(&pert, 1_000);
        assert!(draws.iter().all(|x| (0.0..=10.0).contains(x)));
    }

    #[test]
    fn test_degenerate_range() {
        let pert = BetaPert::new(2.0, 2.0, 2.0, 4.0).unwrap();
        let mut rng = FairRng::from_seed(3);
        assert_eq!(rng.sample_n(&pert, 3), vec![2.0; 3]);
        assert_eq!(pert.mean(), 2.0);
    }

    #[test]
    fn test_zero_gamma_is_uniform() {
        let pert = BetaPert::new(0.0, 9.0, 10.0, 0.0).unwrap();
        assert_abs_diff_eq!(pert.mean(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_gamma_rejected() {
        assert!(matches!(
            BetaPert::new(0.0, 1.0, 2.0, -1.0),
            Err(InputError::Distribution {
                family: DistributionFamily::Pert,
                ..
            })
        ));
    }
}
