//! Distribution families and their dispatch table.

use std::fmt;

use super::keyword::Keyword;
use crate::distributions::{self, Sampler};

/// The distribution family a parameter set describes.
///
/// Each family owns a fixed set of required keywords and a sampler; both
/// are resolved through static tables rather than by inspecting keys at
/// the call site.
///
/// # Examples
///
/// ```rust
/// use fair_input::types::{DistributionFamily, Keyword};
///
/// assert_eq!(
///     DistributionFamily::Pert.required_keywords(),
///     &[Keyword::Low, Keyword::Mode, Keyword::High]
/// );
/// assert_eq!(DistributionFamily::Normal.to_string(), "Normal");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DistributionFamily {
    /// Degenerate distribution returning a single value.
    Constant,
    /// Modified Beta distribution over a three-point estimate.
    Pert,
    /// Gaussian distribution.
    Normal,
    /// Bernoulli distribution over {0, 1}.
    Bernoulli,
}

impl DistributionFamily {
    /// Returns the keywords that must be present for this family.
    ///
    /// PERT's `gamma` is optional and therefore not listed.
    #[inline]
    pub fn required_keywords(&self) -> &'static [Keyword] {
        match self {
            Self::Constant => &[Keyword::Constant],
            Self::Pert => &[Keyword::Low, Keyword::Mode, Keyword::High],
            Self::Normal => &[Keyword::Mean, Keyword::Stdev],
            Self::Bernoulli => &[Keyword::P],
        }
    }

    /// Returns the sampler that draws from this family.
    #[inline]
    pub fn sampler(&self) -> Sampler {
        match self {
            Self::Constant => distributions::sample_constant,
            Self::Pert => distributions::sample_pert,
            Self::Normal => distributions::sample_normal,
            Self::Bernoulli => distributions::sample_bernoulli,
        }
    }

    /// Returns the family name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant => "Constant",
            Self::Pert => "PERT",
            Self::Normal => "Normal",
            Self::Bernoulli => "Bernoulli",
        }
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
