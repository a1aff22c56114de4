//! Recognised parameter keywords.
//!
//! This module provides [`Keyword`], the closed set of parameter names a
//! caller may supply, together with the static keyword→family table used
//! to classify a parameter set.

use std::fmt;
use std::str::FromStr;

use super::family::DistributionFamily;
use crate::error::InputError;

/// A recognised parameter name.
///
/// Parameter names arrive as strings from configuration files and
/// serialised models; parsing them into this enum is the single point
/// where an unknown name is rejected.
///
/// # Examples
///
/// ```rust
/// use fair_input::types::{DistributionFamily, Keyword};
///
/// let keyword: Keyword = "stdev".parse().unwrap();
/// assert_eq!(keyword, Keyword::Stdev);
/// assert_eq!(keyword.family(), DistributionFamily::Normal);
///
/// assert!("sigma".parse::<Keyword>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Keyword {
    /// Fixed value for a constant distribution.
    Constant,
    /// PERT lower bound.
    Low,
    /// PERT most likely value.
    Mode,
    /// PERT upper bound.
    High,
    /// PERT shape parameter.
    Gamma,
    /// Normal mean.
    Mean,
    /// Normal standard deviation.
    Stdev,
    /// Bernoulli success probability.
    P,
}

impl Keyword {
    /// Every recognised keyword, in canonical order.
    pub const ALL: [Keyword; 8] = [
        Keyword::Constant,
        Keyword::Low,
        Keyword::Mode,
        Keyword::High,
        Keyword::Gamma,
        Keyword::Mean,
        Keyword::Stdev,
        Keyword::P,
    ];

    /// Returns the wire name of the keyword.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Low => "low",
            Self::Mode => "mode",
            Self::High => "high",
            Self::Gamma => "gamma",
            Self::Mean => "mean",
            Self::Stdev => "stdev",
            Self::P => "p",
        }
    }

    /// Returns the distribution family this keyword belongs to.
    ///
    /// `gamma` is optional for PERT but still identifies the family, so a
    /// set mixing `gamma` with `mean` is rejected as mixed.
    #[inline]
    pub fn family(&self) -> DistributionFamily {
        match self {
            Self::Constant => DistributionFamily::Constant,
            Self::Low | Self::Mode | Self::High | Self::Gamma => DistributionFamily::Pert,
            Self::Mean | Self::Stdev => DistributionFamily::Normal,
            Self::P => DistributionFamily::Bernoulli,
        }
    }

    /// Returns `true` if the keyword's value must not be negative.
    ///
    /// `stdev` and `gamma` are exempt.
    #[inline]
    pub fn requires_non_negative(&self) -> bool {
        !matches!(self, Self::Stdev | Self::Gamma)
    }

    /// Returns `true` if the keyword's value is confined to [0, 1] for
    /// bounded targets.
    #[inline]
    pub fn is_unit_bounded(&self) -> bool {
        !matches!(self, Self::Stdev)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::ALL
            .iter()
            .copied()
            .find(|keyword| keyword.as_str() == s)
            .ok_or_else(|| InputError::UnrecognizedKeyword {
                keyword: s.to_string(),
            })
    }
}
