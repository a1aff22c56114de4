//! Error types for input validation and sampling.
//!
//! This module provides:
//! - `InputError`: caller-input errors raised while routing a generation request
//! - `PertRequirement`: the PERT ordering inequality that was violated
//!
//! Every variant aborts the request before the supplied-value store is
//! touched.

use std::fmt;

use thiserror::Error;

use crate::types::{DistributionFamily, Keyword};

/// One of the two inequalities a PERT parameter set must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PertRequirement {
    /// `low <= mode`.
    ModeAtLeastLow,
    /// `mode <= high`.
    HighAtLeastMode,
}

impl fmt::Display for PertRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeAtLeastLow => f.write_str("mode >= low"),
            Self::HighAtLeastMode => f.write_str("high >= mode"),
        }
    }
}

/// Validation and sampling errors for a generation request.
///
/// # Variants
/// - `UnrecognizedKeyword`: parameter name outside the recognised set
/// - `MixedKeywords`: keywords resolve to more than one family
/// - `MissingKeyword`: a family's required keyword is absent
/// - `NegativeValue`: a non-negativity-constrained keyword is negative
/// - `OutOfRange`: a bounded target received a value outside [0, 1]
/// - `PertOrdering`: PERT parameters violate `low <= mode <= high`
/// - `InvalidCombination`: combined generation given unusable sub-targets
/// - `NonFiniteValue`: a value is NaN or infinite
/// - `EmptyParameters`: no keywords supplied
/// - `InvalidSampleCount`: sample count outside `[1, max]`
/// - `Distribution`: the sampling primitive rejected the parameters
///
/// # Examples
/// ```
/// use fair_input::error::InputError;
/// use fair_input::types::{DistributionFamily, Keyword};
///
/// let err = InputError::MissingKeyword {
///     family: DistributionFamily::Pert,
///     keyword: Keyword::High,
/// };
/// assert_eq!(format!("{}", err), "PERT parameters are missing \"high\"");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Parameter name is not a recognised keyword.
    #[error("\"{keyword}\" is not a recognized keyword")]
    UnrecognizedKeyword {
        /// The unrecognised name
        keyword: String,
    },

    /// Keywords resolve to more than one distribution family.
    #[error("{} mixes incompatible keywords", format_keywords(.keywords))]
    MixedKeywords {
        /// Every keyword in the offending set
        keywords: Vec<Keyword>,
    },

    /// A required keyword for the selected family is absent.
    #[error("{family} parameters are missing \"{keyword}\"")]
    MissingKeyword {
        /// Family whose requirement failed
        family: DistributionFamily,
        /// The absent keyword
        keyword: Keyword,
    },

    /// A keyword that must be non-negative received a negative value.
    #[error("\"{keyword}\" is less than zero: {value}")]
    NegativeValue {
        /// The offending keyword
        keyword: Keyword,
        /// The negative value
        value: f64,
    },

    /// A bounded target received a value outside [0, 1].
    #[error("\"{target}\" must have \"{keyword}\" value between zero and one, got {value}")]
    OutOfRange {
        /// The bounded target
        target: String,
        /// The offending keyword
        keyword: Keyword,
        /// The out-of-range value
        value: f64,
    },

    /// PERT parameters violate the ordering requirement.
    #[error("PERT parameters fail requirement \"{requirement}\"")]
    PertOrdering {
        /// The violated inequality
        requirement: PertRequirement,
    },

    /// Combined generation cannot pair the supplied sub-targets.
    #[error("Invalid combination for \"{target}\": {reason}")]
    InvalidCombination {
        /// The combined target as supplied by the caller
        target: String,
        /// Why the sub-targets cannot be combined
        reason: String,
    },

    /// A parameter value is NaN or infinite.
    #[error("\"{keyword}\" is not a finite number: {value}")]
    NonFiniteValue {
        /// The offending keyword
        keyword: Keyword,
        /// The non-finite value
        value: f64,
    },

    /// No keywords were supplied.
    #[error("No parameters supplied")]
    EmptyParameters,

    /// Sample count outside the permitted range.
    #[error("Invalid sample count {count}: must be in range [1, {max}]")]
    InvalidSampleCount {
        /// Requested count
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// The sampling primitive rejected validated parameters.
    #[error("{family} sampler rejected parameters: {message}")]
    Distribution {
        /// Family being sampled
        family: DistributionFamily,
        /// Message from the sampling primitive
        message: String,
    },
}

impl InputError {
    /// Creates a distribution error from a sampling primitive's error.
    pub fn distribution(family: DistributionFamily, err: impl fmt::Display) -> Self {
        Self::Distribution {
            family,
            message: err.to_string(),
        }
    }

    /// Creates an invalid combination error.
    pub fn invalid_combination(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCombination {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

fn format_keywords(keywords: &[Keyword]) -> String {
    let names: Vec<&str> = keywords.iter().map(Keyword::as_str).collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_keywords_display() {
        let err = InputError::MixedKeywords {
            keywords: vec![Keyword::Constant, Keyword::Mean],
        };
        assert_eq!(
            format!("{}", err),
            "[constant, mean] mixes incompatible keywords"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = InputError::OutOfRange {
            target: "Vulnerability".to_string(),
            keyword: Keyword::P,
            value: 1.5,
        };
        assert_eq!(
            format!("{}", err),
            "\"Vulnerability\" must have \"p\" value between zero and one, got 1.5"
        );
    }

    #[test]
    fn test_pert_ordering_display() {
        let err = InputError::PertOrdering {
            requirement: PertRequirement::ModeAtLeastLow,
        };
        assert!(err.to_string().contains("mode >= low"));
    }

    #[test]
    fn test_invalid_sample_count_display() {
        let err = InputError::InvalidSampleCount { count: 0, max: 10 };
        assert_eq!(
            err.to_string(),
            "Invalid sample count 0: must be in range [1, 10]"
        );
    }

    #[test]
    fn test_helpers() {
        let err = InputError::distribution(DistributionFamily::Normal, "bad variance");
        assert_eq!(
            err.to_string(),
            "Normal sampler rejected parameters: bad variance"
        );

        let err = InputError::invalid_combination("multi_Secondary Loss", "expected 2");
        assert!(matches!(err, InputError::InvalidCombination { .. }));
    }
}
