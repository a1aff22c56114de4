//! Validation rules applied before a sampler is invoked.
//!
//! Order for one single-target request:
//! finiteness → bounded range (raw input) → family → required keywords →
//! non-negativity → PERT ordering (inside the PERT sampler).

use crate::error::{InputError, PertRequirement};
use crate::types::{DistributionFamily, Keyword, ParameterSet};

/// Rejects NaN and infinite values.
///
/// # Errors
///
/// Returns [`InputError::NonFiniteValue`] for the first non-finite value.
pub fn check_finite(params: &ParameterSet) -> Result<(), InputError> {
    match params.iter().find(|(_, value)| !value.is_finite()) {
        Some((keyword, value)) => Err(InputError::NonFiniteValue { keyword, value }),
        None => Ok(()),
    }
}

/// Requires every value except `stdev` to lie in [0, 1].
///
/// Callers apply this only to bounded targets, on raw values and before
/// the family is known.
///
/// # Errors
///
/// Returns [`InputError::OutOfRange`] for the first offending keyword.
pub fn check_bounded_target(target: &str, params: &ParameterSet) -> Result<(), InputError> {
    let offending = params
        .iter()
        .filter(|(keyword, _)| keyword.is_unit_bounded())
        .find(|(_, value)| !(0.0..=1.0).contains(value));

    match offending {
        Some((keyword, value)) => Err(InputError::OutOfRange {
            target: target.to_string(),
            keyword,
            value,
        }),
        None => Ok(()),
    }
}

/// Determines the single family every keyword maps to.
///
/// # Errors
///
/// - [`InputError::EmptyParameters`] if no keywords are present
/// - [`InputError::MixedKeywords`] if keywords map to more than one family
pub fn determine_family(params: &ParameterSet) -> Result<DistributionFamily, InputError> {
    let mut keywords = params.keywords();
    let first = keywords.next().ok_or(InputError::EmptyParameters)?.family();

    if keywords.any(|keyword| keyword.family() != first) {
        return Err(InputError::MixedKeywords {
            keywords: params.keywords().collect(),
        });
    }
    Ok(first)
}

/// Requires every keyword `family` needs to be present.
///
/// # Errors
///
/// Returns [`InputError::MissingKeyword`] naming the first absent keyword.
pub fn check_required_keywords(
    family: DistributionFamily,
    params: &ParameterSet,
) -> Result<(), InputError> {
    family
        .required_keywords()
        .iter()
        .try_for_each(|&keyword| params.require(family, keyword).map(|_| ()))
}

/// Requires `p`, `mean`, `constant`, `low`, `mode` and `high` to be ≥ 0.
///
/// # Errors
///
/// Returns [`InputError::NegativeValue`] for the first negative value.
pub fn check_non_negative(params: &ParameterSet) -> Result<(), InputError> {
    let negative = params
        .iter()
        .filter(|(keyword, _)| keyword.requires_non_negative())
        .find(|(_, value)| *value < 0.0);

    match negative {
        Some((keyword, value)) => Err(InputError::NegativeValue { keyword, value }),
        None => Ok(()),
    }
}

/// Requires `low <= mode` and `mode <= high`.
///
/// # Errors
///
/// - [`InputError::MissingKeyword`] if any of the three keywords is absent
/// - [`InputError::PertOrdering`] naming the violated inequality
pub fn check_pert_ordering(params: &ParameterSet) -> Result<(), InputError> {
    let family = DistributionFamily::Pert;
    let low = params.require(family, Keyword::Low)?;
    let mode = params.require(family, Keyword::Mode)?;
    let high = params.require(family, Keyword::High)?;

    if mode < low {
        return Err(InputError::PertOrdering {
            requirement: PertRequirement::ModeAtLeastLow,
        });
    }
    if high < mode {
        return Err(InputError::PertOrdering {
            requirement: PertRequirement::HighAtLeastMode,
        });
    }
    Ok(())
}
