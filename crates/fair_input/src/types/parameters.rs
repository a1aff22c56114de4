//! Parameter sets supplied to a single generation request.

use std::collections::BTreeMap;

use super::family::DistributionFamily;
use super::keyword::Keyword;
use crate::error::InputError;

/// Nested parameters for combined generation.
///
/// Maps sub-target name → column name → parameters for that column.
pub type NestedParameters = BTreeMap<String, BTreeMap<String, ParameterSet>>;

/// A mapping from recognised keyword to value.
///
/// Presence and absence of keywords is what selects a distribution
/// family, so the set is kept as an ordered map keyed by [`Keyword`].
/// Values are stored as given; validation happens in the router.
///
/// # Examples
///
/// ```rust
/// use fair_input::types::{Keyword, ParameterSet};
///
/// let params = ParameterSet::pert(0.1, 0.2, 0.5);
/// assert_eq!(params.get(Keyword::Mode), Some(0.2));
/// assert!(!params.contains(Keyword::Gamma));
///
/// let parsed = ParameterSet::try_from_pairs([("mean", 10.0), ("stdev", 2.0)]).unwrap();
/// assert_eq!(parsed, ParameterSet::normal(10.0, 2.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")
)]
pub struct ParameterSet {
    values: BTreeMap<Keyword, f64>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `{constant}`.
    pub fn constant(value: f64) -> Self {
        Self::new().with(Keyword::Constant, value)
    }

    /// Creates `{low, mode, high}`; `gamma` is left to its default.
    pub fn pert(low: f64, mode: f64, high: f64) -> Self {
        Self::new()
            .with(Keyword::Low, low)
            .with(Keyword::Mode, mode)
            .with(Keyword::High, high)
    }

    /// Creates `{mean, stdev}`.
    pub fn normal(mean: f64, stdev: f64) -> Self {
        Self::new()
            .with(Keyword::Mean, mean)
            .with(Keyword::Stdev, stdev)
    }

    /// Creates `{p}`.
    pub fn bernoulli(p: f64) -> Self {
        Self::new().with(Keyword::P, p)
    }

    /// Parses `(name, value)` pairs, rejecting unrecognised names.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnrecognizedKeyword`] for the first name that
    /// is not a recognised keyword.
    pub fn try_from_pairs<I, K>(pairs: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut params = Self::new();
        for (name, value) in pairs {
            params.insert(name.as_ref().parse()?, value);
        }
        Ok(params)
    }

    /// Returns the set with `keyword` set to `value`.
    #[inline]
    pub fn with(mut self, keyword: Keyword, value: f64) -> Self {
        self.values.insert(keyword, value);
        self
    }

    /// Sets `keyword` to `value`, returning the previous value if any.
    #[inline]
    pub fn insert(&mut self, keyword: Keyword, value: f64) -> Option<f64> {
        self.values.insert(keyword, value)
    }

    /// Returns the value for `keyword`.
    #[inline]
    pub fn get(&self, keyword: Keyword) -> Option<f64> {
        self.values.get(&keyword).copied()
    }

    /// Returns the value for `keyword`, which `family` requires.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingKeyword`] if the keyword is absent.
    pub fn require(&self, family: DistributionFamily, keyword: Keyword) -> Result<f64, InputError> {
        self.get(keyword)
            .ok_or(InputError::MissingKeyword { family, keyword })
    }

    /// Returns `true` if `keyword` is present.
    #[inline]
    pub fn contains(&self, keyword: Keyword) -> bool {
        self.values.contains_key(&keyword)
    }

    /// Iterates over keywords in canonical order.
    pub fn keywords(&self) -> impl Iterator<Item = Keyword> + '_ {
        self.values.keys().copied()
    }

    /// Iterates over `(keyword, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Keyword, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Returns the number of keywords.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no keywords are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the copy recorded for later reproduction.
    ///
    /// When `low` is present without `gamma`, the PERT sampler uses its
    /// default shape; that default is written into the copy so the record
    /// is explicit. `self` is left untouched.
    pub fn normalized(&self, default_gamma: f64) -> Self {
        let mut normalized = self.clone();
        if self.contains(Keyword::Low) && !self.contains(Keyword::Gamma) {
            normalized.insert(Keyword::Gamma, default_gamma);
        }
        normalized
    }
}

impl FromIterator<(Keyword, f64)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (Keyword, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<BTreeMap<String, f64>> for ParameterSet {
    type Error = InputError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::try_from_pairs(map)
    }
}

impl From<ParameterSet> for BTreeMap<String, f64> {
    fn from(params: ParameterSet) -> Self {
        params
            .values
            .into_iter()
            .map(|(k, v)| (k.as_str().to_string(), v))
            .collect()
    }
}
