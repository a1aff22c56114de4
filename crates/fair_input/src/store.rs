//! Record of the parameters behind each generated variable.
//!
//! A [`SuppliedValueStore`] is owned by one router. It is written only
//! after a generation request has fully succeeded, and a repeated request
//! for the same key overwrites the earlier entry. The store is the
//! authoritative input for serialising or reconstructing a model.

use std::collections::btree_map::{self, BTreeMap};

use crate::types::{NestedParameters, ParameterSet};

/// Parameters recorded for one target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SuppliedValue {
    /// Normalised parameters of a single-target generation.
    Single(ParameterSet),
    /// Raw nested parameters of a combined generation, as supplied.
    Combined(NestedParameters),
}

impl SuppliedValue {
    /// Returns the single-target parameters, if this is a single entry.
    pub fn as_single(&self) -> Option<&ParameterSet> {
        match self {
            Self::Single(params) => Some(params),
            Self::Combined(_) => None,
        }
    }

    /// Returns the nested parameters, if this is a combined entry.
    pub fn as_combined(&self) -> Option<&NestedParameters> {
        match self {
            Self::Single(_) => None,
            Self::Combined(nested) => Some(nested),
        }
    }
}

/// Target name → parameters used to generate it.
///
/// Serialises as a plain JSON object, e.g.
/// `{"Loss Magnitude": {"gamma": 4.0, "high": 3.0, "low": 1.0, "mode": 2.0}}`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SuppliedValueStore {
    entries: BTreeMap<String, SuppliedValue>,
}

impl SuppliedValueStore {
    /// Creates an empty store.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&SuppliedValue> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` has an entry.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, SuppliedValue> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn record_single(&mut self, target: &str, params: ParameterSet) {
        self.record(target.to_string(), SuppliedValue::Single(params));
    }

    pub(crate) fn record_combined(&mut self, key: String, nested: NestedParameters) {
        self.record(key, SuppliedValue::Combined(nested));
    }

    /// Moves every entry of `other` into this store, overwriting on clash.
    pub(crate) fn absorb(&mut self, other: SuppliedValueStore) {
        for (key, value) in other.entries {
            self.record(key, value);
        }
    }

    fn record(&mut self, key: String, value: SuppliedValue) {
        if self.entries.insert(key.clone(), value).is_some() {
            tracing::trace!(key = %key, "overwrote supplied values");
        }
    }
}

impl<'a> IntoIterator for &'a SuppliedValueStore {
    type Item = (&'a String, &'a SuppliedValue);
    type IntoIter = btree_map::Iter<'a, String, SuppliedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
