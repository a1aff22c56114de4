//! Combined generation across two related sub-targets.
//!
//! A combined target such as `multi_Secondary Loss` is the row-wise sum,
//! over named contributors, of the product of two factors (e.g. secondary
//! loss event frequency × secondary loss event magnitude). Each factor is
//! a table of named columns, one column per contributor, with one row per
//! sample.

use std::collections::BTreeMap;

use super::InputRouter;
use crate::error::InputError;
use crate::targets::MULTI_PREFIX;
use crate::types::{NestedParameters, ParameterSet};

/// Removes a single leading `multi_` from `target`, if present.
///
/// # Examples
///
/// ```rust
/// use fair_input::router::strip_multi_prefix;
///
/// assert_eq!(strip_multi_prefix("multi_Secondary Loss"), "Secondary Loss");
/// assert_eq!(strip_multi_prefix("Secondary Loss"), "Secondary Loss");
/// // Only the exact prefix is removed
/// assert_eq!(strip_multi_prefix("multi_multi_x"), "multi_x");
/// assert_eq!(strip_multi_prefix("ultimate"), "ultimate");
/// ```
pub fn strip_multi_prefix(target: &str) -> &str {
    target.strip_prefix(MULTI_PREFIX).unwrap_or(target)
}

/// Samples for one sub-target, keyed by column name.
#[derive(Clone, Debug, PartialEq)]
struct SampleTable {
    rows: usize,
    columns: BTreeMap<String, Vec<f64>>,
}

impl SampleTable {
    fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: BTreeMap::new(),
        }
    }

    fn insert(&mut self, column: String, samples: Vec<f64>) {
        debug_assert_eq!(samples.len(), self.rows);
        self.columns.insert(column, samples);
    }

    /// Elementwise product with a table holding the same columns.
    fn product(&self, other: &SampleTable) -> SampleTable {
        let mut product = SampleTable::new(self.rows);
        for (name, left) in &self.columns {
            if let Some(right) = other.columns.get(name) {
                let column = left.iter().zip(right).map(|(a, b)| a * b).collect();
                product.insert(name.clone(), column);
            }
        }
        product
    }

    /// Sums across columns for each row.
    fn row_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.rows];
        for column in self.columns.values() {
            for (sum, value) in sums.iter_mut().zip(column) {
                *sum += value;
            }
        }
        sums
    }
}

impl InputRouter {
    /// Generates a combined target from two sub-targets.
    ///
    /// Every column of each sub-target is generated with
    /// [`generate_single`](Self::generate_single); the two tables are
    /// multiplied elementwise and summed across columns per row. The raw
    /// `nested` parameters are recorded under `multi_<name>`, where
    /// `<name>` is `prefixed_target` without its `multi_` prefix.
    ///
    /// # Errors
    ///
    /// - [`InputError::InvalidCombination`] unless `nested` holds exactly
    ///   two sub-targets with the same, non-empty set of column names
    /// - Any error from [`generate_single`](Self::generate_single) for a column
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use fair_input::router::InputRouter;
    /// use fair_input::types::{NestedParameters, ParameterSet};
    ///
    /// let mut frequency = BTreeMap::new();
    /// frequency.insert("Legal".to_string(), ParameterSet::constant(0.5));
    /// frequency.insert("Reputation".to_string(), ParameterSet::constant(0.25));
    /// let mut magnitude = BTreeMap::new();
    /// magnitude.insert("Legal".to_string(), ParameterSet::constant(100.0));
    /// magnitude.insert("Reputation".to_string(), ParameterSet::constant(40.0));
    ///
    /// let mut nested = NestedParameters::new();
    /// nested.insert("Secondary Loss Event Frequency".to_string(), frequency);
    /// nested.insert("Secondary Loss Event Magnitude".to_string(), magnitude);
    ///
    /// let mut router = InputRouter::new();
    /// let samples = router.generate_multi("multi_Secondary Loss", 3, &nested).unwrap();
    /// assert_eq!(samples, vec![60.0; 3]);
    /// assert!(router.supplied_values().contains("multi_Secondary Loss"));
    /// ```
    pub fn generate_multi(
        &mut self,
        prefixed_target: &str,
        count: usize,
        nested: &NestedParameters,
    ) -> Result<Vec<f64>, InputError> {
        let (left, right) = paired_sub_targets(prefixed_target, nested)?;

        let left = self.sample_table(left.0, left.1, count)?;
        let right = self.sample_table(right.0, right.1, count)?;
        let combined = left.product(&right).row_sums();

        let key = format!("{}{}", MULTI_PREFIX, strip_multi_prefix(prefixed_target));
        tracing::debug!(
            node = %key,
            columns = left.columns.len(),
            count,
            "generated combined samples"
        );
        self.supplied.record_combined(key, nested.clone());
        Ok(combined)
    }

    fn sample_table(
        &mut self,
        sub_target: &str,
        columns: &BTreeMap<String, ParameterSet>,
        count: usize,
    ) -> Result<SampleTable, InputError> {
        let mut table = SampleTable::new(count);
        for (column, params) in columns {
            let samples = self.generate_single(sub_target, count, params)?;
            table.insert(column.clone(), samples);
        }
        Ok(table)
    }
}

type SubTarget<'a> = (&'a str, &'a BTreeMap<String, ParameterSet>);

/// Checks `nested` describes exactly two column-aligned sub-targets.
fn paired_sub_targets<'a>(
    prefixed_target: &str,
    nested: &'a NestedParameters,
) -> Result<(SubTarget<'a>, SubTarget<'a>), InputError> {
    let mut entries = nested.iter();
    let (left, right) = match (entries.next(), entries.next(), entries.next()) {
        (Some(left), Some(right), None) => (left, right),
        _ => {
            return Err(InputError::invalid_combination(
                prefixed_target,
                format!("expected exactly 2 sub-targets, got {}", nested.len()),
            ))
        }
    };

    if !left.1.keys().eq(right.1.keys()) {
        return Err(InputError::invalid_combination(
            prefixed_target,
            format!(
                "sub-targets \"{}\" and \"{}\" have different columns",
                left.0, right.0
            ),
        ));
    }
    if left.1.is_empty() {
        return Err(InputError::invalid_combination(
            prefixed_target,
            "sub-targets have no columns",
        ));
    }

    Ok(((left.0.as_str(), left.1), (right.0.as_str(), right.1)))
}
