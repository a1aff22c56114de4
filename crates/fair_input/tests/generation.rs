//! Integration tests for single and combined generation.
//!
//! These tests drive the public router API end to end: family
//! classification, target rules, sampling and the supplied-value record.

use std::collections::BTreeMap;

use approx::assert_abs_diff_eq;
use fair_input::router::{InputRouter, RouterConfig};
use fair_input::targets;
use fair_input::{
    DistributionFamily, InputError, Keyword, NestedParameters, ParameterSet, SuppliedValue,
};
use proptest::prelude::*;

fn seeded(seed: u64) -> InputRouter {
    InputRouter::with_config(RouterConfig::builder().seed(seed).build().unwrap())
}

fn columns(entries: &[(&str, ParameterSet)]) -> BTreeMap<String, ParameterSet> {
    entries
        .iter()
        .map(|(name, params)| (name.to_string(), params.clone()))
        .collect()
}

fn secondary_loss(
    frequency: BTreeMap<String, ParameterSet>,
    magnitude: BTreeMap<String, ParameterSet>,
) -> NestedParameters {
    let mut nested = NestedParameters::new();
    nested.insert(targets::SECONDARY_LOSS_EVENT_FREQUENCY.to_string(), frequency);
    nested.insert(targets::SECONDARY_LOSS_EVENT_MAGNITUDE.to_string(), magnitude);
    nested
}

// ============================================================================
// Single-target generation
// ============================================================================

#[test]
fn test_mixed_keywords_fail_for_every_target() {
    let params = ParameterSet::constant(5.0).with(Keyword::Mean, 2.0);
    let mut router = seeded(1);

    for target in [
        targets::LOSS_MAGNITUDE,
        targets::THREAT_EVENT_FREQUENCY,
        "Custom Node",
    ] {
        assert!(
            matches!(
                router.generate(target, 100, &params),
                Err(InputError::MixedKeywords { .. })
            ),
            "{} should reject mixed keywords",
            target
        );
    }
    assert!(router.supplied_values().is_empty());
}

#[test]
fn test_pert_missing_high() {
    let params = ParameterSet::new()
        .with(Keyword::Low, 1.0)
        .with(Keyword::Mode, 2.0);
    let result = seeded(1).generate(targets::LOSS_MAGNITUDE, 100, &params);

    assert_eq!(
        result,
        Err(InputError::MissingKeyword {
            family: DistributionFamily::Pert,
            keyword: Keyword::High,
        })
    );
    let message = result.unwrap_err().to_string();
    assert!(message.contains("PERT"));
    assert!(message.contains("high"));
}

#[test]
fn test_pert_mode_below_low() {
    let result = seeded(1).generate(
        targets::LOSS_MAGNITUDE,
        100,
        &ParameterSet::pert(10.0, 5.0, 20.0),
    );
    assert!(matches!(result, Err(InputError::PertOrdering { .. })));
}

#[test]
fn test_recorded_pert_has_default_gamma() {
    let mut router = seeded(3);
    let params = ParameterSet::pert(1.0, 2.0, 3.0);
    router.generate(targets::LOSS_MAGNITUDE, 100, &params).unwrap();

    let stored = router
        .supplied_values()
        .get(targets::LOSS_MAGNITUDE)
        .and_then(SuppliedValue::as_single)
        .unwrap();
    assert_eq!(stored.get(Keyword::Gamma), Some(4.0));
    assert_eq!(stored.get(Keyword::Low), Some(1.0));
    // The caller's set is not modified
    assert!(!params.contains(Keyword::Gamma));
}

#[test]
fn test_recorded_pert_keeps_supplied_gamma() {
    let mut router = seeded(3);
    let params = ParameterSet::pert(1.0, 2.0, 3.0).with(Keyword::Gamma, 10.0);
    router.generate(targets::LOSS_MAGNITUDE, 100, &params).unwrap();

    let stored = router.supplied_values().get(targets::LOSS_MAGNITUDE).unwrap();
    assert_eq!(stored.as_single().unwrap().get(Keyword::Gamma), Some(10.0));
}

#[test]
fn test_repeated_generate_overwrites() {
    let mut router = seeded(3);
    router
        .generate(targets::LOSS_MAGNITUDE, 10, &ParameterSet::constant(1.0))
        .unwrap();
    router
        .generate(targets::LOSS_MAGNITUDE, 10, &ParameterSet::normal(50.0, 5.0))
        .unwrap();

    let store = router.supplied_values();
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.get(targets::LOSS_MAGNITUDE),
        Some(&SuppliedValue::Single(ParameterSet::normal(50.0, 5.0)))
    );
}

#[test]
fn test_vulnerability_is_bernoulli() {
    let mut router = seeded(21);
    let samples = router
        .generate(targets::VULNERABILITY, 20_000, &ParameterSet::bernoulli(0.25))
        .unwrap();

    assert!(samples.iter().all(|&x| x == 0.0 || x == 1.0));
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    assert_abs_diff_eq!(mean, 0.25, epsilon = 0.02);
}

#[test]
fn test_bounded_target_rejects_out_of_range_value() {
    let result = seeded(1).generate(
        targets::THREAT_CAPABILITY,
        100,
        &ParameterSet::pert(0.2, 0.5, 1.5),
    );
    assert!(matches!(
        result,
        Err(InputError::OutOfRange {
            keyword: Keyword::High,
            ..
        })
    ));
}

#[test]
fn test_bounded_target_allows_large_stdev() {
    let samples = seeded(5)
        .generate(
            targets::CONTROL_STRENGTH,
            1_000,
            &ParameterSet::normal(0.5, 3.0),
        )
        .unwrap();
    assert!(samples.iter().all(|x| (0.0..=1.0).contains(x)));
}

#[test]
fn test_negative_value_rejected_outside_bounded_targets() {
    let result = seeded(1).generate(targets::LOSS_MAGNITUDE, 10, &ParameterSet::constant(-1.0));
    assert!(matches!(
        result,
        Err(InputError::NegativeValue {
            keyword: Keyword::Constant,
            ..
        })
    ));
}

#[test]
fn test_same_seed_reproduces_samples() {
    let params = ParameterSet::pert(100.0, 500.0, 2_000.0);
    let first = seeded(77)
        .generate(targets::LOSS_MAGNITUDE, 500, &params)
        .unwrap();
    let second = seeded(77)
        .generate(targets::LOSS_MAGNITUDE, 500, &params)
        .unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Combined generation
// ============================================================================

#[test]
fn test_combined_ones() {
    let ones = columns(&[("Fines", ParameterSet::constant(1.0))]);
    let samples = seeded(1)
        .generate_multi("multi_Secondary Loss", 40, &secondary_loss(ones.clone(), ones))
        .unwrap();
    assert_eq!(samples, vec![1.0; 40]);
}

#[test]
fn test_combined_stores_nested_unchanged() {
    let frequency = columns(&[
        ("Fines", ParameterSet::pert(0.1, 0.2, 0.4)),
        ("Reputation", ParameterSet::constant(0.5)),
    ]);
    let magnitude = columns(&[
        ("Fines", ParameterSet::pert(1_000.0, 5_000.0, 9_000.0)),
        ("Reputation", ParameterSet::normal(2_000.0, 100.0)),
    ]);
    let nested = secondary_loss(frequency, magnitude);

    let mut router = seeded(8);
    let samples = router
        .generate_multi("multi_Secondary Loss", 1_000, &nested)
        .unwrap();
    assert_eq!(samples.len(), 1_000);

    let stored = router
        .supplied_values()
        .get("multi_Secondary Loss")
        .and_then(SuppliedValue::as_combined)
        .unwrap();
    assert_eq!(stored, &nested);
    for sub_target in stored.values() {
        for params in sub_target.values() {
            assert!(!params.contains(Keyword::Gamma));
        }
    }
}

#[test]
fn test_combined_key_without_prefix() {
    let ones = columns(&[("Fines", ParameterSet::constant(1.0))]);
    let mut router = seeded(1);
    router
        .generate_multi(targets::SECONDARY_LOSS, 5, &secondary_loss(ones.clone(), ones))
        .unwrap();

    assert!(router.supplied_values().contains("multi_Secondary Loss"));
    assert!(!router.supplied_values().contains(targets::SECONDARY_LOSS));
}

#[test]
fn test_combined_requires_two_sub_targets() {
    let ones = columns(&[("Fines", ParameterSet::constant(1.0))]);

    let mut single = NestedParameters::new();
    single.insert(targets::SECONDARY_LOSS_EVENT_FREQUENCY.to_string(), ones.clone());

    let mut triple = secondary_loss(ones.clone(), ones.clone());
    triple.insert(targets::LOSS_MAGNITUDE.to_string(), ones);

    let mut router = seeded(1);
    for nested in [single, triple] {
        assert!(matches!(
            router.generate_multi("multi_Secondary Loss", 10, &nested),
            Err(InputError::InvalidCombination { .. })
        ));
    }
    assert!(router.supplied_values().is_empty());
}

#[test]
fn test_combined_mean_is_sum_of_products() {
    let frequency = columns(&[
        ("Fines", ParameterSet::constant(0.5)),
        ("Response", ParameterSet::constant(0.2)),
    ]);
    let magnitude = columns(&[
        ("Fines", ParameterSet::normal(1_000.0, 10.0)),
        ("Response", ParameterSet::pert(100.0, 200.0, 300.0)),
    ]);

    let samples = seeded(13)
        .generate_multi(
            "multi_Secondary Loss",
            50_000,
            &secondary_loss(frequency, magnitude),
        )
        .unwrap();
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    // 0.5 * 1000 + 0.2 * 200
    assert_abs_diff_eq!(mean, 540.0, epsilon = 1.0);
}

// ============================================================================
// Property tests
// ============================================================================

/// Values on a 0.01 grid in [0, 1].
fn unit_value() -> impl Strategy<Value = f64> {
    (0u32..=100).prop_map(|x| x as f64 / 100.0)
}

fn bounded_params() -> impl Strategy<Value = ParameterSet> {
    prop_oneof![
        unit_value().prop_map(ParameterSet::constant),
        (unit_value(), unit_value(), unit_value()).prop_map(|(a, b, c)| {
            let mut v = [a, b, c];
            v.sort_by(|x, y| x.total_cmp(y));
            ParameterSet::pert(v[0], v[1], v[2])
        }),
        (unit_value(), (0u32..=500).prop_map(|x| x as f64 / 100.0))
            .prop_map(|(mean, stdev)| ParameterSet::normal(mean, stdev)),
        unit_value().prop_map(ParameterSet::bernoulli),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_bounded_targets_stay_in_unit_interval(
        params in bounded_params(),
        target in prop::sample::select(vec![
            targets::ACTION,
            targets::CONTROL_STRENGTH,
            targets::THREAT_CAPABILITY,
        ]),
        seed in any::<u64>(),
    ) {
        let samples = seeded(seed).generate(target, 200, &params).unwrap();
        prop_assert_eq!(samples.len(), 200);
        prop_assert!(samples.iter().all(|x| (0.0..=1.0).contains(x)));
    }

    #[test]
    fn test_vulnerability_stays_in_unit_interval(p in unit_value(), seed in any::<u64>()) {
        let samples = seeded(seed)
            .generate(targets::VULNERABILITY, 200, &ParameterSet::bernoulli(p))
            .unwrap();
        prop_assert!(samples.iter().all(|x| (0.0..=1.0).contains(x)));
    }

    #[test]
    fn test_constant_returns_copies(
        value in 0.0f64..1.0e6,
        count in 1usize..500,
        target in prop::sample::select(vec![
            targets::RISK,
            targets::LOSS_MAGNITUDE,
            targets::THREAT_EVENT_FREQUENCY,
            "Custom Node",
        ]),
    ) {
        let samples = seeded(0)
            .generate(target, count, &ParameterSet::constant(value))
            .unwrap();
        prop_assert_eq!(samples, vec![value; count]);
    }

    #[test]
    fn test_bounded_constant_returns_copies(value in unit_value(), count in 1usize..500) {
        let samples = seeded(0)
            .generate(targets::ACTION, count, &ParameterSet::constant(value))
            .unwrap();
        prop_assert_eq!(samples, vec![value; count]);
    }
}
