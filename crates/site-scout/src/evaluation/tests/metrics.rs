use proptest::prelude::*;

use super::common::*;
use crate::evaluation::catalog::MetricCatalog;
use crate::evaluation::domain::{MetricCategory, SiteId, SiteType};
use crate::evaluation::metrics::{MetricError, SiteMetrics, DEFAULT_MINIMUM_RATED};
use crate::evaluation::score::Score;

fn office_metrics() -> SiteMetrics {
    SiteMetrics::new(SiteId("site-metrics".to_string()), SiteType::Office)
}

#[test]
fn unrated_metrics_read_as_neutral_defaults() {
    let metrics = office_metrics();

    assert_eq!(metrics.get_rating("foot_traffic"), 0);
    assert_eq!(metrics.get_notes("foot_traffic"), "");
    assert_eq!(metrics.get_rating("not_in_catalog"), 0);
    assert_eq!(metrics.rated_count(), 0);
}

#[test]
fn update_stores_rating_notes_and_timestamps() {
    let catalog = catalog();
    let mut metrics = office_metrics();

    metrics
        .update_metric_at(&catalog, "foot_traffic", 4, "busy lobby", timestamp(9))
        .expect("rating accepted");

    let instance = metrics.instance("foot_traffic").expect("instance created");
    assert_eq!(instance.rating, 4);
    assert_eq!(metrics.get_notes("foot_traffic"), "busy lobby");
    assert_eq!(instance.rated_at, Some(timestamp(9)));
    assert_eq!(metrics.last_updated(), timestamp(9));
    assert_eq!(metrics.rated_count(), 1);
}

#[test]
fn repeated_updates_are_idempotent() {
    let catalog = catalog();
    let mut metrics = office_metrics();

    metrics
        .update_metric_at(&catalog, "security", 3, "guard at night", timestamp(9))
        .expect("first update");
    let first = metrics.instance("security").cloned();
    metrics
        .update_metric_at(&catalog, "security", 3, "guard at night", timestamp(11))
        .expect("second update");

    assert_eq!(metrics.instance("security").cloned(), first);
    assert_eq!(metrics.instances().count(), 1);
    assert_eq!(metrics.last_updated(), timestamp(11));
}

#[test]
fn rerating_keeps_the_original_rated_at() {
    let catalog = catalog();
    let mut metrics = office_metrics();

    metrics
        .update_metric_at(&catalog, "visibility", 2, "", timestamp(9))
        .expect("first update");
    metrics
        .update_metric_at(&catalog, "visibility", 5, "moved to atrium", timestamp(12))
        .expect("second update");

    let instance = metrics.instance("visibility").expect("instance");
    assert_eq!(instance.rating, 5);
    assert_eq!(instance.rated_at, Some(timestamp(9)));
}

#[test]
fn clearing_a_rating_resets_rated_at() {
    let catalog = catalog();
    let mut metrics = office_metrics();

    metrics
        .update_metric_at(&catalog, "amenities", 4, "", timestamp(9))
        .expect("rate");
    metrics
        .update_metric_at(&catalog, "amenities", 0, "pending re-survey", timestamp(10))
        .expect("clear");

    let instance = metrics.instance("amenities").expect("instance kept");
    assert_eq!(instance.rating, 0);
    assert_eq!(instance.rated_at, None);
    assert_eq!(metrics.rated_count(), 0);

    metrics
        .update_metric_at(&catalog, "amenities", 2, "", timestamp(14))
        .expect("re-rate");
    assert_eq!(
        metrics.instance("amenities").and_then(|instance| instance.rated_at),
        Some(timestamp(14))
    );
}

#[test]
fn ratings_outside_the_definition_range_are_rejected() {
    let catalog = catalog();
    let mut metrics = office_metrics();

    let result = metrics.update_metric(&catalog, "competition", 6, "");

    assert_eq!(
        result,
        Err(MetricError::InvalidRating {
            key: "competition".to_string(),
            rating: 6,
            min: 1,
            max: 5,
        })
    );
    assert!(metrics.instance("competition").is_none());
}

#[test]
fn unknown_keys_are_reported_without_touching_state() {
    let catalog = catalog();
    let mut metrics = office_metrics();
    let before = metrics.last_updated();

    let result = metrics.update_metric(&catalog, "parking_validation", 3, "");

    assert_eq!(
        result,
        Err(MetricError::UnknownMetricKey("parking_validation".to_string()))
    );
    assert_eq!(metrics.instances().count(), 0);
    assert_eq!(metrics.last_updated(), before);
}

#[test]
fn metrics_for_other_site_types_are_not_applicable() {
    let catalog = catalog();
    let mut metrics = office_metrics();

    assert!(matches!(
        metrics.update_metric(&catalog, "school_enrollment", 4, ""),
        Err(MetricError::NotApplicable {
            site_type: SiteType::Office,
            ..
        })
    ));
}

#[test]
fn overall_score_is_insufficient_below_the_minimum() {
    let catalog = catalog();
    let mut metrics = office_metrics();
    metrics
        .update_metric(&catalog, "foot_traffic", 5, "")
        .expect("rate");
    metrics
        .update_metric(&catalog, "demographics", 5, "")
        .expect("rate");

    assert_eq!(
        metrics.overall_score(&catalog, DEFAULT_MINIMUM_RATED),
        Score::Insufficient
    );
    assert_eq!(metrics.overall_score(&catalog, 2), Score::Scored(5.0));
}

#[test]
fn overall_score_is_the_weighted_mean_of_rated_metrics() {
    let catalog = catalog();
    let mut metrics = office_metrics();
    for (key, rating) in [("foot_traffic", 4), ("demographics", 3), ("competition", 5)] {
        metrics.update_metric(&catalog, key, rating, "").expect("rate");
    }
    metrics
        .update_metric(&catalog, "security", 0, "not surveyed")
        .expect("unrated instance");

    // (4 * 0.15 + 3 * 0.10 + 5 * 0.10) / 0.35
    let score = metrics
        .overall_score(&catalog, DEFAULT_MINIMUM_RATED)
        .value()
        .expect("enough ratings");
    assert_close(score, 4.0);
}

#[test]
fn orphaned_ratings_fall_back_to_unit_weight() {
    let mut extended = catalog();
    extended
        .register(custom_definition("loading_dock", 0.5, &[SiteType::Office]))
        .expect("registers");

    let mut metrics = office_metrics();
    for (key, rating) in [("foot_traffic", 4), ("demographics", 2), ("loading_dock", 5)] {
        metrics.update_metric(&extended, key, rating, "").expect("rate");
    }

    let trimmed = catalog();
    // (4 * 0.15 + 2 * 0.10 + 5 * 1.0) / 1.25
    let score = metrics
        .overall_score(&trimmed, DEFAULT_MINIMUM_RATED)
        .value()
        .expect("enough ratings");
    assert_close(score, 4.64);
}

#[test]
fn zero_weight_ratings_cannot_produce_a_score() {
    let mut catalog = MetricCatalog::new();
    for key in ["a", "b", "c"] {
        catalog
            .register(custom_definition(key, 0.0, &[SiteType::Office]))
            .expect("registers");
    }
    let mut metrics = office_metrics();
    for key in ["a", "b", "c"] {
        metrics.update_metric(&catalog, key, 4, "").expect("rate");
    }

    assert_eq!(metrics.overall_score(&catalog, 3), Score::Insufficient);
}

#[test]
fn category_score_is_an_unweighted_mean() {
    let catalog = catalog();
    let mut metrics = office_metrics();
    metrics
        .update_metric(&catalog, "foot_traffic", 5, "")
        .expect("rate");
    metrics
        .update_metric(&catalog, "office_headcount", 2, "")
        .expect("rate");
    metrics
        .update_metric(&catalog, "demographics", 4, "")
        .expect("rate");

    assert_eq!(
        metrics.category_score(&catalog, MetricCategory::FootTraffic),
        Score::Scored(3.5)
    );
    assert_eq!(
        metrics.category_score(&catalog, MetricCategory::Security),
        Score::Insufficient
    );

    let scores = metrics.category_scores(&catalog);
    assert_eq!(scores.len(), 2);
    assert_eq!(scores.get(&MetricCategory::Demographics), Some(&4.0));
}

#[test]
fn completion_counts_applicable_rated_metrics() {
    let catalog = catalog();
    let mut metrics = office_metrics();
    assert_close(metrics.completion_for(&catalog), 0.0);

    for key in ["foot_traffic", "demographics", "office_headcount"] {
        metrics.update_metric(&catalog, key, 3, "").expect("rate");
    }

    let applicable = catalog.metrics_for(SiteType::Office).len() as f64;
    assert_close(metrics.completion_for(&catalog), 3.0 / applicable);
}

proptest! {
    #[test]
    fn weighted_score_ignores_insertion_order(
        ratings in proptest::collection::vec(1u8..=5, 8),
        order in Just((0usize..8).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let catalog = catalog();
        let keys = [
            "foot_traffic",
            "demographics",
            "competition",
            "accessibility",
            "security",
            "visibility",
            "amenities",
            "commission",
        ];

        let mut forward = office_metrics();
        for (key, rating) in keys.iter().zip(&ratings) {
            forward.update_metric(&catalog, key, *rating, "").expect("rate");
        }

        let mut shuffled = office_metrics();
        for &index in &order {
            shuffled
                .update_metric(&catalog, keys[index], ratings[index], "")
                .expect("rate");
        }

        let expected: f64 = keys
            .iter()
            .zip(&ratings)
            .map(|(key, rating)| {
                f64::from(*rating) * catalog.definition(key).expect("seeded").weight
            })
            .sum::<f64>()
            / 0.75;

        let forward_score = forward.overall_score(&catalog, 3).value().expect("scored");
        let shuffled_score = shuffled.overall_score(&catalog, 3).value().expect("scored");
        prop_assert!((forward_score - shuffled_score).abs() < 1e-9);
        prop_assert!((forward_score - expected).abs() < 1e-9);
        prop_assert!(forward_score > 1.0 - 1e-9 && forward_score < 5.0 + 1e-9);
    }
}
