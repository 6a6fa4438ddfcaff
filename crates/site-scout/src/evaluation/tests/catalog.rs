use super::common::*;
use crate::evaluation::catalog::{CatalogError, MetricCatalog, RatingRange};
use crate::evaluation::domain::{MetricCategory, SiteType};
use crate::evaluation::scorecard::ScoreCard;

const GENERAL_KEYS: [&str; 8] = [
    "foot_traffic",
    "demographics",
    "competition",
    "accessibility",
    "security",
    "visibility",
    "amenities",
    "commission",
];

#[test]
fn metrics_for_only_returns_applicable_definitions() {
    let catalog = catalog();

    for site_type in SiteType::ordered() {
        let metrics = catalog.metrics_for(site_type);
        assert!(!metrics.is_empty());
        assert!(metrics
            .iter()
            .all(|definition| definition.applicable_types.contains(&site_type)));
    }
}

#[test]
fn general_set_is_returned_for_every_site_type() {
    let catalog = catalog();

    for site_type in SiteType::ordered() {
        let keys: Vec<&str> = catalog
            .metrics_for(site_type)
            .into_iter()
            .map(|definition| definition.key.as_str())
            .collect();
        for general in GENERAL_KEYS {
            assert!(keys.contains(&general), "{general} missing for {site_type}");
        }
    }
}

#[test]
fn specialised_metrics_do_not_leak_across_site_types() {
    let catalog = catalog();

    let office_keys: Vec<&str> = catalog
        .metrics_for(SiteType::Office)
        .into_iter()
        .map(|definition| definition.key.as_str())
        .collect();

    assert!(office_keys.contains(&"office_headcount"));
    assert!(!office_keys.iter().any(|key| key.starts_with("hospital_")));
    assert!(!office_keys.iter().any(|key| key.starts_with("school_")));
    assert!(!office_keys.iter().any(|key| key.starts_with("residential_")));
}

#[test]
fn each_site_type_totals_full_weight() {
    let catalog = catalog();

    for site_type in SiteType::ordered() {
        assert_close(catalog.total_weight_for(site_type), 1.0);

        let specialised: f64 = catalog
            .metrics_for(site_type)
            .into_iter()
            .filter(|definition| definition.applicable_types.len() == 1)
            .map(|definition| definition.weight)
            .sum();
        assert_close(specialised, 0.25);
    }
}

#[test]
fn required_metrics_are_flagged_definitions() {
    let catalog = catalog();
    let required = catalog.required_metrics_for(SiteType::School);

    assert!(required.iter().all(|definition| definition.is_required));
    let keys: Vec<&str> = required.iter().map(|definition| definition.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "foot_traffic",
            "demographics",
            "competition",
            "accessibility",
            "commission",
            "school_enrollment",
            "school_nutrition_policy",
        ]
    );
}

#[test]
fn metrics_for_category_filters_by_type_and_category() {
    let catalog = catalog();
    let keys: Vec<&str> = catalog
        .metrics_for_category(SiteType::Hospital, MetricCategory::Competition)
        .into_iter()
        .map(|definition| definition.key.as_str())
        .collect();

    assert_eq!(keys, vec!["competition", "hospital_cafeteria_competition"]);
}

#[test]
fn categories_for_follow_display_order() {
    let catalog = catalog();
    let categories = catalog.categories_for(SiteType::Office);

    assert_eq!(categories.first(), Some(&MetricCategory::FootTraffic));
    assert!(categories.contains(&MetricCategory::Restrictions));
    assert!(!categories.is_empty());
    assert!(categories.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn every_seeded_definition_has_a_label_per_rating() {
    let catalog = catalog();

    for definition in catalog.definitions() {
        assert_eq!(definition.rating_range, RatingRange::new(1, 5));
        for rating in definition.rating_range.min..=definition.rating_range.max {
            assert!(
                definition.label_for(rating).is_some(),
                "{} lacks a label for {rating}",
                definition.key
            );
        }
    }

    let competition = catalog.definition("competition").expect("seeded");
    assert_eq!(competition.label_for(1), Some("High competition"));
    assert_eq!(competition.label_for(0), None);
}

#[test]
fn getting_an_unknown_definition_returns_none() {
    assert!(catalog().definition("parking_validation").is_none());
}

#[test]
fn register_rejects_duplicate_keys() {
    let mut catalog = catalog();
    let before = catalog.len();

    let result = catalog.register(custom_definition("foot_traffic", 0.2, &[SiteType::Office]));

    assert_eq!(
        result,
        Err(CatalogError::DuplicateDefinitionKey("foot_traffic".to_string()))
    );
    assert_eq!(catalog.len(), before);
}

#[test]
fn register_rejects_inverted_rating_ranges() {
    let mut catalog = MetricCatalog::new();
    let mut definition = custom_definition("loading_dock", 0.1, &[SiteType::Office]);
    definition.rating_range = RatingRange::new(5, 1);

    assert!(matches!(
        catalog.register(definition),
        Err(CatalogError::InvalidRatingRange { min: 5, max: 1, .. })
    ));
    assert!(catalog.is_empty());
}

#[test]
fn register_rejects_negative_weights() {
    let mut catalog = MetricCatalog::new();

    assert!(matches!(
        catalog.register(custom_definition("loading_dock", -0.1, &[SiteType::Office])),
        Err(CatalogError::InvalidWeight { .. })
    ));
}

#[test]
fn registered_definitions_are_queryable() {
    let mut catalog = MetricCatalog::new();
    catalog
        .register(custom_definition("loading_dock", 0.1, &[SiteType::Office]))
        .expect("registers");

    assert!(catalog.definition("loading_dock").is_some());
    assert_eq!(catalog.metrics_for(SiteType::Office).len(), 1);
    assert!(catalog.metrics_for(SiteType::School).is_empty());
}

#[test]
fn scorecard_fields_never_shadow_catalog_keys() {
    let catalog = catalog();

    for site_type in SiteType::ordered() {
        for (key, _) in ScoreCard::for_site_type(site_type).fields() {
            assert!(
                catalog.definition(key).is_none(),
                "{key} is both a catalog key and a scorecard field"
            );
        }
    }
}
