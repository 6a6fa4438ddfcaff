//! Registry of rating criteria and their applicability per site type.
//!
//! A catalog is seeded once at start-up ([`MetricCatalog::standard`]) and then shared
//! read-only behind an `Arc`. Registration needs `&mut self`.

mod seed;

use super::domain::{MetricCategory, SiteType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::info;

/// Inclusive bounds for a metric's rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRange {
    pub min: u8,
    pub max: u8,
}

impl RatingRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, rating: u8) -> bool {
        rating >= self.min && rating <= self.max
    }
}

impl Default for RatingRange {
    fn default() -> Self {
        Self::new(1, 5)
    }
}

/// Immutable description of a rateable criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    pub key: String,
    pub title: String,
    pub description: String,
    pub category: MetricCategory,
    /// Relative contribution; not normalised across the catalog.
    pub weight: f64,
    pub is_required: bool,
    pub applicable_types: BTreeSet<SiteType>,
    pub rating_range: RatingRange,
    pub rating_labels: BTreeMap<u8, String>,
}

impl MetricDefinition {
    pub fn applies_to(&self, site_type: SiteType) -> bool {
        self.applicable_types.contains(&site_type)
    }

    pub fn label_for(&self, rating: u8) -> Option<&str> {
        self.rating_labels.get(&rating).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("metric definition '{0}' is already registered")]
    DuplicateDefinitionKey(String),
    #[error("metric definition '{key}' has an inverted rating range ({min} > {max})")]
    InvalidRatingRange { key: String, min: u8, max: u8 },
    #[error("metric definition '{key}' has a negative or non-finite weight ({weight})")]
    InvalidWeight { key: String, weight: f64 },
}

/// Ordered collection of metric definitions keyed by unique metric key.
#[derive(Debug, Clone, Default)]
pub struct MetricCatalog {
    definitions: Vec<MetricDefinition>,
    index: HashMap<String, usize>,
}

impl MetricCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the general set plus one specialised set per site type.
    pub fn standard() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for definition in seed::standard_definitions() {
            catalog.register(definition)?;
        }

        info!(definitions = catalog.len(), "metric catalog seeded");
        Ok(catalog)
    }

    pub fn register(&mut self, definition: MetricDefinition) -> Result<(), CatalogError> {
        if self.index.contains_key(&definition.key) {
            return Err(CatalogError::DuplicateDefinitionKey(definition.key));
        }

        let range = definition.rating_range;
        if range.min > range.max {
            return Err(CatalogError::InvalidRatingRange {
                key: definition.key,
                min: range.min,
                max: range.max,
            });
        }

        if !definition.weight.is_finite() || definition.weight < 0.0 {
            return Err(CatalogError::InvalidWeight {
                key: definition.key,
                weight: definition.weight,
            });
        }

        self.index
            .insert(definition.key.clone(), self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    pub fn definition(&self, key: &str) -> Option<&MetricDefinition> {
        self.index.get(key).map(|&position| &self.definitions[position])
    }

    pub fn definitions(&self) -> &[MetricDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn metrics_for(&self, site_type: SiteType) -> Vec<&MetricDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.applies_to(site_type))
            .collect()
    }

    pub fn metrics_for_category(
        &self,
        site_type: SiteType,
        category: MetricCategory,
    ) -> Vec<&MetricDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.applies_to(site_type) && definition.category == category)
            .collect()
    }

    pub fn required_metrics_for(&self, site_type: SiteType) -> Vec<&MetricDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.applies_to(site_type) && definition.is_required)
            .collect()
    }

    /// Distinct categories used by the metrics applicable to `site_type`, in display order.
    pub fn categories_for(&self, site_type: SiteType) -> Vec<MetricCategory> {
        let used: BTreeSet<MetricCategory> = self
            .metrics_for(site_type)
            .into_iter()
            .map(|definition| definition.category)
            .collect();

        MetricCategory::ordered()
            .into_iter()
            .filter(|category| used.contains(category))
            .collect()
    }

    pub fn total_weight_for(&self, site_type: SiteType) -> f64 {
        self.metrics_for(site_type)
            .into_iter()
            .map(|definition| definition.weight)
            .sum()
    }
}
