use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::MetricCatalog;
use super::domain::{MetricCategory, SiteId, SiteType};
use super::score::{gated_mean, Score};

/// Weight applied to stored ratings whose definition is no longer in the catalog.
pub const FALLBACK_WEIGHT: f64 = 1.0;

/// Default number of rated metrics required before an overall score is produced.
pub const DEFAULT_MINIMUM_RATED: usize = 3;

/// Rating captured for one catalog metric at one site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricInstance {
    pub definition_key: String,
    /// `0` means unrated.
    pub rating: u8,
    pub notes: String,
    pub rated_at: Option<DateTime<Utc>>,
}

impl MetricInstance {
    fn unrated(key: &str) -> Self {
        Self {
            definition_key: key.to_string(),
            rating: 0,
            notes: String::new(),
            rated_at: None,
        }
    }

    pub fn is_rated(&self) -> bool {
        self.rating > 0
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricError {
    #[error("metric '{0}' is not defined in the catalog")]
    UnknownMetricKey(String),
    #[error("metric '{key}' does not apply to {site_type} sites")]
    NotApplicable { key: String, site_type: SiteType },
    #[error("rating {rating} for '{key}' is outside {min}..={max}")]
    InvalidRating {
        key: String,
        rating: u8,
        min: u8,
        max: u8,
    },
}

/// Per-site store of catalog ratings.
///
/// The catalog is only consulted to validate and interpret ratings; instances are owned
/// here and created lazily on first update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMetrics {
    site_id: SiteId,
    site_type: SiteType,
    instances: BTreeMap<String, MetricInstance>,
    last_updated: DateTime<Utc>,
}

impl SiteMetrics {
    pub fn new(site_id: SiteId, site_type: SiteType) -> Self {
        Self {
            site_id,
            site_type,
            instances: BTreeMap::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn site_id(&self) -> &SiteId {
        &self.site_id
    }

    pub fn site_type(&self) -> SiteType {
        self.site_type
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn instance(&self, key: &str) -> Option<&MetricInstance> {
        self.instances.get(key)
    }

    pub fn instances(&self) -> impl Iterator<Item = &MetricInstance> {
        self.instances.values()
    }

    /// Current rating, `0` when unrated or unknown.
    pub fn get_rating(&self, key: &str) -> u8 {
        self.instance(key).map_or(0, |instance| instance.rating)
    }

    pub fn get_notes(&self, key: &str) -> &str {
        self.instance(key)
            .map_or("", |instance| instance.notes.as_str())
    }

    pub fn update_metric(
        &mut self,
        catalog: &MetricCatalog,
        key: &str,
        rating: u8,
        notes: impl Into<String>,
    ) -> Result<(), MetricError> {
        self.update_metric_at(catalog, key, rating, notes, Utc::now())
    }

    /// Upserts a rating. `rated_at` is stamped on the transition from unrated to rated
    /// and cleared when the rating returns to `0`.
    pub fn update_metric_at(
        &mut self,
        catalog: &MetricCatalog,
        key: &str,
        rating: u8,
        notes: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Result<(), MetricError> {
        let definition = catalog
            .definition(key)
            .ok_or_else(|| MetricError::UnknownMetricKey(key.to_string()))?;

        if !definition.applies_to(self.site_type) {
            return Err(MetricError::NotApplicable {
                key: key.to_string(),
                site_type: self.site_type,
            });
        }

        let range = definition.rating_range;
        if rating != 0 && !range.contains(rating) {
            return Err(MetricError::InvalidRating {
                key: key.to_string(),
                rating,
                min: range.min,
                max: range.max,
            });
        }

        let instance = self
            .instances
            .entry(key.to_string())
            .or_insert_with(|| MetricInstance::unrated(key));

        if rating == 0 {
            instance.rated_at = None;
        } else if !instance.is_rated() {
            instance.rated_at = Some(at);
        }
        instance.rating = rating;
        instance.notes = notes.into();

        self.last_updated = at;
        Ok(())
    }

    pub fn rated_count(&self) -> usize {
        self.instances().filter(|instance| instance.is_rated()).count()
    }

    /// Unweighted mean of rated metrics in `category`; a display aggregate only.
    pub fn category_score(&self, catalog: &MetricCatalog, category: MetricCategory) -> Score {
        let ratings = self
            .instances()
            .filter(|instance| instance.is_rated())
            .filter(|instance| {
                catalog
                    .definition(&instance.definition_key)
                    .is_some_and(|definition| definition.category == category)
            })
            .map(|instance| f64::from(instance.rating));

        gated_mean(ratings, 1)
    }

    /// Category scores for every category applicable to this site that has a rating.
    pub fn category_scores(&self, catalog: &MetricCatalog) -> BTreeMap<MetricCategory, f64> {
        catalog
            .categories_for(self.site_type)
            .into_iter()
            .filter_map(|category| {
                self.category_score(catalog, category)
                    .value()
                    .map(|score| (category, score))
            })
            .collect()
    }

    /// Weighted mean `Σ(rating·weight) / Σ(weight)` over rated metrics.
    ///
    /// `Insufficient` when fewer than `minimum_rated` metrics are rated or when every
    /// rated metric carries zero weight.
    pub fn overall_score(&self, catalog: &MetricCatalog, minimum_rated: usize) -> Score {
        let rated: Vec<&MetricInstance> = self
            .instances()
            .filter(|instance| instance.is_rated())
            .collect();

        if rated.is_empty() || rated.len() < minimum_rated {
            return Score::Insufficient;
        }

        let (weighted_sum, total_weight) =
            rated
                .iter()
                .fold((0.0, 0.0), |(weighted_sum, total_weight), instance| {
                    let weight = catalog
                        .definition(&instance.definition_key)
                        .map_or(FALLBACK_WEIGHT, |definition| definition.weight);
                    (
                        weighted_sum + f64::from(instance.rating) * weight,
                        total_weight + weight,
                    )
                });

        if total_weight <= 0.0 {
            return Score::Insufficient;
        }

        Score::Scored(weighted_sum / total_weight)
    }

    /// Fraction of applicable catalog metrics that carry a rating, in `0.0..=1.0`.
    pub fn completion_for(&self, catalog: &MetricCatalog) -> f64 {
        let applicable = catalog.metrics_for(self.site_type);
        if applicable.is_empty() {
            return 0.0;
        }

        let rated = applicable
            .iter()
            .filter(|definition| self.get_rating(&definition.key) > 0)
            .count();

        rated as f64 / applicable.len() as f64
    }
}
