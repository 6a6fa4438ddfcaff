use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use crate::config::ScoringConfig;
use crate::evaluation::catalog::{MetricCatalog, MetricDefinition, RatingRange};
use crate::evaluation::domain::{MetricCategory, SiteId, SiteType};
use crate::evaluation::evaluator::SiteEvaluator;
use crate::evaluation::financial::FinancialRecord;
use crate::evaluation::repository::{RepositoryError, SiteRepository};
use crate::evaluation::service::SiteEvaluationService;
use crate::evaluation::site::{NewSite, Site};

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn catalog() -> MetricCatalog {
    MetricCatalog::standard().expect("standard catalog seeds")
}

pub(super) fn shared_catalog() -> Arc<MetricCatalog> {
    Arc::new(catalog())
}

pub(super) fn evaluator() -> SiteEvaluator {
    SiteEvaluator::new(shared_catalog(), ScoringConfig::default())
}

pub(super) fn timestamp(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn new_site(site_type: SiteType) -> NewSite {
    NewSite {
        name: "Riverside Commons".to_string(),
        address: "400 River Rd".to_string(),
        site_type,
        comment: "Lobby next to the elevators".to_string(),
    }
}

pub(super) fn site(site_type: SiteType) -> Site {
    Site::new(SiteId("site-test".to_string()), new_site(site_type))
}

pub(super) fn custom_definition(key: &str, weight: f64, applicable: &[SiteType]) -> MetricDefinition {
    MetricDefinition {
        key: key.to_string(),
        title: key.replace('_', " "),
        description: String::new(),
        category: MetricCategory::Operations,
        weight,
        is_required: false,
        applicable_types: applicable.iter().copied().collect(),
        rating_range: RatingRange::default(),
        rating_labels: Default::default(),
    }
}

/// Financials from the pinned example: revenue 10k, cost 5k, margin 10%, ROI 25%.
pub(super) fn sample_financials() -> FinancialRecord {
    FinancialRecord {
        revenue_projection: 10_000.0,
        cost_projection: 5_000.0,
        profit_margin: 10.0,
        payback_period_months: 18.0,
        roi_percentage: 25.0,
    }
}

/// Office site with three weighted general ratings (4.0) and three scorecard fields (4.0).
pub(super) fn rated_office_site(evaluator: &SiteEvaluator) -> Site {
    let mut site = site(SiteType::Office);
    evaluator
        .update_metric(&mut site, "foot_traffic", 4, "steady lunch crowd")
        .expect("rating accepted");
    evaluator
        .update_metric(&mut site, "demographics", 3, "")
        .expect("rating accepted");
    evaluator
        .update_metric(&mut site, "competition", 5, "no cafeteria")
        .expect("rating accepted");
    evaluator
        .update_type_metric(&mut site, "office_common_areas", 4, "")
        .expect("field accepted");
    evaluator
        .update_type_metric(&mut site, "office_hours_access", 5, "badge access 24/7")
        .expect("field accepted");
    evaluator
        .update_type_metric(&mut site, "office_tenant_amenities", 3, "")
        .expect("field accepted");
    site
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    sites: Mutex<HashMap<SiteId, Site>>,
}

impl SiteRepository for MemoryRepository {
    fn insert(&self, site: Site) -> Result<Site, RepositoryError> {
        let mut guard = self.sites.lock().expect("repository mutex poisoned");
        if guard.contains_key(&site.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(site.id.clone(), site.clone());
        Ok(site)
    }

    fn update(&self, site: Site) -> Result<(), RepositoryError> {
        let mut guard = self.sites.lock().expect("repository mutex poisoned");
        match guard.get_mut(&site.id) {
            Some(existing) => {
                *existing = site;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &SiteId) -> Result<Option<Site>, RepositoryError> {
        let guard = self.sites.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Site>, RepositoryError> {
        let guard = self.sites.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub(super) fn service() -> (Arc<MemoryRepository>, SiteEvaluationService<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = SiteEvaluationService::new(
        repository.clone(),
        shared_catalog(),
        ScoringConfig::default(),
    );
    (repository, service)
}
