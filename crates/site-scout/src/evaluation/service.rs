use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};

use super::catalog::MetricCatalog;
use super::domain::SiteId;
use super::evaluator::{SiteEvaluation, SiteEvaluator};
use super::financial::FinancialRecord;
use super::metrics::MetricError;
use super::repository::{RepositoryError, SiteRepository};
use super::scorecard::ScoreCardError;
use super::site::{NewSite, Site};
use crate::config::ScoringConfig;

/// Service composing the shared catalog, the evaluator, and site storage.
///
/// Mutations to one site are serialised through a per-site lock; different sites never
/// contend with each other. The lock table holds one entry per site this service has
/// touched, so it is bounded by the number of sites in the repository.
pub struct SiteEvaluationService<R> {
    evaluator: Arc<SiteEvaluator>,
    repository: Arc<R>,
    site_locks: Mutex<HashMap<SiteId, Arc<Mutex<()>>>>,
    site_sequence: AtomicU64,
}

impl<R> SiteEvaluationService<R>
where
    R: SiteRepository + 'static,
{
    pub fn new(repository: Arc<R>, catalog: Arc<MetricCatalog>, config: ScoringConfig) -> Self {
        Self::with_evaluator(repository, Arc::new(SiteEvaluator::new(catalog, config)))
    }

    pub fn with_evaluator(repository: Arc<R>, evaluator: Arc<SiteEvaluator>) -> Self {
        Self {
            evaluator,
            repository,
            site_locks: Mutex::new(HashMap::new()),
            site_sequence: AtomicU64::new(1),
        }
    }

    pub fn evaluator(&self) -> &SiteEvaluator {
        &self.evaluator
    }

    /// Create a site with a fresh metric store, financial record, and scorecard.
    ///
    /// Ids come from this service's own sequence; ids already stored are skipped.
    pub fn create_site(&self, details: NewSite) -> Result<Site, SiteServiceError> {
        let id = loop {
            let candidate = self.next_site_id();
            if self.repository.fetch(&candidate)?.is_none() {
                break candidate;
            }
        };
        let site = self.evaluator.create_site(id, details);
        let stored = self.repository.insert(site)?;

        info!(
            site_id = %stored.id,
            site_type = %stored.site_type(),
            "site created"
        );
        Ok(stored)
    }

    /// Rate a catalog metric for a site.
    pub fn update_metric(
        &self,
        site_id: &SiteId,
        key: &str,
        rating: u8,
        notes: impl Into<String>,
    ) -> Result<Site, SiteServiceError> {
        let notes = notes.into();
        self.mutate(site_id, |evaluator, site| {
            evaluator
                .update_metric(site, key, rating, notes)
                .map_err(|err| {
                    if matches!(err, MetricError::UnknownMetricKey(_)) {
                        warn!(%site_id, key, "rejected rating for metric missing from catalog");
                    }
                    SiteServiceError::from(err)
                })?;
            info!(%site_id, key, rating, "metric rated");
            Ok(())
        })
    }

    /// Rate a field on the site's type-specific scorecard.
    pub fn update_type_metric(
        &self,
        site_id: &SiteId,
        field: &str,
        rating: u8,
        notes: impl Into<String>,
    ) -> Result<Site, SiteServiceError> {
        let notes = notes.into();
        self.mutate(site_id, |evaluator, site| {
            evaluator.update_type_metric(site, field, rating, notes)?;
            info!(%site_id, field, rating, "scorecard field rated");
            Ok(())
        })
    }

    pub fn update_financials(
        &self,
        site_id: &SiteId,
        financials: FinancialRecord,
    ) -> Result<Site, SiteServiceError> {
        self.mutate(site_id, |evaluator, site| {
            evaluator.update_financials(site, financials);
            info!(%site_id, "financial projections updated");
            Ok(())
        })
    }

    pub fn get(&self, site_id: &SiteId) -> Result<Site, SiteServiceError> {
        let site = self
            .repository
            .fetch(site_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(site)
    }

    pub fn list(&self) -> Result<Vec<Site>, SiteServiceError> {
        Ok(self.repository.list()?)
    }

    /// Score a stored site and attach its recommendation and completeness warnings.
    pub fn evaluate(&self, site_id: &SiteId) -> Result<SiteEvaluation, SiteServiceError> {
        let site = self.get(site_id)?;
        let evaluation = self.evaluator.evaluate(&site);

        info!(
            %site_id,
            decision = %evaluation.decision.summary(),
            warnings = evaluation.warnings.len(),
            "site evaluated"
        );
        Ok(evaluation)
    }

    fn next_site_id(&self) -> SiteId {
        let id = self.site_sequence.fetch_add(1, Ordering::Relaxed);
        SiteId(format!("site-{id:06}"))
    }

    fn mutate<F>(&self, site_id: &SiteId, apply: F) -> Result<Site, SiteServiceError>
    where
        F: FnOnce(&SiteEvaluator, &mut Site) -> Result<(), SiteServiceError>,
    {
        let lock = self.site_lock(site_id);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut site = self.get(site_id)?;
        apply(&self.evaluator, &mut site)?;
        self.repository.update(site.clone())?;
        Ok(site)
    }

    fn site_lock(&self, site_id: &SiteId) -> Arc<Mutex<()>> {
        let mut locks = self
            .site_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        locks.entry(site_id.clone()).or_default().clone()
    }
}

/// Error raised by the site evaluation service.
#[derive(Debug, thiserror::Error)]
pub enum SiteServiceError {
    #[error(transparent)]
    Metric(#[from] MetricError),
    #[error(transparent)]
    ScoreCard(#[from] ScoreCardError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
