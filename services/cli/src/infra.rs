use site_scout::config::ScoringConfig;
use site_scout::evaluation::{
    MetricCatalog, MetricCategory, RepositoryError, Site, SiteEvaluationService, SiteId,
    SiteRepository, SiteType,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Process-local site storage; the CLI keeps nothing between runs.
#[derive(Default, Clone)]
pub(crate) struct InMemorySiteRepository {
    sites: Arc<Mutex<HashMap<SiteId, Site>>>,
}

impl InMemorySiteRepository {
    fn sites(&self) -> std::sync::MutexGuard<'_, HashMap<SiteId, Site>> {
        self.sites.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SiteRepository for InMemorySiteRepository {
    fn insert(&self, site: Site) -> Result<Site, RepositoryError> {
        let mut guard = self.sites();
        if guard.contains_key(&site.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(site.id.clone(), site.clone());
        Ok(site)
    }

    fn update(&self, site: Site) -> Result<(), RepositoryError> {
        let mut guard = self.sites();
        if guard.contains_key(&site.id) {
            guard.insert(site.id.clone(), site);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SiteId) -> Result<Option<Site>, RepositoryError> {
        Ok(self.sites().get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Site>, RepositoryError> {
        let mut sites: Vec<Site> = self.sites().values().cloned().collect();
        sites.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(sites)
    }
}

pub(crate) fn site_service(
    catalog: Arc<MetricCatalog>,
    config: ScoringConfig,
) -> SiteEvaluationService<InMemorySiteRepository> {
    SiteEvaluationService::new(
        Arc::new(InMemorySiteRepository::default()),
        catalog,
        config,
    )
}

pub(crate) fn parse_site_type(raw: &str) -> Result<SiteType, String> {
    raw.parse::<SiteType>().map_err(|err| err.to_string())
}

pub(crate) fn parse_category(raw: &str) -> Result<MetricCategory, String> {
    raw.parse::<MetricCategory>().map_err(|err| err.to_string())
}
