#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use site_scout::config::ScoringConfig;
use site_scout::evaluation::{
    MetricCatalog, NewSite, RepositoryError, Site, SiteEvaluationService, SiteId,
    SiteRepository, SiteType,
};

#[derive(Default)]
pub struct InMemorySites {
    sites: Mutex<HashMap<SiteId, Site>>,
}

impl SiteRepository for InMemorySites {
    fn insert(&self, site: Site) -> Result<Site, RepositoryError> {
        let mut guard = self.sites.lock().expect("sites mutex poisoned");
        if guard.contains_key(&site.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(site.id.clone(), site.clone());
        Ok(site)
    }

    fn update(&self, site: Site) -> Result<(), RepositoryError> {
        let mut guard = self.sites.lock().expect("sites mutex poisoned");
        let existing = guard.get_mut(&site.id).ok_or(RepositoryError::NotFound)?;
        *existing = site;
        Ok(())
    }

    fn fetch(&self, id: &SiteId) -> Result<Option<Site>, RepositoryError> {
        let guard = self.sites.lock().expect("sites mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Site>, RepositoryError> {
        let guard = self.sites.lock().expect("sites mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

pub fn service_with(config: ScoringConfig) -> SiteEvaluationService<InMemorySites> {
    let catalog = MetricCatalog::standard().expect("standard catalog seeds");
    SiteEvaluationService::new(Arc::new(InMemorySites::default()), Arc::new(catalog), config)
}

pub fn service() -> SiteEvaluationService<InMemorySites> {
    service_with(ScoringConfig::default())
}

pub fn new_site(name: &str, site_type: SiteType) -> NewSite {
    NewSite {
        name: name.to_string(),
        address: "1200 Market St".to_string(),
        site_type,
        comment: String::new(),
    }
}
