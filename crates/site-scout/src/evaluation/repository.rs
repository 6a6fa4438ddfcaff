use super::domain::SiteId;
use super::site::Site;

/// Storage abstraction; the engine itself never performs I/O.
pub trait SiteRepository: Send + Sync {
    fn insert(&self, site: Site) -> Result<Site, RepositoryError>;
    fn update(&self, site: Site) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SiteId) -> Result<Option<Site>, RepositoryError>;
    fn list(&self) -> Result<Vec<Site>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("site already exists")]
    Conflict,
    #[error("site not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
