use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{SiteId, SiteType};
use super::financial::FinancialRecord;
use super::metrics::SiteMetrics;
use super::scorecard::ScoreCard;

/// Caller-supplied details for a new site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSite {
    pub name: String,
    pub address: String,
    pub site_type: SiteType,
    #[serde(default)]
    pub comment: String,
}

/// Candidate placement together with everything it has been rated on.
///
/// The scorecard variant is fixed at construction and always matches `site_type()`.
/// Loading persisted state re-checks that the metric store agrees with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredSite")]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    pub address: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub financials: FinancialRecord,
    metrics: SiteMetrics,
    scorecard: ScoreCard,
}

impl Site {
    pub fn new(id: SiteId, details: NewSite) -> Self {
        let NewSite {
            name,
            address,
            site_type,
            comment,
        } = details;

        Self {
            metrics: SiteMetrics::new(id.clone(), site_type),
            scorecard: ScoreCard::for_site_type(site_type),
            id,
            name,
            address,
            comment,
            created_at: Utc::now(),
            financials: FinancialRecord::default(),
        }
    }

    pub fn site_type(&self) -> SiteType {
        self.scorecard.site_type()
    }

    pub fn metrics(&self) -> &SiteMetrics {
        &self.metrics
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut SiteMetrics {
        &mut self.metrics
    }

    pub fn scorecard(&self) -> &ScoreCard {
        &self.scorecard
    }

    pub(crate) fn scorecard_mut(&mut self) -> &mut ScoreCard {
        &mut self.scorecard
    }
}

/// Persisted state rejected because its parts describe different sites.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteStateError {
    #[error("site {site_id}: metrics are for {metrics} sites but the scorecard is for {scorecard} sites")]
    SiteTypeMismatch {
        site_id: SiteId,
        metrics: SiteType,
        scorecard: SiteType,
    },
    #[error("site {site_id}: metrics belong to site {metrics_site_id}")]
    SiteIdMismatch {
        site_id: SiteId,
        metrics_site_id: SiteId,
    },
}

#[derive(Deserialize)]
struct StoredSite {
    id: SiteId,
    name: String,
    address: String,
    comment: String,
    created_at: DateTime<Utc>,
    financials: FinancialRecord,
    metrics: SiteMetrics,
    scorecard: ScoreCard,
}

impl TryFrom<StoredSite> for Site {
    type Error = SiteStateError;

    fn try_from(stored: StoredSite) -> Result<Self, Self::Error> {
        if stored.metrics.site_type() != stored.scorecard.site_type() {
            return Err(SiteStateError::SiteTypeMismatch {
                site_id: stored.id,
                metrics: stored.metrics.site_type(),
                scorecard: stored.scorecard.site_type(),
            });
        }

        if stored.metrics.site_id() != &stored.id {
            return Err(SiteStateError::SiteIdMismatch {
                metrics_site_id: stored.metrics.site_id().clone(),
                site_id: stored.id,
            });
        }

        Ok(Self {
            id: stored.id,
            name: stored.name,
            address: stored.address,
            comment: stored.comment,
            created_at: stored.created_at,
            financials: stored.financials,
            metrics: stored.metrics,
            scorecard: stored.scorecard,
        })
    }
}
