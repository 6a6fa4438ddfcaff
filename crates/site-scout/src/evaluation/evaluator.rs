use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::breakdown::ScoreBreakdown;
use super::catalog::MetricCatalog;
use super::decision::Decision;
use super::domain::{MetricCategory, SiteId, SiteType};
use super::financial::{financial_score, FinancialRecord};
use super::metrics::MetricError;
use super::scorecard::{ScoreCardEntry, ScoreCardError};
use super::site::{NewSite, Site};
use crate::config::ScoringConfig;

/// Advisory gap found when checking a site for completeness. Never blocks scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompletionWarning {
    MissingRequiredMetric { key: String, title: String },
    NoTypeSpecificRatings { site_type: SiteType },
    MissingFinancials,
}

impl fmt::Display for CompletionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionWarning::MissingRequiredMetric { title, .. } => {
                write!(f, "Required metric '{title}' has not been rated")
            }
            CompletionWarning::NoTypeSpecificRatings { site_type } => {
                write!(f, "No {site_type} scorecard metrics have been rated")
            }
            CompletionWarning::MissingFinancials => {
                f.write_str("No financial projections have been entered")
            }
        }
    }
}

/// Complete evaluation snapshot handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteEvaluation {
    pub site_id: SiteId,
    pub site_type: SiteType,
    pub breakdown: ScoreBreakdown,
    pub decision: Decision,
    pub category_scores: BTreeMap<MetricCategory, f64>,
    pub general_completion: f64,
    pub type_specific_completion: f64,
    pub scorecard: Vec<ScoreCardEntry>,
    pub warnings: Vec<CompletionWarning>,
}

/// Composes the catalog, scorecards, and financial scorer into one evaluation.
///
/// Stateless apart from the shared catalog handle, so one evaluator serves every site.
#[derive(Debug, Clone)]
pub struct SiteEvaluator {
    catalog: Arc<MetricCatalog>,
    config: ScoringConfig,
}

impl SiteEvaluator {
    pub fn new(catalog: Arc<MetricCatalog>, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &MetricCatalog {
        &self.catalog
    }

    pub fn config(&self) -> ScoringConfig {
        self.config
    }

    /// Builds a site with an empty metric store, zeroed financials, and the scorecard
    /// variant for its type.
    pub fn create_site(&self, id: SiteId, details: NewSite) -> Site {
        Site::new(id, details)
    }

    pub fn update_metric(
        &self,
        site: &mut Site,
        key: &str,
        rating: u8,
        notes: impl Into<String>,
    ) -> Result<(), MetricError> {
        site.metrics_mut()
            .update_metric(&self.catalog, key, rating, notes)
    }

    pub fn update_type_metric(
        &self,
        site: &mut Site,
        field: &str,
        rating: u8,
        notes: impl Into<String>,
    ) -> Result<(), ScoreCardError> {
        site.scorecard_mut().update_metric(field, rating, notes)
    }

    pub fn update_financials(&self, site: &mut Site, financials: FinancialRecord) {
        site.financials = financials;
    }

    pub fn score_breakdown(&self, site: &Site) -> ScoreBreakdown {
        let breakdown = ScoreBreakdown::new(
            site.metrics()
                .overall_score(&self.catalog, self.config.minimum_rated),
            site.scorecard().calculate_overall_score(),
            financial_score(&site.financials),
            self.config.combination,
        );

        debug!(
            site_id = %site.id,
            general = %breakdown.general,
            type_specific = %breakdown.type_specific,
            financial = %breakdown.financial,
            overall = %breakdown.overall,
            "computed score breakdown"
        );
        breakdown
    }

    pub fn recommendation(&self, site: &Site) -> Decision {
        self.score_breakdown(site).decision()
    }

    pub fn validate_for_completion(&self, site: &Site) -> Vec<CompletionWarning> {
        let mut warnings: Vec<CompletionWarning> = self
            .catalog
            .required_metrics_for(site.site_type())
            .into_iter()
            .filter(|definition| site.metrics().get_rating(&definition.key) == 0)
            .map(|definition| CompletionWarning::MissingRequiredMetric {
                key: definition.key.clone(),
                title: definition.title.clone(),
            })
            .collect();

        if site.scorecard().rated_count() < 1 {
            warnings.push(CompletionWarning::NoTypeSpecificRatings {
                site_type: site.site_type(),
            });
        }

        if !site.financials.has_figures() {
            warnings.push(CompletionWarning::MissingFinancials);
        }

        warnings
    }

    pub fn evaluate(&self, site: &Site) -> SiteEvaluation {
        let breakdown = self.score_breakdown(site);

        SiteEvaluation {
            site_id: site.id.clone(),
            site_type: site.site_type(),
            decision: breakdown.decision(),
            breakdown,
            category_scores: site.metrics().category_scores(&self.catalog),
            general_completion: site.metrics().completion_for(&self.catalog),
            type_specific_completion: site.scorecard().completion_percentage(),
            scorecard: site.scorecard().entries(),
            warnings: self.validate_for_completion(site),
        }
    }
}
