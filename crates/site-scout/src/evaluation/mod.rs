//! Metric catalog, rating stores, and scoring pipeline for candidate vending sites.
//!
//! Data flows one way: the [`MetricCatalog`] defines what can be rated, each [`Site`]
//! owns its [`SiteMetrics`], [`ScoreCard`], and [`FinancialRecord`], the scorers reduce
//! those to [`Score`]s, and [`classify`] turns the overall score into a [`Decision`].
//! [`SiteEvaluationService`] is the entry point for hosts.

mod breakdown;
pub mod catalog;
mod decision;
pub mod domain;
mod evaluator;
mod financial;
pub mod import;
mod metrics;
pub mod repository;
mod score;
pub mod scorecard;
pub mod service;
mod site;

#[cfg(test)]
mod tests;

pub use breakdown::{CombinationRule, ScoreBreakdown};
pub use catalog::{CatalogError, MetricCatalog, MetricDefinition, RatingRange};
pub use decision::{classify, Decision, Recommendation, ScoreScale};
pub use domain::{DomainParseError, MetricCategory, SiteId, SiteType};
pub use evaluator::{CompletionWarning, SiteEvaluation, SiteEvaluator};
pub use financial::{financial_score, FinancialRecord};
pub use import::{
    ImportSummary, RatingCell, RatingEntry, RatingsImportError, RatingsImporter, SkippedRating,
};
pub use metrics::{MetricError, MetricInstance, SiteMetrics, DEFAULT_MINIMUM_RATED, FALLBACK_WEIGHT};
pub use repository::{RepositoryError, SiteRepository};
pub use score::Score;
pub use scorecard::{
    FieldRating, HospitalField, OfficeField, RatingSheet, ResidentialField, SchoolField,
    ScoreCard, ScoreCardEntry, ScoreCardError, ScoreField, MAX_FIELD_RATING,
    MINIMUM_RATED_FIELDS,
};
pub use service::{SiteEvaluationService, SiteServiceError};
pub use site::{NewSite, Site, SiteStateError};
