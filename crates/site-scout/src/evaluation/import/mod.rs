//! CSV ratings sheets (`Metric,Rating,Notes`) captured during site walk-throughs.

mod parser;

use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use super::domain::SiteId;
use super::repository::SiteRepository;
use super::service::{SiteEvaluationService, SiteServiceError};

#[derive(Debug, thiserror::Error)]
pub enum RatingsImportError {
    #[error("failed to read ratings sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid ratings CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Rating cell as written in the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RatingCell {
    Value(u8),
    /// Not a whole number in `0..=255`, e.g. `300`, `-1`, or `4.5`.
    Unreadable(String),
}

/// One parsed row of a ratings sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingEntry {
    pub key: String,
    pub rating: RatingCell,
    pub notes: String,
}

/// Row that could not be applied to the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRating {
    pub key: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub catalog_metrics: Vec<String>,
    pub scorecard_fields: Vec<String>,
    pub skipped: Vec<SkippedRating>,
}

impl ImportSummary {
    pub fn applied_count(&self) -> usize {
        self.catalog_metrics.len() + self.scorecard_fields.len()
    }
}

pub struct RatingsImporter;

impl RatingsImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RatingEntry>, RatingsImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RatingEntry>, RatingsImportError> {
        Ok(parser::parse_entries(reader)?)
    }

    /// Routes each row to the catalog store or the site's scorecard.
    ///
    /// Unknown keys, unreadable ratings, and out-of-range ratings are reported in the
    /// summary instead of aborting the import; storage failures still propagate.
    pub fn apply<R>(
        entries: &[RatingEntry],
        service: &SiteEvaluationService<R>,
        site_id: &SiteId,
    ) -> Result<ImportSummary, SiteServiceError>
    where
        R: SiteRepository + 'static,
    {
        let site = service.get(site_id)?;
        let mut summary = ImportSummary::default();

        for entry in entries {
            let rating = match &entry.rating {
                RatingCell::Value(rating) => *rating,
                RatingCell::Unreadable(raw) => {
                    warn!(
                        %site_id,
                        key = %entry.key,
                        rating = %raw,
                        "skipping unreadable rating in ratings sheet"
                    );
                    summary.skipped.push(SkippedRating {
                        key: entry.key.clone(),
                        reason: format!("rating '{raw}' is not a whole number in 0..=255"),
                    });
                    continue;
                }
            };

            let in_catalog = service.evaluator().catalog().definition(&entry.key).is_some();
            let outcome = if in_catalog {
                service.update_metric(site_id, &entry.key, rating, entry.notes.as_str())
            } else if site.scorecard().has_field(&entry.key) {
                service.update_type_metric(site_id, &entry.key, rating, entry.notes.as_str())
            } else {
                warn!(%site_id, key = %entry.key, "skipping unknown metric in ratings sheet");
                summary.skipped.push(SkippedRating {
                    key: entry.key.clone(),
                    reason: "unknown metric key".to_string(),
                });
                continue;
            };

            match outcome {
                Ok(_) if in_catalog => summary.catalog_metrics.push(entry.key.clone()),
                Ok(_) => summary.scorecard_fields.push(entry.key.clone()),
                Err(SiteServiceError::Repository(err)) => {
                    return Err(SiteServiceError::Repository(err))
                }
                Err(err) => summary.skipped.push(SkippedRating {
                    key: entry.key.clone(),
                    reason: err.to_string(),
                }),
            }
        }

        Ok(summary)
    }
}
