//! Fixed-schema rating sheets, one variant per site type.
//!
//! These predate the weighted catalog and score by plain mean. They are kept as a
//! labelled legacy view next to the catalog path rather than merged into it.

mod fields;

pub use fields::{HospitalField, OfficeField, ResidentialField, SchoolField};

use super::domain::SiteType;
use super::score::{gated_mean, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Highest rating a scorecard field accepts; `0` clears the field.
pub const MAX_FIELD_RATING: u8 = 5;

/// Rated fields needed before a scorecard produces a score.
pub const MINIMUM_RATED_FIELDS: usize = 3;

/// A closed set of rating fields belonging to one site type.
pub trait ScoreField: Copy + Ord + fmt::Debug + 'static {
    const SITE_TYPE: SiteType;
    const ALL: &'static [Self];

    fn key(self) -> &'static str;
    fn title(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRating {
    pub rating: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreCardError {
    #[error("'{field}' is not a {site_type} scorecard field")]
    UnknownField { site_type: SiteType, field: String },
    #[error("rating {rating} for '{field}' is outside 0..={max}", max = MAX_FIELD_RATING)]
    InvalidRating { field: &'static str, rating: u8 },
}

/// Ratings for the fields of one site type. Fields are stored once touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSheet<F: ScoreField> {
    entries: BTreeMap<F, FieldRating>,
}

impl<F: ScoreField> Default for RatingSheet<F> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<F: ScoreField> RatingSheet<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(
        &mut self,
        field: F,
        rating: u8,
        notes: impl Into<String>,
    ) -> Result<(), ScoreCardError> {
        if rating > MAX_FIELD_RATING {
            return Err(ScoreCardError::InvalidRating {
                field: field.key(),
                rating,
            });
        }

        self.entries.insert(
            field,
            FieldRating {
                rating,
                notes: notes.into(),
            },
        );
        Ok(())
    }

    pub fn get(&self, field: F) -> Option<&FieldRating> {
        self.entries.get(&field)
    }

    pub fn rating(&self, field: F) -> u8 {
        self.get(field).map_or(0, |entry| entry.rating)
    }

    pub fn notes(&self, field: F) -> &str {
        self.get(field).map_or("", |entry| entry.notes.as_str())
    }

    pub fn rated_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.rating > 0).count()
    }

    pub fn field_count(&self) -> usize {
        F::ALL.len()
    }

    /// Fraction of fields rated, in `0.0..=1.0`.
    pub fn completion_percentage(&self) -> f64 {
        self.rated_count() as f64 / self.field_count() as f64
    }

    /// Unweighted mean of rated fields, gated on [`MINIMUM_RATED_FIELDS`].
    pub fn calculate_overall_score(&self) -> Score {
        let ratings = self
            .entries
            .values()
            .filter(|entry| entry.rating > 0)
            .map(|entry| f64::from(entry.rating));

        gated_mean(ratings, MINIMUM_RATED_FIELDS)
    }

    fn field_for(&self, key: &str) -> Result<F, ScoreCardError> {
        F::from_key(key).ok_or_else(|| ScoreCardError::UnknownField {
            site_type: F::SITE_TYPE,
            field: key.to_string(),
        })
    }

    fn entries_view(&self) -> Vec<ScoreCardEntry> {
        F::ALL
            .iter()
            .map(|&field| ScoreCardEntry {
                key: field.key(),
                title: field.title(),
                rating: self.rating(field),
                notes: self.notes(field).to_string(),
            })
            .collect()
    }
}

/// Flattened field view for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCardEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub rating: u8,
    pub notes: String,
}

/// Type-specific scorecard. A site holds exactly one variant, matching its site type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "site_type", content = "fields", rename_all = "snake_case")]
pub enum ScoreCard {
    Office(RatingSheet<OfficeField>),
    Hospital(RatingSheet<HospitalField>),
    School(RatingSheet<SchoolField>),
    Residential(RatingSheet<ResidentialField>),
}

macro_rules! with_sheet {
    ($card:expr, $sheet:ident => $body:expr) => {
        match $card {
            ScoreCard::Office($sheet) => $body,
            ScoreCard::Hospital($sheet) => $body,
            ScoreCard::School($sheet) => $body,
            ScoreCard::Residential($sheet) => $body,
        }
    };
}

impl ScoreCard {
    pub fn for_site_type(site_type: SiteType) -> Self {
        match site_type {
            SiteType::Office => Self::Office(RatingSheet::new()),
            SiteType::Hospital => Self::Hospital(RatingSheet::new()),
            SiteType::School => Self::School(RatingSheet::new()),
            SiteType::Residential => Self::Residential(RatingSheet::new()),
        }
    }

    pub fn site_type(&self) -> SiteType {
        match self {
            Self::Office(_) => SiteType::Office,
            Self::Hospital(_) => SiteType::Hospital,
            Self::School(_) => SiteType::School,
            Self::Residential(_) => SiteType::Residential,
        }
    }

    pub fn has_field(&self, key: &str) -> bool {
        self.fields().iter().any(|(field_key, _)| *field_key == key)
    }

    /// `(key, title)` pairs in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, &'static str)> {
        fn pairs<F: ScoreField>() -> Vec<(&'static str, &'static str)> {
            F::ALL.iter().map(|&field| (field.key(), field.title())).collect()
        }

        match self {
            Self::Office(_) => pairs::<OfficeField>(),
            Self::Hospital(_) => pairs::<HospitalField>(),
            Self::School(_) => pairs::<SchoolField>(),
            Self::Residential(_) => pairs::<ResidentialField>(),
        }
    }

    pub fn update_metric(
        &mut self,
        key: &str,
        rating: u8,
        notes: impl Into<String>,
    ) -> Result<(), ScoreCardError> {
        let notes = notes.into();
        with_sheet!(self, sheet => {
            let field = sheet.field_for(key)?;
            sheet.update(field, rating, notes)
        })
    }

    /// Current rating, `0` when unrated or not a field of this variant.
    pub fn rating(&self, key: &str) -> u8 {
        with_sheet!(self, sheet => {
            sheet.field_for(key).map_or(0, |field| sheet.rating(field))
        })
    }

    pub fn notes(&self, key: &str) -> &str {
        with_sheet!(self, sheet => {
            sheet.field_for(key).map_or("", |field| sheet.notes(field))
        })
    }

    pub fn rated_count(&self) -> usize {
        with_sheet!(self, sheet => sheet.rated_count())
    }

    pub fn field_count(&self) -> usize {
        with_sheet!(self, sheet => sheet.field_count())
    }

    pub fn completion_percentage(&self) -> f64 {
        with_sheet!(self, sheet => sheet.completion_percentage())
    }

    pub fn calculate_overall_score(&self) -> Score {
        with_sheet!(self, sheet => sheet.calculate_overall_score())
    }

    pub fn entries(&self) -> Vec<ScoreCardEntry> {
        with_sheet!(self, sheet => sheet.entries_view())
    }
}
