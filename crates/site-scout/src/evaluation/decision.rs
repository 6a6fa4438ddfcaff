use serde::{Deserialize, Serialize};
use std::fmt;

use super::score::Score;

/// Placement recommendation for a scored site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Greenlight,
    Watchlist,
    Pass,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Recommendation::Greenlight => "greenlight",
            Recommendation::Watchlist => "watchlist",
            Recommendation::Pass => "pass",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scale a score was produced on; each carries its own thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreScale {
    /// 0–5 ratings: greenlight from 4.0, watchlist from 3.0.
    FivePoint,
    /// 0–1 fractions: greenlight from 0.75, watchlist from 0.60.
    Unit,
}

impl ScoreScale {
    const fn thresholds(self) -> (f64, f64) {
        match self {
            ScoreScale::FivePoint => (4.0, 3.0),
            ScoreScale::Unit => (0.75, 0.60),
        }
    }

    pub fn recommend(self, value: f64) -> Recommendation {
        let (greenlight, watchlist) = self.thresholds();
        if value >= greenlight {
            Recommendation::Greenlight
        } else if value >= watchlist {
            Recommendation::Watchlist
        } else {
            Recommendation::Pass
        }
    }
}

/// Classifier output. Missing data is never folded into `Pass`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Decision {
    InsufficientData,
    Recommended {
        recommendation: Recommendation,
        score: f64,
    },
}

impl Decision {
    pub fn recommendation(&self) -> Option<Recommendation> {
        match self {
            Decision::InsufficientData => None,
            Decision::Recommended { recommendation, .. } => Some(*recommendation),
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Decision::InsufficientData)
    }

    pub fn summary(&self) -> String {
        match self {
            Decision::InsufficientData => "insufficient data".to_string(),
            Decision::Recommended {
                recommendation,
                score,
            } => format!("{recommendation} ({score:.2})"),
        }
    }
}

pub fn classify(score: Score, scale: ScoreScale) -> Decision {
    match score {
        Score::Insufficient => Decision::InsufficientData,
        Score::Scored(value) => Decision::Recommended {
            recommendation: scale.recommend(value),
            score: value,
        },
    }
}
