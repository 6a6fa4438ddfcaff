use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of any scoring path.
///
/// `Insufficient` means too few inputs were rated to produce a meaningful value. It is
/// kept apart from a genuine score so callers never mistake missing data for a low rating.
/// Serialises as `null` / number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Score {
    Insufficient,
    Scored(f64),
}

impl Score {
    pub fn value(self) -> Option<f64> {
        match self {
            Score::Insufficient => None,
            Score::Scored(value) => Some(value),
        }
    }

    /// Legacy numeric view where missing data collapses to `0.0`.
    pub fn value_or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_insufficient(self) -> bool {
        matches!(self, Score::Insufficient)
    }
}

impl From<Option<f64>> for Score {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Score::Insufficient, Score::Scored)
    }
}

impl From<Score> for Option<f64> {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Insufficient => f.write_str("insufficient data"),
            Score::Scored(value) => write!(f, "{value:.2}"),
        }
    }
}

/// Plain arithmetic mean, `Insufficient` when fewer than `minimum` values are supplied.
pub(crate) fn gated_mean<I>(values: I, minimum: usize) -> Score
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count == 0 || count < minimum {
        return Score::Insufficient;
    }

    Score::Scored(sum / count as f64)
}
