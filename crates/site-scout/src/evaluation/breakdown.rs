use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::decision::{classify, Decision, ScoreScale};
use super::score::Score;

const DASHBOARD_GENERAL_SHARE: f64 = 0.6;
const DASHBOARD_TYPE_SHARE: f64 = 0.4;

/// How the three component scores fold into the overall score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationRule {
    /// `(general + type_specific + financial) / 3`.
    #[default]
    EqualThirds,
    /// Legacy dashboard blend: `0.6 * general + 0.4 * type_specific`, financials ignored.
    DashboardWeighted,
}

impl CombinationRule {
    pub const fn key(self) -> &'static str {
        match self {
            CombinationRule::EqualThirds => "equal_thirds",
            CombinationRule::DashboardWeighted => "dashboard_weighted",
        }
    }

    /// Any insufficient input the rule consumes makes the overall insufficient. Only the
    /// rated-count gates on the general and scorecard paths produce one; the financial
    /// score is always a value.
    pub fn combine(self, general: Score, type_specific: Score, financial: Score) -> Score {
        match self {
            CombinationRule::EqualThirds => {
                match (general.value(), type_specific.value(), financial.value()) {
                    (Some(general), Some(type_specific), Some(financial)) => {
                        Score::Scored((general + type_specific + financial) / 3.0)
                    }
                    _ => Score::Insufficient,
                }
            }
            CombinationRule::DashboardWeighted => match (general.value(), type_specific.value())
            {
                (Some(general), Some(type_specific)) => Score::Scored(
                    general * DASHBOARD_GENERAL_SHARE + type_specific * DASHBOARD_TYPE_SHARE,
                ),
                _ => Score::Insufficient,
            },
        }
    }
}

impl fmt::Display for CombinationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CombinationRule {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "equal_thirds" | "equal-thirds" | "thirds" => Ok(CombinationRule::EqualThirds),
            "dashboard_weighted" | "dashboard-weighted" | "dashboard" => {
                Ok(CombinationRule::DashboardWeighted)
            }
            other => Err(other.to_string()),
        }
    }
}

/// Component and overall scores for a site, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub general: Score,
    pub type_specific: Score,
    pub financial: Score,
    pub overall: Score,
    pub rule: CombinationRule,
}

impl ScoreBreakdown {
    pub fn new(general: Score, type_specific: Score, financial: Score, rule: CombinationRule) -> Self {
        Self {
            general,
            type_specific,
            financial,
            overall: rule.combine(general, type_specific, financial),
            rule,
        }
    }

    pub fn decision(&self) -> Decision {
        classify(self.overall, ScoreScale::FivePoint)
    }
}
