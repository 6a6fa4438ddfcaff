use serde::{Deserialize, Serialize};

use super::score::Score;

const MAX_FACTOR_SCORE: f64 = 5.0;
/// Revenue projection that earns the full 5.0.
const REVENUE_CEILING: f64 = 10_000.0;
const COST_SCALE: f64 = 10_000.0;
const MARGIN_SCALE: f64 = 20.0;
const ROI_SCALE: f64 = 50.0;

/// Projected economics for a placement. Zero means "not entered".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub revenue_projection: f64,
    pub cost_projection: f64,
    /// Percent, e.g. `25.0` for 25%.
    pub profit_margin: f64,
    pub payback_period_months: f64,
    /// Percent, e.g. `40.0` for 40%.
    pub roi_percentage: f64,
}

impl FinancialRecord {
    pub fn has_figures(&self) -> bool {
        [
            self.revenue_projection,
            self.cost_projection,
            self.profit_margin,
            self.payback_period_months,
            self.roi_percentage,
        ]
        .into_iter()
        .any(is_present)
    }

    /// Number of scoring factors (revenue, cost, margin, ROI) that carry a value.
    pub fn present_factor_count(&self) -> usize {
        self.factor_scores().len()
    }

    fn factor_scores(&self) -> Vec<f64> {
        let mut scores = Vec::with_capacity(4);

        if is_present(self.revenue_projection) {
            scores.push(MAX_FACTOR_SCORE * self.revenue_projection / REVENUE_CEILING);
        }
        if is_present(self.cost_projection) {
            scores.push(COST_SCALE / self.cost_projection);
        }
        if is_present(self.profit_margin) {
            scores.push(self.profit_margin / MARGIN_SCALE);
        }
        if is_present(self.roi_percentage) {
            scores.push(self.roi_percentage / ROI_SCALE);
        }

        scores
            .into_iter()
            .map(|score| score.min(MAX_FACTOR_SCORE))
            .collect()
    }
}

/// Financial sub-score on the 0–5 scale.
///
/// Each present factor maps linearly (5·revenue/10k, 10k/cost, margin/20, roi/50), is
/// capped at 5.0, and the capped values are averaged. Payback period does not score.
/// A record with no scoring factor scores `0.0`; missing projections are surfaced as a
/// completion warning, not as insufficient data.
pub fn financial_score(record: &FinancialRecord) -> Score {
    let scores = record.factor_scores();
    if scores.is_empty() {
        return Score::Scored(0.0);
    }

    Score::Scored(scores.iter().sum::<f64>() / scores.len() as f64)
}

fn is_present(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
