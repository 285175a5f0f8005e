//! Financial freedom score: 0-1000 composite with improvement suggestions

use serde::{Deserialize, Serialize};

use super::components::{
    debt_management_score, diversification_score, emergency_fund_score, net_worth_score,
    savings_rate_score, ScoreComponents,
};

/// Maximum number of suggestions surfaced to the user
pub const MAX_SUGGESTIONS: usize = 4;

/// Raw composite below which the two general suggestions are appended
const GENERAL_SUGGESTION_THRESHOLD: f64 = 400.0;

const SUGGEST_NET_WORTH: &str = "Increase your net worth by investing more regularly";
const SUGGEST_EMERGENCY_FUND: &str = "Build emergency fund to 6 months of expenses";
const SUGGEST_SAVINGS_RATE: &str = "Increase your monthly savings rate";
const SUGGEST_DEBT: &str = "Reduce high-interest debt to improve your score";
const SUGGEST_DIVERSIFY: &str = "Diversify investments across different asset classes";
const SUGGEST_AUTO_TRANSFERS: &str = "Set up automatic transfers to savings accounts";
const SUGGEST_REVIEW_EXPENSES: &str = "Review and optimize your monthly expenses";

/// Aggregate financial metrics the score is computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreedomScoreInput {
    /// Current total wealth
    pub current_wealth: f64,

    /// Months of expenses covered by liquid savings
    pub emergency_fund_months: f64,

    /// Net savings over the trailing 3 months
    pub net_savings_3m: f64,

    /// Gross income over the trailing 3 months
    pub total_income_3m: f64,

    /// Value held in stocks and securities; None when the asset breakdown
    /// does not report the category
    pub stocks_securities: Option<f64>,
}

/// Qualitative band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    NeedsWork,
    Fair,
    Good,
    Excellent,
}

impl ScoreLabel {
    /// Band thresholds: 750 / 500 / 250
    pub fn from_score(score: u32) -> Self {
        if score >= 750 {
            ScoreLabel::Excellent
        } else if score >= 500 {
            ScoreLabel::Good
        } else if score >= 250 {
            ScoreLabel::Fair
        } else {
            ScoreLabel::NeedsWork
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::NeedsWork => "Needs Work",
            ScoreLabel::Fair => "Fair",
            ScoreLabel::Good => "Good",
            ScoreLabel::Excellent => "Excellent",
        }
    }
}

/// Computed score with its band and ranked suggestions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreedomScoreResult {
    /// Composite score in [0, 1000]
    pub score: u32,

    /// Qualitative band for the score
    pub label: ScoreLabel,

    /// At most four suggestions, in component evaluation order
    pub suggestions: Vec<&'static str>,

    /// The clamped sub-scores behind the composite
    pub components: ScoreComponents,
}

/// Compute the 0-1000 financial freedom score.
///
/// Components are evaluated in a fixed order (net worth, emergency fund,
/// savings rate, debt, diversification, then the two general suggestions)
/// because that order decides which suggestions survive the cut to four.
pub fn score(input: &FreedomScoreInput) -> FreedomScoreResult {
    let components = ScoreComponents {
        net_worth: net_worth_score(input.current_wealth),
        emergency_fund: emergency_fund_score(input.emergency_fund_months),
        savings_rate: savings_rate_score(input.net_savings_3m, input.total_income_3m),
        debt_management: debt_management_score(input.current_wealth),
        diversification: diversification_score(input.stocks_securities, input.current_wealth),
    };

    let mut suggestions = Vec::new();
    if components.net_worth < 200.0 {
        suggestions.push(SUGGEST_NET_WORTH);
    }
    if components.emergency_fund < 100.0 {
        suggestions.push(SUGGEST_EMERGENCY_FUND);
    }
    if components.savings_rate < 100.0 {
        suggestions.push(SUGGEST_SAVINGS_RATE);
    }
    if components.debt_management < 100.0 {
        suggestions.push(SUGGEST_DEBT);
    }
    if components.diversification < 75.0 {
        suggestions.push(SUGGEST_DIVERSIFY);
    }

    let total = components.total();
    if total < GENERAL_SUGGESTION_THRESHOLD {
        suggestions.push(SUGGEST_AUTO_TRANSFERS);
        suggestions.push(SUGGEST_REVIEW_EXPENSES);
    }
    suggestions.truncate(MAX_SUGGESTIONS);

    let score = total.round() as u32;

    FreedomScoreResult {
        score,
        label: ScoreLabel::from_score(score),
        suggestions,
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_input() -> FreedomScoreInput {
        FreedomScoreInput {
            current_wealth: 0.0,
            emergency_fund_months: 0.0,
            net_savings_3m: 0.0,
            total_income_3m: 0.0,
            stocks_securities: Some(0.0),
        }
    }

    fn strong_input() -> FreedomScoreInput {
        FreedomScoreInput {
            current_wealth: 600_000.0,
            emergency_fund_months: 8.0,
            net_savings_3m: 6_000.0,
            total_income_3m: 15_000.0,
            stocks_securities: Some(300_000.0),
        }
    }

    #[test]
    fn test_all_zero_scores_150_needs_work() {
        // Only the degenerate debt component contributes for zero wealth
        let result = score(&zero_input());

        assert_eq!(result.score, 150);
        assert_eq!(result.label, ScoreLabel::NeedsWork);
        assert_eq!(result.components.debt_management, 150.0);
        assert_eq!(result.components.net_worth, 0.0);
        assert_eq!(result.components.emergency_fund, 0.0);
        assert_eq!(result.components.savings_rate, 0.0);
        assert_eq!(result.components.diversification, 0.0);
    }

    #[test]
    fn test_score_bounds() {
        for input in [
            zero_input(),
            strong_input(),
            FreedomScoreInput {
                current_wealth: 10_000_000.0,
                emergency_fund_months: 120.0,
                net_savings_3m: 100_000.0,
                total_income_3m: 100_000.0,
                stocks_securities: Some(10_000_000.0),
            },
        ] {
            let result = score(&input);
            assert!(result.score <= 1000, "score {} out of range", result.score);
        }
    }

    #[test]
    fn test_maximal_input_scores_1000_excellent() {
        let result = score(&strong_input());

        assert_eq!(result.score, 1000);
        assert_eq!(result.label, ScoreLabel::Excellent);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_suggestions_capped_at_four_in_evaluation_order() {
        // Every trigger fires: five component suggestions plus two general,
        // so only the first four in evaluation order survive
        let result = score(&zero_input());

        assert_eq!(result.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(
            result.suggestions,
            vec![
                SUGGEST_NET_WORTH,
                SUGGEST_EMERGENCY_FUND,
                SUGGEST_SAVINGS_RATE,
                SUGGEST_DIVERSIFY,
            ]
        );
    }

    #[test]
    fn test_general_suggestions_only_below_400() {
        // Mid-range profile: above 400 total, several components still weak
        let input = FreedomScoreInput {
            current_wealth: 400_000.0,
            emergency_fund_months: 1.0,
            net_savings_3m: 0.0,
            total_income_3m: 15_000.0,
            stocks_securities: None,
        };
        let result = score(&input);

        assert!(result.score >= 400);
        assert!(!result.suggestions.contains(&SUGGEST_AUTO_TRANSFERS));
        assert!(!result.suggestions.contains(&SUGGEST_REVIEW_EXPENSES));
    }

    #[test]
    fn test_zero_income_quarter_does_not_divide_by_zero() {
        let input = FreedomScoreInput {
            total_income_3m: 0.0,
            net_savings_3m: 1_000.0,
            ..zero_input()
        };
        let result = score(&input);

        // Floor-at-1 turns the rate into raw savings * 1000, clamped at the cap
        assert_eq!(result.components.savings_rate, 200.0);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(ScoreLabel::from_score(1000), ScoreLabel::Excellent);
        assert_eq!(ScoreLabel::from_score(750), ScoreLabel::Excellent);
        assert_eq!(ScoreLabel::from_score(749), ScoreLabel::Good);
        assert_eq!(ScoreLabel::from_score(500), ScoreLabel::Good);
        assert_eq!(ScoreLabel::from_score(499), ScoreLabel::Fair);
        assert_eq!(ScoreLabel::from_score(250), ScoreLabel::Fair);
        assert_eq!(ScoreLabel::from_score(249), ScoreLabel::NeedsWork);
        assert_eq!(ScoreLabel::from_score(0), ScoreLabel::NeedsWork);
    }

    #[test]
    fn test_scoring_is_pure() {
        let input = strong_input();

        assert_eq!(score(&input), score(&input));
    }
}
