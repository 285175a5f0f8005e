//! Financial freedom scoring: weighted components and composite score

mod components;
mod freedom;

pub use components::{
    debt_management_score, diversification_score, emergency_fund_score, net_worth_score,
    savings_rate_score, ScoreComponents, DEBT_CAP, DIVERSIFICATION_CAP, EMERGENCY_FUND_CAP,
    NET_WORTH_CAP, SAVINGS_RATE_CAP,
};
pub use freedom::{score, FreedomScoreInput, FreedomScoreResult, ScoreLabel, MAX_SUGGESTIONS};
