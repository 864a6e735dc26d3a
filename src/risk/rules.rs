use serde::Deserialize;
use tracing::debug;

use crate::models::{RiskAssessment, RiskLevel};
use crate::risk::{HIGH_RISK_MCCS, HIGH_RISK_STATES, ONLINE_TRANSACTION, VERY_HIGH_AMOUNT};
use crate::types::Mcc;

const MAX_SCORE: f64 = 100.0;
const SUSPICIOUS_SCORE: f64 = 50.0;
const NO_PATTERN_REASON: &str = "No suspicious patterns detected";

/// The transaction features the rule table looks at.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RiskInput {
    pub amount: f64,
    pub mcc: Mcc,
    #[serde(default)]
    pub use_chip: Option<String>,
    #[serde(default)]
    pub merchant_state: Option<String>
}

impl RiskInput {
    pub fn new(amount: f64, mcc: Mcc) -> Self {
        Self { amount, mcc, use_chip: None, merchant_state: None }
    }

    pub fn with_use_chip(mut self, use_chip: impl Into<String>) -> Self {
        self.use_chip = Some(use_chip.into());
        self
    }

    pub fn with_merchant_state(mut self, merchant_state: impl Into<String>) -> Self {
        self.merchant_state = Some(merchant_state.into());
        self
    }
}

/// One entry of the fixed, additive rule table.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RiskRule {
    NegativeAmount,
    VeryHighAmount,
    HighRiskMerchantCategory,
    OnlineTransaction,
    HighRiskState
}

impl RiskRule {
    /// Evaluation order, which is also the order of the reported reasons.
    pub const ALL: [RiskRule; 5] = [
        RiskRule::NegativeAmount,
        RiskRule::VeryHighAmount,
        RiskRule::HighRiskMerchantCategory,
        RiskRule::OnlineTransaction,
        RiskRule::HighRiskState
    ];

    pub fn weight(&self) -> f64 {
        match self {
            RiskRule::NegativeAmount => 30.0,
            RiskRule::VeryHighAmount => 25.0,
            RiskRule::HighRiskMerchantCategory => 20.0,
            RiskRule::OnlineTransaction => 15.0,
            RiskRule::HighRiskState => 10.0
        }
    }

    /// The reason text when the rule fires, `None` otherwise.
    pub fn evaluate(&self, input: &RiskInput) -> Option<String> {
        match self {
            RiskRule::NegativeAmount => (input.amount < 0.0)
                .then(|| "Negative amount (chargeback/refund)".to_string()),
            RiskRule::VeryHighAmount => (input.amount.abs() > VERY_HIGH_AMOUNT)
                .then(|| "Very high amount".to_string()),
            RiskRule::HighRiskMerchantCategory => HIGH_RISK_MCCS.contains(&input.mcc)
                .then(|| "High-risk merchant category".to_string()),
            RiskRule::OnlineTransaction => (input.use_chip.as_deref() == Some(ONLINE_TRANSACTION))
                .then(|| "Online transaction (higher risk)".to_string()),
            RiskRule::HighRiskState => input.merchant_state.as_deref()
                .filter(|state| HIGH_RISK_STATES.contains(state))
                .map(|state| format!("Merchant in high-risk state ({state})"))
        }
    }
}

/// Scores a transaction against every rule, clamping the total to 100.
pub fn score(input: &RiskInput) -> RiskAssessment {
    let mut total = 0.0;
    let mut reasons = Vec::new();

    for rule in RiskRule::ALL {
        if let Some(reason) = rule.evaluate(input) {
            total += rule.weight();
            reasons.push(reason);
        }
    }

    let score = f64::min(total, MAX_SCORE);
    let level = RiskLevel::from_score(score);

    if reasons.is_empty() {
        reasons.push(NO_PATTERN_REASON.to_string());
    }

    debug!("Scored amount [{}] mcc [{}] at [{score}] ({})", input.amount, input.mcc, level.as_str());

    RiskAssessment {
        is_suspicious: score >= SUSPICIOUS_SCORE,
        score,
        level,
        reasons
    }
}
