use serde::Serialize;

use crate::models::RiskLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsOverview {
    pub total_transactions: usize,
    /// Share of rows with a negative amount.
    pub fraud_rate: f64,
    pub avg_amount: f64,
    pub most_common_type: String
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountDistribution {
    pub bins: Vec<String>,
    pub counts: Vec<usize>
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub use_chip: String,
    pub count: usize,
    pub avg_amount: f64,
    pub total_amount: f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStats {
    pub date: String,
    pub count: usize,
    pub avg_amount: f64,
    pub total_amount: f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraudSummary {
    pub total_transactions: usize,
    pub suspicious_count: usize,
    pub high_risk_count: usize,
    pub avg_risk_score: f64,
    pub suspicious_rate: f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraudByCategory {
    pub use_chip: String,
    pub total_count: usize,
    pub suspicious_count: usize,
    pub suspicious_rate: f64
}

/// Outcome of scoring a single transaction against the heuristic rule table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub is_suspicious: bool,
    #[serde(rename = "risk_score")]
    pub score: f64,
    #[serde(rename = "risk_level")]
    pub level: RiskLevel,
    /// Reasons in rule evaluation order, never empty.
    pub reasons: Vec<String>
}
