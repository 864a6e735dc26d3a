mod customer;
mod errors;
mod reports;
#[cfg(test)]
mod tests;
mod transaction;

use serde::Serialize;

pub use customer::{Customer, CustomerPage, TopCustomer};
pub use errors::DatasetError;
pub use reports::{
    AmountDistribution, CategoryStats, DailyStats, FraudByCategory, FraudSummary, RiskAssessment, StatsOverview
};
pub use transaction::Transaction;

/// Coarse classification of a heuristic risk score.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High
}

impl RiskLevel {
    /// Maps a score in `[0, 100]`: below 30 is low, below 70 is medium, anything else high.
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            RiskLevel::Low
        } else if score < 70.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high"
        }
    }
}

/// One window of a filtered, insertion-ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub page: usize,
    pub limit: usize,
    /// Number of matches across the whole filtered sequence, not just this window.
    pub total: usize,
    #[serde(rename = "transactions")]
    pub items: Vec<T>
}

impl<T> Page<T> {
    pub fn map<U>(self, transform: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            limit: self.limit,
            total: self.total,
            items: self.items.into_iter().map(transform).collect()
        }
    }
}
