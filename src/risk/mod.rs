mod rules;
mod summary;

pub use rules::{score, RiskInput, RiskRule};
pub use summary::{fraud_by_category, fraud_summary};

/// Absolute amount above which a transaction counts as very high.
pub const VERY_HIGH_AMOUNT: f64 = 5000.0;
/// Amount below which a refund counts as high risk in dataset summaries.
pub const HIGH_RISK_REFUND: f64 = -1000.0;
/// Merchant category codes treated as high risk (cash, quasi-cash, securities).
pub const HIGH_RISK_MCCS: [u32; 6] = [6010, 6011, 6050, 6051, 6211, 6538];
pub const HIGH_RISK_STATES: [&str; 3] = ["CA", "NY", "FL"];
pub const ONLINE_TRANSACTION: &str = "Online Transaction";
