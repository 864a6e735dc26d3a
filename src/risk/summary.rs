use std::collections::BTreeMap;

use crate::aggregation::rate;
use crate::models::{FraudByCategory, FraudSummary, Transaction};
use crate::risk::{HIGH_RISK_REFUND, VERY_HIGH_AMOUNT};

const MAX_SCORE: f64 = 100.0;
const SCORE_DIVISOR: f64 = 10.0;

fn is_suspicious(amount: f64) -> bool {
    amount < 0.0 || amount.abs() > VERY_HIGH_AMOUNT
}

/// Dataset-wide suspicion counts.
///
/// `avg_risk_score` is a volume proxy, a tenth of the mean absolute amount capped at 100.
pub fn fraud_summary(rows: &[Transaction]) -> FraudSummary {
    let suspicious_count = rows.iter().filter(|row| is_suspicious(row.amount)).count();
    let high_risk_count = rows.iter().filter(|row| row.amount < HIGH_RISK_REFUND).count();

    let avg_risk_score = if rows.is_empty() {
        0.0
    } else {
        let mean_absolute = rows.iter().map(|row| row.amount.abs()).sum::<f64>() / rows.len() as f64;
        f64::min(MAX_SCORE, mean_absolute / SCORE_DIVISOR)
    };

    FraudSummary {
        total_transactions: rows.len(),
        suspicious_count,
        high_risk_count,
        avg_risk_score,
        suspicious_rate: rate(suspicious_count, rows.len())
    }
}

/// Share of negative amounts per `use_chip` value, ordered by label.
pub fn fraud_by_category(rows: &[Transaction]) -> Vec<FraudByCategory> {
    let mut groups = BTreeMap::<&str, (usize, usize)>::new();

    for row in rows {
        let (total, negative) = groups.entry(row.use_chip.as_str()).or_default();
        *total += 1;

        if row.amount < 0.0 {
            *negative += 1;
        }
    }

    groups.into_iter()
        .map(|(category, (total_count, suspicious_count))| FraudByCategory {
            use_chip: category.to_string(),
            total_count,
            suspicious_count,
            suspicious_rate: rate(suspicious_count, total_count)
        })
        .collect()
}
