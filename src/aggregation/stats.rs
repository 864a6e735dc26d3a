use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::aggregation::{rate, Accumulator};
use crate::models::{AmountDistribution, CategoryStats, DailyStats, StatsOverview, Transaction};

const NO_CATEGORY: &str = "N/A";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn overview(rows: &[Transaction]) -> StatsOverview {
    let mut amounts = Accumulator::default();
    let mut negative_count = 0;
    let mut category_counts = BTreeMap::<&str, usize>::new();

    for row in rows {
        amounts.add(row.amount);

        if row.amount < 0.0 {
            negative_count += 1;
        }

        *category_counts.entry(row.use_chip.as_str()).or_default() += 1;
    }

    //NOTE: Ascending iteration plus a strict comparison keeps the smallest label on ties
    let most_common_type = category_counts.into_iter()
        .fold(None, |best: Option<(&str, usize)>, (category, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((category, count))
        })
        .map_or_else(|| NO_CATEGORY.to_string(), |(category, _)| category.to_string());

    StatsOverview {
        total_transactions: rows.len(),
        fraud_rate: rate(negative_count, rows.len()),
        avg_amount: amounts.mean(),
        most_common_type
    }
}

/// Count, mean and sum of amounts per `use_chip` value, ordered by label.
pub fn category_stats(rows: &[Transaction]) -> Vec<CategoryStats> {
    let mut groups = BTreeMap::<&str, Accumulator>::new();

    for row in rows {
        groups.entry(row.use_chip.as_str()).or_default().add(row.amount);
    }

    groups.into_iter()
        .map(|(category, group)| CategoryStats {
            use_chip: category.to_string(),
            count: group.count,
            avg_amount: group.mean(),
            total_amount: group.sum
        })
        .collect()
}

/// Equal-width histogram of amounts over `[0, max(amount)]`.
///
/// The lower edge is pinned at 0, so negative amounts land in no bin at all. Bins are
/// half-open except the last one, which also holds the maximum.
pub fn amount_histogram(rows: &[Transaction], bins_count: usize) -> AmountDistribution {
    if bins_count == 0 {
        return AmountDistribution { bins: Vec::new(), counts: Vec::new() };
    }

    let max = rows.iter().map(|row| row.amount).fold(0.0_f64, f64::max);
    let width = max / bins_count as f64;
    let edges: Vec<f64> = (0..=bins_count)
        .map(|i| if i == bins_count { max } else { i as f64 * width })
        .collect();

    let mut counts = vec![0; bins_count];

    for amount in rows.iter().map(|row| row.amount).filter(|amount| (0.0..=max).contains(amount)) {
        let bin = if amount == max {
            bins_count - 1
        } else {
            edges.partition_point(|&edge| edge <= amount).saturating_sub(1).min(bins_count - 1)
        };

        counts[bin] += 1;
    }

    let bins = edges.windows(2)
        .map(|edge| format!("{:.0}-{:.0}", edge[0], edge[1]))
        .collect();

    AmountDistribution { bins, counts }
}

/// Count, mean and sum of amounts per calendar day, ascending.
///
/// Rows whose `date` carries no recognizable calendar day are left out.
pub fn daily_stats(rows: &[Transaction]) -> Vec<DailyStats> {
    let mut days = BTreeMap::new();
    let mut undated = 0;

    for row in rows {
        match row.calendar_date() {
            Some(day) => days.entry(day).or_insert_with(Accumulator::default).add(row.amount),
            None => undated += 1
        }
    }

    if undated > 0 {
        warn!("Skipped [{undated}] transactions without a parseable date in daily statistics");
    }

    days.into_iter()
        .map(|(day, group)| DailyStats {
            date: day.format(DATE_FORMAT).to_string(),
            count: group.count,
            avg_amount: group.mean(),
            total_amount: group.sum
        })
        .collect()
}

/// Sorted, de-duplicated `use_chip` values.
pub fn distinct_categories(rows: &[Transaction]) -> Vec<String> {
    rows.iter()
        .map(|row| row.use_chip.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
