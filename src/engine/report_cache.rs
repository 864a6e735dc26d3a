use std::time::Duration;

use moka::sync::Cache;

use crate::models::{AmountDistribution, CategoryStats, DailyStats, FraudByCategory, FraudSummary, StatsOverview, TopCustomer};

pub const DEFAULT_CAPACITY: u64 = 256;

/// Memoized dataset-wide reports.
///
/// Every key starts with the generation of the dataset the report was computed from,
/// so a reloaded table never serves reports of its predecessor.
pub struct ReportCache {
    overview: Cache<u64, StatsOverview>,
    histograms: Cache<(u64, usize), AmountDistribution>,
    categories: Cache<u64, Vec<CategoryStats>>,
    daily: Cache<u64, Vec<DailyStats>>,
    fraud_summary: Cache<u64, FraudSummary>,
    fraud_by_category: Cache<u64, Vec<FraudByCategory>>,
    top_customers: Cache<(u64, usize), Vec<TopCustomer>>
}

impl ReportCache {
    /// Each report kind keeps at most `capacity` entries, `ttl` bounds how long one lives.
    pub fn new(capacity: u64, ttl: Option<Duration>) -> Self {
        Self {
            overview: build(capacity, ttl),
            histograms: build(capacity, ttl),
            categories: build(capacity, ttl),
            daily: build(capacity, ttl),
            fraud_summary: build(capacity, ttl),
            fraud_by_category: build(capacity, ttl),
            top_customers: build(capacity, ttl)
        }
    }

    pub fn overview(&self, generation: u64, compute: impl FnOnce() -> StatsOverview) -> StatsOverview {
        self.overview.get_with(generation, compute)
    }

    pub fn histogram(&self, generation: u64, bins_count: usize, compute: impl FnOnce() -> AmountDistribution) -> AmountDistribution {
        self.histograms.get_with((generation, bins_count), compute)
    }

    pub fn categories(&self, generation: u64, compute: impl FnOnce() -> Vec<CategoryStats>) -> Vec<CategoryStats> {
        self.categories.get_with(generation, compute)
    }

    pub fn daily(&self, generation: u64, compute: impl FnOnce() -> Vec<DailyStats>) -> Vec<DailyStats> {
        self.daily.get_with(generation, compute)
    }

    pub fn fraud_summary(&self, generation: u64, compute: impl FnOnce() -> FraudSummary) -> FraudSummary {
        self.fraud_summary.get_with(generation, compute)
    }

    pub fn fraud_by_category(&self, generation: u64, compute: impl FnOnce() -> Vec<FraudByCategory>) -> Vec<FraudByCategory> {
        self.fraud_by_category.get_with(generation, compute)
    }

    pub fn top_customers(&self, generation: u64, n: usize, compute: impl FnOnce() -> Vec<TopCustomer>) -> Vec<TopCustomer> {
        self.top_customers.get_with((generation, n), compute)
    }
}

impl Default for ReportCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, None)
    }
}

fn build<K, V>(capacity: u64, ttl: Option<Duration>) -> Cache<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static
{
    let builder = Cache::builder().max_capacity(capacity);

    match ttl {
        Some(ttl) => builder.time_to_live(ttl).build(),
        None => builder.build()
    }
}
