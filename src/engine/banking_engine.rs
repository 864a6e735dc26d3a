use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::spawn_blocking;
use tracing::{debug, info};

use crate::aggregation;
use crate::engine::report_cache::{ReportCache, DEFAULT_CAPACITY};
use crate::loader::load_transactions;
use crate::models::{
    AmountDistribution, CategoryStats, Customer, CustomerPage, DailyStats, DatasetError, FraudByCategory, FraudSummary,
    Page, RiskAssessment, StatsOverview, TopCustomer, Transaction
};
use crate::query::{self, Pagination, TransactionFilter};
use crate::risk::{self, RiskInput};
use crate::storage::{Dataset, Storage};
use crate::types::{ClientId, MerchantId};

/// Entry point for every read the transport layer performs.
///
/// Each call takes one snapshot of the injected storage and runs a pure computation
/// over it, so concurrent calls never coordinate beyond that snapshot.
pub struct BankingEngine<S: Storage> {
    storage: Arc<S>,
    reports: ReportCache,
    cache_capacity: u64,
    cache_ttl: Option<Duration>
}

impl<S: Storage> BankingEngine<S> {
    /// Creates a new engine instance reading from the provided storage.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            reports: ReportCache::default(),
            cache_capacity: DEFAULT_CAPACITY,
            cache_ttl: None
        }
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self.reports = ReportCache::new(self.cache_capacity, self.cache_ttl);
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self.reports = ReportCache::new(self.cache_capacity, self.cache_ttl);
        self
    }

    /// Parses the CSV at `path` off the async runtime and swaps it in as the current table.
    ///
    /// On failure the previously held table, if any, stays in place.
    pub async fn load_dataset(&self, path: impl AsRef<Path>) -> Result<usize, DatasetError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let rows = spawn_blocking(move || load_transactions(&path))
            .await
            .map_err(DatasetError::load)??;

        Ok(self.storage.load(rows))
    }

    pub fn snapshot(&self) -> Result<Arc<Dataset>, DatasetError> {
        self.storage.snapshot()
    }

    pub fn is_loaded(&self) -> bool {
        self.storage.is_loaded()
    }

    pub fn count(&self) -> usize {
        self.storage.count()
    }

    pub fn query_transactions(&self, filter: &TransactionFilter, pagination: Pagination) -> Result<Page<Transaction>, DatasetError> {
        let dataset = self.snapshot()?;
        let page = query::query(dataset.rows(), filter, pagination);

        debug!("Query {filter:?} matched [{}] transactions, returning [{}]", page.total, page.items.len());

        Ok(page)
    }

    /// Multi-criteria search, the same predicate set as listing plus an amount range.
    pub fn search_transactions(&self, criteria: &TransactionFilter, pagination: Pagination) -> Result<Page<Transaction>, DatasetError> {
        self.query_transactions(criteria, pagination)
    }

    pub fn transaction_by_id(&self, id: &str) -> Result<Option<Transaction>, DatasetError> {
        Ok(self.snapshot()?.get(id).cloned())
    }

    pub fn distinct_categories(&self) -> Result<Vec<String>, DatasetError> {
        Ok(aggregation::distinct_categories(self.snapshot()?.rows()))
    }

    pub fn recent(&self, n: usize) -> Result<Vec<Transaction>, DatasetError> {
        Ok(query::recent(self.snapshot()?.rows(), n))
    }

    pub fn by_client(&self, client_id: ClientId, limit: usize) -> Result<Vec<Transaction>, DatasetError> {
        Ok(query::by_client(self.snapshot()?.rows(), client_id, limit))
    }

    pub fn by_merchant(&self, merchant_id: MerchantId, limit: usize) -> Result<Vec<Transaction>, DatasetError> {
        Ok(query::by_merchant(self.snapshot()?.rows(), merchant_id, limit))
    }

    /// Reports whether `id` exists. Nothing is removed, the table is immutable.
    pub fn delete_by_id(&self, id: &str) -> Result<bool, DatasetError> {
        let exists = self.snapshot()?.contains(id);

        if exists {
            info!("Transaction {id} marked for deletion (test mode)");
        }

        Ok(exists)
    }

    pub fn stats_overview(&self) -> Result<StatsOverview, DatasetError> {
        let dataset = self.snapshot()?;
        Ok(self.reports.overview(dataset.generation(), || aggregation::overview(dataset.rows())))
    }

    pub fn amount_histogram(&self, bins_count: usize) -> Result<AmountDistribution, DatasetError> {
        let dataset = self.snapshot()?;
        Ok(self.reports.histogram(dataset.generation(), bins_count, || aggregation::amount_histogram(dataset.rows(), bins_count)))
    }

    pub fn stats_by_category(&self) -> Result<Vec<CategoryStats>, DatasetError> {
        let dataset = self.snapshot()?;
        Ok(self.reports.categories(dataset.generation(), || aggregation::category_stats(dataset.rows())))
    }

    pub fn daily_stats(&self) -> Result<Vec<DailyStats>, DatasetError> {
        let dataset = self.snapshot()?;
        Ok(self.reports.daily(dataset.generation(), || aggregation::daily_stats(dataset.rows())))
    }

    pub fn fraud_summary(&self) -> Result<FraudSummary, DatasetError> {
        let dataset = self.snapshot()?;
        Ok(self.reports.fraud_summary(dataset.generation(), || risk::fraud_summary(dataset.rows())))
    }

    pub fn fraud_by_category(&self) -> Result<Vec<FraudByCategory>, DatasetError> {
        let dataset = self.snapshot()?;
        Ok(self.reports.fraud_by_category(dataset.generation(), || risk::fraud_by_category(dataset.rows())))
    }

    /// Scores a single transaction, no dataset required.
    pub fn predict_fraud(&self, input: &RiskInput) -> RiskAssessment {
        risk::score(input)
    }

    pub fn customer_profile(&self, client_id: ClientId) -> Result<Option<Customer>, DatasetError> {
        Ok(aggregation::customer_profile(self.snapshot()?.rows(), client_id))
    }

    pub fn top_customers(&self, n: usize) -> Result<Vec<TopCustomer>, DatasetError> {
        let dataset = self.snapshot()?;
        Ok(self.reports.top_customers(dataset.generation(), n, || aggregation::top_customers(dataset.rows(), n)))
    }

    pub fn list_customers(&self, pagination: Pagination) -> Result<CustomerPage, DatasetError> {
        Ok(aggregation::list_customers(self.snapshot()?.rows(), pagination))
    }
}
