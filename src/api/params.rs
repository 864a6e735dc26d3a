use serde::Deserialize;

use crate::api::ApiError;
use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::query::{AmountRange, FilterError, Pagination, TransactionFilter};
use crate::types::{ClientId, Mcc, MerchantId};

const DEFAULT_SHORT_LIMIT: usize = 10;
const MAX_SHORT_LIMIT: usize = 100;
const DEFAULT_BINS: usize = 10;
const MIN_BINS: usize = 5;
const MAX_BINS: usize = 50;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_short_limit() -> usize {
    DEFAULT_SHORT_LIMIT
}

fn default_bins() -> usize {
    DEFAULT_BINS
}

fn within(name: &str, value: usize, min: usize, max: usize) -> Result<usize, ApiError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ApiError::Validation(format!("{name} must be between {min} and {max}, got {value}")))
    }
}

/// Offset/limit pair shared by every paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_page_size")]
    pub limit: usize
}

impl Default for PageParams {
    fn default() -> Self {
        Self { skip: 0, limit: DEFAULT_PAGE_SIZE }
    }
}

impl PageParams {
    pub fn pagination(&self) -> Result<Pagination, ApiError> {
        let limit = within("limit", self.limit, 1, MAX_PAGE_SIZE)?;
        Ok(Pagination::from_skip(self.skip, limit))
    }
}

/// Listing filters plus the offset/limit pair.
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_page_size")]
    pub limit: usize,
    pub use_chip: Option<String>,
    pub merchant_state: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
            use_chip: None,
            merchant_state: None,
            min_amount: None,
            max_amount: None
        }
    }
}

impl ListParams {
    pub fn pagination(&self) -> Result<Pagination, ApiError> {
        PageParams { skip: self.skip, limit: self.limit }.pagination()
    }

    pub fn filter(&self) -> TransactionFilter {
        TransactionFilter {
            use_chip: self.use_chip.clone(),
            merchant_state: self.merchant_state.clone(),
            min_amount: self.min_amount,
            max_amount: self.max_amount,
            ..TransactionFilter::default()
        }
    }
}

/// Body of a multi-criteria search, every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    pub use_chip: Option<String>,
    /// `[low, high]`, inclusive.
    pub amount_range: Option<Vec<f64>>,
    pub client_id: Option<ClientId>,
    pub merchant_id: Option<MerchantId>,
    pub merchant_state: Option<String>,
    pub mcc: Option<Mcc>
}

impl SearchRequest {
    pub fn filter(&self) -> Result<TransactionFilter, FilterError> {
        let amount_range = self.amount_range.as_deref()
            .map(AmountRange::from_bounds)
            .transpose()?;

        Ok(TransactionFilter {
            use_chip: self.use_chip.clone(),
            merchant_state: self.merchant_state.clone(),
            client_id: self.client_id,
            merchant_id: self.merchant_id,
            mcc: self.mcc,
            amount_range,
            ..TransactionFilter::default()
        })
    }
}

/// A `limit` between 1 and 100, 10 when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitParams {
    #[serde(default = "default_short_limit")]
    pub limit: usize
}

impl Default for LimitParams {
    fn default() -> Self {
        Self { limit: DEFAULT_SHORT_LIMIT }
    }
}

impl LimitParams {
    pub fn validated(&self) -> Result<usize, ApiError> {
        within("limit", self.limit, 1, MAX_SHORT_LIMIT)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientParams {
    pub client_id: ClientId,
    #[serde(default = "default_page_size")]
    pub limit: usize
}

impl ClientParams {
    pub fn validated_limit(&self) -> Result<usize, ApiError> {
        within("limit", self.limit, 1, MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MerchantParams {
    pub merchant_id: MerchantId,
    #[serde(default = "default_page_size")]
    pub limit: usize
}

impl MerchantParams {
    pub fn validated_limit(&self) -> Result<usize, ApiError> {
        within("limit", self.limit, 1, MAX_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BinsParams {
    #[serde(default = "default_bins")]
    pub bins: usize
}

impl Default for BinsParams {
    fn default() -> Self {
        Self { bins: DEFAULT_BINS }
    }
}

impl BinsParams {
    pub fn validated(&self) -> Result<usize, ApiError> {
        within("bins", self.bins, MIN_BINS, MAX_BINS)
    }
}
