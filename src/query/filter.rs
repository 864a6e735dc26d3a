use crate::models::Transaction;
use crate::query::errors::FilterError;
use crate::types::{ClientId, Mcc, MerchantId};

/// Inclusive `[low, high]` amount bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountRange {
    low: f64,
    high: f64
}

impl AmountRange {
    pub fn new(low: f64, high: f64) -> Result<Self, FilterError> {
        if low.is_nan() || high.is_nan() {
            return Err(FilterError::RangeNotANumber);
        }

        if low > high {
            return Err(FilterError::InvertedRange { low, high });
        }

        Ok(Self { low, high })
    }

    /// Builds a range from the two-element list form used by search requests.
    pub fn from_bounds(bounds: &[f64]) -> Result<Self, FilterError> {
        match bounds {
            [low, high] => Self::new(*low, *high),
            _ => Err(FilterError::RangeArity(bounds.len()))
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, amount: f64) -> bool {
        self.low <= amount && amount <= self.high
    }
}

/// Conjunction of optional equality and range predicates over transactions.
///
/// An unset field places no constraint. `min_amount`, `max_amount` and `amount_range`
/// are independent, so bounds that exclude each other simply match nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub use_chip: Option<String>,
    pub merchant_state: Option<String>,
    pub client_id: Option<ClientId>,
    pub merchant_id: Option<MerchantId>,
    pub mcc: Option<Mcc>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub amount_range: Option<AmountRange>
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.use_chip.as_ref().is_none_or(|use_chip| transaction.use_chip == *use_chip)
            && self.merchant_state.as_ref().is_none_or(|state| transaction.merchant_state == *state)
            && self.client_id.is_none_or(|client_id| transaction.client_id == client_id)
            && self.merchant_id.is_none_or(|merchant_id| transaction.merchant_id == merchant_id)
            && self.mcc.is_none_or(|mcc| transaction.mcc == mcc)
            && self.min_amount.is_none_or(|min| transaction.amount >= min)
            && self.max_amount.is_none_or(|max| transaction.amount <= max)
            && self.amount_range.is_none_or(|range| range.contains(transaction.amount))
    }
}
