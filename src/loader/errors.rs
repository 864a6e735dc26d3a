use thiserror::Error;

use crate::types::AmountError;

/// Why a single CSV row could not be normalized.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Column [id] is empty")]
    EmptyId,
    #[error("Column [{column}] value [{value}] is not a non-negative integer")]
    InvalidInteger {
        column: &'static str,
        value: String
    },
    #[error("Column [{column}] is empty")]
    MissingValue {
        column: &'static str
    },
    #[error("Column [amount]: {0}")]
    InvalidAmount(#[from] AmountError),
    #[error("Duplicate transaction id [{0}]")]
    DuplicateId(String)
}
