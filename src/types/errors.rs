use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: {0}")]
    ParseFloat(#[from] ParseFloatError),
    #[error("Amount error: {0} is not a finite number")]
    NotFinite(String)
}
