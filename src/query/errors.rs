use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("amount_range must contain exactly 2 values, got {0}")]
    RangeArity(usize),
    #[error("amount_range bounds must be numbers")]
    RangeNotANumber,
    #[error("amount_range[0] must be <= amount_range[1], got [{low}, {high}]")]
    InvertedRange {
        low: f64,
        high: f64
    }
}
