mod errors;
mod filter;
mod pagination;
mod selection;

pub use errors::FilterError;
pub use filter::{AmountRange, TransactionFilter};
pub use pagination::{paginate, Pagination};
pub use selection::{by_client, by_merchant, recent};

use crate::models::{Page, Transaction};

/// Applies every predicate of `filter` and cuts the requested page out of the matches.
///
/// Rows keep their input order. `total` counts every match, not only the returned
/// window, and a page past the end yields no items rather than an error.
pub fn query<'a, I>(rows: I, filter: &TransactionFilter, pagination: Pagination) -> Page<Transaction>
where
    I: IntoIterator<Item = &'a Transaction>
{
    paginate(rows.into_iter().filter(|row| filter.matches(row)), pagination).map(Transaction::clone)
}
