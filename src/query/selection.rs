use crate::models::Transaction;
use crate::types::{ClientId, MerchantId};

/// The `n` latest rows by `date`, compared as written.
///
/// Rows sharing a date keep their storage order.
pub fn recent(rows: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = rows.iter().collect();
    sorted.sort_by(|left, right| right.date.cmp(&left.date));

    sorted.into_iter().take(n).cloned().collect()
}

/// Up to `limit` rows of one client, in storage order.
pub fn by_client(rows: &[Transaction], client_id: ClientId, limit: usize) -> Vec<Transaction> {
    rows.iter().filter(|row| row.client_id == client_id).take(limit).cloned().collect()
}

/// Up to `limit` rows paid to one merchant, in storage order.
pub fn by_merchant(rows: &[Transaction], merchant_id: MerchantId, limit: usize) -> Vec<Transaction> {
    rows.iter().filter(|row| row.merchant_id == merchant_id).take(limit).cloned().collect()
}
