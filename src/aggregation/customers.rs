use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::aggregation::Accumulator;
use crate::models::{Customer, CustomerPage, Transaction, TopCustomer};
use crate::query::{paginate, Pagination};
use crate::types::ClientId;

/// Roll-up of one client's transactions, `None` when the client has none.
pub fn customer_profile(rows: &[Transaction], client_id: ClientId) -> Option<Customer> {
    let mut amounts = Accumulator::default();
    let mut merchants = HashSet::new();

    for row in rows.iter().filter(|row| row.client_id == client_id) {
        amounts.add(row.amount);
        merchants.insert(row.merchant_id);
    }

    if amounts.count == 0 {
        return None;
    }

    Some(Customer {
        id: client_id,
        transactions_count: amounts.count,
        avg_amount: amounts.mean(),
        total_amount: amounts.sum,
        unique_merchants: merchants.len()
    })
}

/// The `n` clients with the largest volume, where volume sums absolute amounts.
///
/// Clients with equal volume keep ascending id order.
pub fn top_customers(rows: &[Transaction], n: usize) -> Vec<TopCustomer> {
    let mut volumes = BTreeMap::<ClientId, f64>::new();

    for row in rows {
        *volumes.entry(row.client_id).or_default() += row.amount.abs();
    }

    let mut ranked: Vec<TopCustomer> = volumes.into_iter()
        .map(|(customer_id, total_amount)| TopCustomer { customer_id, total_amount })
        .collect();

    ranked.sort_by(|left, right| right.total_amount.total_cmp(&left.total_amount));
    ranked.truncate(n);

    ranked
}

/// Distinct client ids in ascending order, one page at a time.
pub fn list_customers(rows: &[Transaction], pagination: Pagination) -> CustomerPage {
    let clients: BTreeSet<ClientId> = rows.iter().map(|row| row.client_id).collect();
    let page = paginate(clients, pagination);

    CustomerPage {
        page: page.page,
        limit: page.limit,
        total: page.total,
        customers: page.items.into_iter().map(|client_id| client_id.to_string()).collect()
    }
}
