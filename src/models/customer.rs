use serde::Serialize;

use crate::types::ClientId;

/// Aggregate view over every transaction of one client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: ClientId,
    pub transactions_count: usize,
    pub avg_amount: f64,
    pub total_amount: f64,
    /// Number of distinct merchants the client transacted with.
    pub unique_merchants: usize
}

/// A client ranked by transaction volume, refunds counted by absolute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCustomer {
    pub customer_id: ClientId,
    pub total_amount: f64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerPage {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub customers: Vec<String>
}
