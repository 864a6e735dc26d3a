use std::collections::HashMap;

use crate::models::Transaction;
use crate::types::TransactionId;

/// An immutable, fully normalized transaction table.
///
/// Rows keep their insertion order. The id index points at the first row holding a
/// given id, the loader guarantees there is only ever one.
#[derive(Debug, Default, PartialEq)]
pub struct Dataset {
    generation: u64,
    rows: Vec<Transaction>,
    index: HashMap<TransactionId, usize>
}

impl Dataset {
    pub fn new(generation: u64, rows: Vec<Transaction>) -> Self {
        let mut index = HashMap::with_capacity(rows.len());

        for (position, row) in rows.iter().enumerate() {
            index.entry(row.id.clone()).or_insert(position);
        }

        Self { generation, rows, index }
    }

    /// Load counter of the store that produced this table, starts at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.index.get(id).map(|&position| &self.rows[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }
}
