use std::sync::Arc;
use std::time::Instant;

use crate::engine::BankingEngine;
use crate::storage::DatasetStore;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<BankingEngine<DatasetStore>>,
    /// Process start, reported as uptime by the health endpoint.
    pub started: Instant
}

impl AppState {
    pub fn new(engine: Arc<BankingEngine<DatasetStore>>) -> Self {
        Self { engine, started: Instant::now() }
    }
}
