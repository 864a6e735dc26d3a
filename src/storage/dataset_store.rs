use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::models::{DatasetError, Transaction};
use crate::storage::{Dataset, Storage};

/// In-memory holder of the current transaction table.
///
/// Loading builds a complete `Dataset` first and then swaps the shared pointer, so a
/// reader holding a snapshot sees either the old table or the new one in full.
pub struct DatasetStore {
    current: RwLock<Option<Arc<Dataset>>>,
    generation: AtomicU64
}

impl DatasetStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            generation: AtomicU64::new(0)
        }
    }

    fn current(&self) -> Option<Arc<Dataset>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for DatasetStore {
    /// Replaces the held table wholesale and returns the new row count.
    fn load(&self, rows: Vec<Transaction>) -> usize {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let dataset = Arc::new(Dataset::new(generation, rows));
        let count = dataset.len();

        //NOTE: The lock only guards a pointer, a poisoned guard still holds a whole table
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(dataset);

        info!("Dataset generation [{generation}] loaded with [{count}] transactions");

        count
    }

    fn snapshot(&self) -> Result<Arc<Dataset>, DatasetError> {
        self.current().ok_or(DatasetError::NotLoaded)
    }

    fn is_loaded(&self) -> bool {
        self.current().is_some()
    }

    fn count(&self) -> usize {
        self.current().map_or(0, |dataset| dataset.len())
    }
}
