mod dataset;
mod dataset_store;

use std::sync::Arc;

use crate::models::{DatasetError, Transaction};

pub use dataset::Dataset;
pub use dataset_store::DatasetStore;

/// Holder of the current transaction table.
///
/// `load` replaces the table wholesale, readers only ever get immutable snapshots.
pub trait Storage: Send + Sync + 'static {
    fn load(&self, rows: Vec<Transaction>) -> usize;
    fn snapshot(&self) -> Result<Arc<Dataset>, DatasetError>;
    fn is_loaded(&self) -> bool;
    fn count(&self) -> usize;
}
