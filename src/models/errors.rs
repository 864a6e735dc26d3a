use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Data file not found: {}", path.display())]
    NotFound {
        path: PathBuf
    },
    #[error("Error loading data: {reason}")]
    Load {
        reason: String
    },
    #[error("Data not loaded. Load a dataset first.")]
    NotLoaded
}

impl DatasetError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn load(reason: impl ToString) -> Self {
        Self::Load { reason: reason.to_string() }
    }

    /// Tags a row-level failure with the 1-based data line it came from.
    pub fn load_at_row(row: usize, reason: impl ToString) -> Self {
        Self::Load { reason: format!("row [{row}]: {}", reason.to_string()) }
    }
}
