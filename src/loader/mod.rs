mod csv_loader;
mod errors;
#[cfg(test)]
mod tests;

pub use csv_loader::{load_transactions, read_transactions};
