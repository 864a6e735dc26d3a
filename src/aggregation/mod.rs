//! Dataset-wide roll-ups: overview, per-category and per-day statistics, the amount
//! histogram and customer views.
//!
//! Every function is a pure computation over a row slice and produces the same output
//! for the same rows. Multi-group outputs are ordered by their group key.

mod customers;
mod stats;

pub use customers::{customer_profile, list_customers, top_customers};
pub use stats::{amount_histogram, category_stats, daily_stats, distinct_categories, overview};

/// Running count and sum of amounts for one group.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Accumulator {
    pub(crate) count: usize,
    pub(crate) sum: f64
}

impl Accumulator {
    pub(crate) fn add(&mut self, amount: f64) {
        self.count += 1;
        self.sum += amount;
    }

    /// Arithmetic mean, 0.0 for an empty group.
    pub(crate) fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// `part / whole`, or 0.0 when there is nothing to divide by.
pub(crate) fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
