mod banking_engine;
mod report_cache;

pub use banking_engine::BankingEngine;
pub use report_cache::ReportCache;
