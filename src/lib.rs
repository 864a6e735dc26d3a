pub mod aggregation;
pub mod api;
pub mod config;
pub mod engine;
pub mod loader;
pub mod models;
pub mod query;
pub mod risk;
pub mod storage;
pub mod types;
