
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;

pub const API_TITLE: &str = "Banking Transactions API";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const MAX_PAGE_SIZE: usize = 1000;
pub const DEFAULT_PAGE_SIZE: usize = 100;

const DEFAULT_DATA_PATH: &str = "data/transactions_data.csv";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// Runtime settings of the API process.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: LevelFilter,
    pub report_cache_capacity: u64
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: LevelFilter::INFO,
            report_cache_capacity: DEFAULT_CACHE_CAPACITY
        }
    }
}

impl Settings {
    /// Reads `DATA_PATH`, `API_HOST`, `API_PORT`, `LOG_LEVEL` and `REPORT_CACHE_CAPACITY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(path) = lookup("DATA_PATH") {
            settings.data_path = PathBuf::from(path);
        }

        if let Some(host) = lookup("API_HOST") {
            settings.host = host;
        }

        if let Some(port) = lookup("API_PORT") {
            settings.port = port.trim().parse()
                .with_context(|| format!("API_PORT must be a port number, got '{port}'"))?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            settings.log_level = parse_log_level(&level);
        }

        if let Some(capacity) = lookup("REPORT_CACHE_CAPACITY") {
            settings.report_cache_capacity = capacity.trim().parse()
                .with_context(|| format!("REPORT_CACHE_CAPACITY must be a positive integer, got '{capacity}'"))?;
        }

        Ok(settings)
    }

    /// Applies the positional `[data.csv] [log_level]` arguments, program name excluded.
    pub fn with_args(mut self, args: &[String]) -> Self {
        if let Some(path) = args.first() {
            self.data_path = PathBuf::from(path);
        }

        if let Some(level) = args.get(1) {
            self.log_level = parse_log_level(level);
        }

        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port).parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" | "warning" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}
