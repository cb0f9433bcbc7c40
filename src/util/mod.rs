// Utility Module
// File and parameter loading around the numeric core

pub mod file_ops;
pub mod params;

pub use file_ops::{format_file_size, read_file};
pub use params::{load_exchange_config, load_signing_key, ExchangeConfig};
