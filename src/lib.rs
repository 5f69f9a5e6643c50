//! semloc library
//!
//! Exposes configuration, snapshot loading and output helpers for the CLI
//! and for integration testing

pub mod config;
pub mod output;
pub mod snapshot;

pub use config::{load_config, AppConfig, LoadedConfig};
pub use output::{FindReport, OutputFormat};
pub use snapshot::{load_snapshot, search_root};
