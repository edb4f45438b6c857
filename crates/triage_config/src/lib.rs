//! Parsing and validation of `triage.toml` export configuration files.
//!
//! This crate reads the optional configuration file and produces a strongly-typed
//! [`TriageConfig`] controlling how diagnostics export documents are written.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
