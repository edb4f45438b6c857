//! Shared foundational types for the triage diagnostics exporter.
//!
//! This crate provides the fail-open capture result type and the DML dialect
//! version value that is attached to exported documents.

#![warn(missing_docs)]

pub mod result;
pub mod version;

pub use result::{CaptureFault, CaptureResult};
pub use version::{DialectVersion, ParseVersionError};
