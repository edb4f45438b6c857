//! Capture of compiler diagnostics and export as a structured JSON document.
//!
//! An [`ExportSession`] is the activation gate: while disabled, every call on it
//! is a no-op. Once enabled it owns a [`Collector`] that turns each raw
//! diagnostic into a [`DiagnosticRecord`](triage_diagnostics::DiagnosticRecord)
//! in arrival order. At the end of the run an [`Exporter`] assembles the
//! [`ExportDocument`] and writes it atomically. [`ExportGuard`] ties the write
//! to scope exit so that partial results survive early returns.

#![warn(missing_docs)]

pub mod collector;
pub mod context;
pub mod document;
pub mod error;
pub mod guard;
pub mod session;
pub mod summary;

pub use collector::Collector;
pub use context::SessionContext;
pub use document::{ExportDocument, Exporter, FORMAT_VERSION};
pub use error::ExportError;
pub use guard::ExportGuard;
pub use session::ExportSession;
pub use summary::Summary;
