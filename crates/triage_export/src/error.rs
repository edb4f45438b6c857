//! Error types for writing export documents.

use std::path::PathBuf;

/// Errors that can occur while writing an export document.
///
/// Capturing diagnostics never fails; these errors only come from the final
/// write, and are reported separately from the compilation result.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// An I/O error occurred while writing the document.
    #[error("failed to write diagnostics export to {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The document could not be serialized as JSON.
    #[error("failed to serialize diagnostics export: {reason}")]
    Serialize {
        /// Description of the serialization failure.
        reason: String,
    },
}
