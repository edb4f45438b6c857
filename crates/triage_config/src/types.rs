//! Configuration types deserialized from `triage.toml`.

use serde::Deserialize;
use triage_diagnostics::DEFAULT_DOC_BASE_URL;

/// Generator identifier written to exported documents unless overridden.
pub const DEFAULT_GENERATOR: &str = "dmlc-ai-diagnostics";

/// Indentation width of exported documents unless overridden.
pub const DEFAULT_INDENT: usize = 2;

/// Largest indentation width accepted by validation.
pub const MAX_INDENT: usize = 8;

/// The top-level configuration parsed from `triage.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TriageConfig {
    /// Settings for the JSON export document.
    #[serde(default)]
    pub export: ExportSettings,
}

/// The `[export]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportSettings {
    /// The `generator` field of exported documents.
    #[serde(default = "default_generator")]
    pub generator: String,
    /// Spaces per indentation level in the written JSON.
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Root URL that documentation links are built from.
    #[serde(default = "default_doc_base_url")]
    pub doc_base_url: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            generator: default_generator(),
            indent: default_indent(),
            doc_base_url: default_doc_base_url(),
        }
    }
}

fn default_generator() -> String {
    DEFAULT_GENERATOR.to_string()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_doc_base_url() -> String {
    DEFAULT_DOC_BASE_URL.to_string()
}
