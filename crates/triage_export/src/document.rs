//! Assembly and atomic persistence of the export document.

use crate::collector::Collector;
use crate::error::ExportError;
use crate::summary::Summary;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use triage_config::ExportSettings;
use triage_diagnostics::DiagnosticRecord;

/// Version of the document schema.
pub const FORMAT_VERSION: &str = "1.0";

/// The complete export document, borrowed from a [`Collector`].
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    /// Version of the document schema.
    pub format_version: &'static str,
    /// The tool that produced the document.
    pub generator: &'a str,
    /// Summary statistics and session context.
    pub compilation_summary: Summary,
    /// Every captured record, in arrival order.
    pub diagnostics: &'a [DiagnosticRecord],
}

/// Renders collectors into JSON documents and writes them to disk.
#[derive(Clone, Debug)]
pub struct Exporter {
    generator: String,
    indent: usize,
}

impl Exporter {
    /// Creates an exporter with the given generator identifier and indentation width.
    pub fn new(generator: impl Into<String>, indent: usize) -> Self {
        Self {
            generator: generator.into(),
            indent,
        }
    }

    /// Creates an exporter from the `[export]` configuration section.
    pub fn from_settings(settings: &ExportSettings) -> Self {
        Self::new(settings.generator.clone(), settings.indent)
    }

    /// Assembles the document for the collector's current state.
    pub fn document<'a>(&'a self, collector: &'a Collector) -> ExportDocument<'a> {
        ExportDocument {
            format_version: FORMAT_VERSION,
            generator: &self.generator,
            compilation_summary: collector.summary(),
            diagnostics: collector.records(),
        }
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// Non-ASCII text is written verbatim. Rendering the same collector twice
    /// yields identical output.
    pub fn render(&self, collector: &Collector) -> Result<String, ExportError> {
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.document(collector)
            .serialize(&mut ser)
            .map_err(|e| ExportError::Serialize {
                reason: e.to_string(),
            })?;
        String::from_utf8(buf).map_err(|e| ExportError::Serialize {
            reason: e.to_string(),
        })
    }

    /// Writes the document to `path`.
    ///
    /// The document is rendered completely before anything touches the
    /// filesystem, then written to a sibling temporary file and renamed into
    /// place, so `path` either holds a whole document or is left untouched.
    pub fn write_document(&self, collector: &Collector, path: &Path) -> Result<(), ExportError> {
        let json = self.render(collector)?;
        let tmp = temp_path(path);
        let io_err = |source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        };

        let result = std::fs::File::create(&tmp)
            .and_then(|mut file| {
                file.write_all(json.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| std::fs::rename(&tmp, path));
        if let Err(e) = result {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_err(e));
        }

        tracing::info!(
            path = %path.display(),
            diagnostics = collector.len(),
            "wrote diagnostics export"
        );
        Ok(())
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::from_settings(&ExportSettings::default())
    }
}

/// Returns the temporary path a document is staged at before the rename.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "diagnostics".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
