//! In-memory accumulation of enriched diagnostics for one compilation.

use crate::context::SessionContext;
use crate::summary::Summary;
use triage_common::DialectVersion;
use triage_diagnostics::{DiagnosticRecord, RawDiagnostic, SuggestionEngine};

/// Accumulates diagnostic records for one compilation run.
///
/// Records are kept in arrival order and are never reordered, merged, or
/// deduplicated. Nothing here performs I/O.
#[derive(Debug)]
pub struct Collector {
    records: Vec<DiagnosticRecord>,
    context: SessionContext,
    engine: SuggestionEngine,
}

impl Collector {
    /// Creates an empty collector that enriches records with `engine`.
    pub fn new(engine: SuggestionEngine) -> Self {
        Self {
            records: Vec::new(),
            context: SessionContext::default(),
            engine,
        }
    }

    /// Captures one raw diagnostic.
    ///
    /// Never fails; unusable parts of `raw` are exported as null.
    pub fn log_message(&mut self, raw: &RawDiagnostic) {
        let record = DiagnosticRecord::from_raw(raw, &self.engine);
        tracing::debug!(
            code = record.code().unwrap_or("<none>"),
            category = %record.category(),
            index = self.records.len(),
            "captured diagnostic"
        );
        self.records.push(record);
    }

    /// Records the input file and dialect version; a later call replaces both.
    pub fn set_context(&mut self, input_file: Option<String>, dialect: Option<DialectVersion>) {
        self.context.set(input_file, dialect);
    }

    /// The current session context.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// All records, in arrival order.
    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops all captured records. The context is kept.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Computes summary statistics over the captured records.
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.records, &self.context)
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(SuggestionEngine::default())
    }
}
