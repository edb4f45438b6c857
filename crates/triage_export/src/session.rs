//! The activation gate for diagnostics capture.

use crate::collector::Collector;
use triage_common::DialectVersion;
use triage_diagnostics::{RawDiagnostic, SuggestionEngine};

/// Owns the collector for one compilation and decides whether capture happens.
///
/// The driver creates one session per compilation and passes it by `&mut` to
/// the single interception point. A disabled session holds no collector, and
/// [`log_message`](Self::log_message) and [`set_context`](Self::set_context)
/// return immediately without allocating.
#[derive(Debug, Default)]
pub struct ExportSession {
    collector: Option<Collector>,
    engine: SuggestionEngine,
}

impl ExportSession {
    /// Creates a disabled session whose collector will enrich records with `engine`.
    pub fn new(engine: SuggestionEngine) -> Self {
        Self {
            collector: None,
            engine,
        }
    }

    /// Installs a fresh collector, discarding any previous one, and returns it.
    pub fn enable(&mut self) -> &mut Collector {
        self.collector.insert(Collector::new(self.engine.clone()))
    }

    /// Removes the collector and returns what it had captured.
    pub fn disable(&mut self) -> Option<Collector> {
        self.collector.take()
    }

    /// Returns `true` if a collector is installed.
    pub fn is_enabled(&self) -> bool {
        self.collector.is_some()
    }

    /// The active collector, if any.
    pub fn current(&self) -> Option<&Collector> {
        self.collector.as_ref()
    }

    /// The active collector, mutably, if any.
    pub fn current_mut(&mut self) -> Option<&mut Collector> {
        self.collector.as_mut()
    }

    /// The interception point: captures `raw` if the session is enabled.
    pub fn log_message(&mut self, raw: &RawDiagnostic) {
        if let Some(collector) = &mut self.collector {
            collector.log_message(raw);
        }
    }

    /// Records the compilation context if the session is enabled.
    pub fn set_context(&mut self, input_file: Option<String>, dialect: Option<DialectVersion>) {
        if let Some(collector) = &mut self.collector {
            collector.set_context(input_file, dialect);
        }
    }
}
