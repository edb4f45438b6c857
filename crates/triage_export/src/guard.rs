//! Scope-bound export that runs however the compilation ends.

use crate::document::Exporter;
use crate::error::ExportError;
use crate::session::ExportSession;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// Writes the export document when the compilation scope ends.
///
/// Created with the destination path from the command line: with a path the
/// wrapped session is enabled, without one it stays disabled and nothing is
/// ever written. Call [`finish`](Self::finish) on the normal path to get the
/// write result. If the guard is dropped instead (early return, `?`, or
/// unwinding), the document is still written and a failure is logged.
#[derive(Debug)]
pub struct ExportGuard {
    session: ExportSession,
    exporter: Exporter,
    path: Option<PathBuf>,
    finished: bool,
}

impl ExportGuard {
    /// Wraps `session`, enabling it when a destination path is given.
    pub fn new(mut session: ExportSession, exporter: Exporter, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            session.enable();
        }
        Self {
            session,
            exporter,
            path,
            finished: false,
        }
    }

    /// The destination path, if export is active.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes the document now.
    ///
    /// Returns `Ok(false)` when export is inactive and nothing was written.
    pub fn finish(mut self) -> Result<bool, ExportError> {
        self.finished = true;
        self.write()
    }

    fn write(&self) -> Result<bool, ExportError> {
        let (Some(path), Some(collector)) = (&self.path, self.session.current()) else {
            return Ok(false);
        };
        self.exporter.write_document(collector, path)?;
        Ok(true)
    }
}

impl Deref for ExportGuard {
    type Target = ExportSession;

    fn deref(&self) -> &ExportSession {
        &self.session
    }
}

impl DerefMut for ExportGuard {
    fn deref_mut(&mut self) -> &mut ExportSession {
        &mut self.session
    }
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if std::thread::panicking() {
            tracing::warn!("compilation unwound; exporting captured diagnostics");
        }
        if let Err(e) = self.write() {
            tracing::error!(error = %e, "diagnostics export failed during cleanup");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_diagnostics::RawDiagnostic;

    fn read_doc(path: &Path) -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn without_path_nothing_is_captured_or_written() {
        let mut guard = ExportGuard::new(ExportSession::default(), Exporter::default(), None);
        guard.log_message(&RawDiagnostic::error("EUNDEF", "x"));
        assert!(!guard.is_enabled());
        assert!(guard.path().is_none());
        assert!(!guard.finish().unwrap());
    }

    #[test]
    fn finish_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut guard = ExportGuard::new(
            ExportSession::default(),
            Exporter::default(),
            Some(path.clone()),
        );
        guard.log_message(&RawDiagnostic::error("EUNDEF", "undefined symbol 'foo'"));
        assert!(guard.finish().unwrap());
        assert_eq!(read_doc(&path)["compilation_summary"]["total_errors"], 1);
    }

    #[test]
    fn drop_writes_partial_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        {
            let mut guard = ExportGuard::new(
                ExportSession::default(),
                Exporter::default(),
                Some(path.clone()),
            );
            guard.log_message(&RawDiagnostic::warning("WUNUSED", "x"));
        }
        assert_eq!(read_doc(&path)["compilation_summary"]["total_warnings"], 1);
    }

    #[test]
    fn unwinding_still_exports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let p = path.clone();
        let result = std::panic::catch_unwind(move || {
            let mut guard =
                ExportGuard::new(ExportSession::default(), Exporter::default(), Some(p));
            guard.log_message(&RawDiagnostic::internal_error("ICE", "unexpected node"));
            panic!("compiler crashed");
        });
        assert!(result.is_err());
        let doc = read_doc(&path);
        assert_eq!(doc["diagnostics"][0]["severity"], "fatal");
    }

    #[test]
    fn finish_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.json");
        let guard = ExportGuard::new(ExportSession::default(), Exporter::default(), Some(path));
        assert!(matches!(guard.finish(), Err(ExportError::Io { .. })));
    }

    #[test]
    fn drop_swallows_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.json");
        let guard = ExportGuard::new(ExportSession::default(), Exporter::default(), Some(path));
        drop(guard);
    }
}
