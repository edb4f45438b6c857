//! Implementation of the `triage replay` command.
//!
//! Feeds raw diagnostics through the same interception point the compiler
//! uses: each one is printed on the primary stream and, when `--ai-json` is
//! given, captured for the structured export written when the run ends.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use triage_diagnostics::{RawDiagnostic, SuggestionEngine};
use triage_export::{ExportGuard, ExportSession, Exporter};

use crate::pipeline::{load_settings, render_primary};
use crate::{GlobalArgs, ReplayArgs};

/// Errors from reading the diagnostics stream.
#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("{path}:{line}: malformed diagnostic: {source}")]
    Malformed {
        path: String,
        line: usize,
        source: serde_json::Error,
    },
}

/// Runs the `triage replay` command.
///
/// Returns 1 when an `error` diagnostic was replayed, matching the exported
/// `success` flag. A failed export returns 2, but only for an otherwise
/// successful run.
pub fn run(args: &ReplayArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_settings(global)?;
    let engine = SuggestionEngine::new(config.export.doc_base_url.clone());
    let mut guard = ExportGuard::new(
        ExportSession::new(engine),
        Exporter::from_settings(&config.export),
        args.ai_json.clone(),
    );
    guard.set_context(args.input_file.clone(), args.dml_version);

    // An early return leaves the export to the guard's drop.
    let errors = replay_file(&args.diagnostics, &mut guard, global.quiet)?;
    let failed = errors > 0;
    tracing::debug!(errors, "replay finished");

    match guard.finish() {
        Ok(_) => Ok(i32::from(failed)),
        Err(e) => {
            eprintln!("error: {e}");
            Ok(if failed { 1 } else { 2 })
        }
    }
}

/// Replays every diagnostic in a JSON-lines file, returning the error count.
///
/// Blank lines are skipped. A malformed line stops the replay; diagnostics
/// already seen stay captured.
fn replay_file(path: &Path, session: &mut ExportSession, quiet: bool) -> Result<usize, ReplayError> {
    let display = path.display().to_string();
    let file = File::open(path).map_err(|source| ReplayError::Read {
        path: display.clone(),
        source,
    })?;

    let mut errors = 0;
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| ReplayError::Read {
            path: display.clone(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let raw: RawDiagnostic =
            serde_json::from_str(&line).map_err(|source| ReplayError::Malformed {
                path: display.clone(),
                line: index + 1,
                source,
            })?;
        if raw.kind.counts_as_error() {
            errors += 1;
        }
        if !quiet || raw.kind.severity().is_error() {
            eprintln!("{}", render_primary(&raw));
        }
        session.log_message(&raw);
    }
    Ok(errors)
}
