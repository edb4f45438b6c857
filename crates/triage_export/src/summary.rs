//! Summary statistics over captured diagnostics.

use crate::context::SessionContext;
use serde::Serialize;
use std::collections::BTreeMap;
use triage_diagnostics::{Category, DiagnosticKind, DiagnosticRecord};

/// The `compilation_summary` block of an export document.
///
/// `success` is always `total_errors == 0`. Only categories that occur appear
/// in `error_categories`, in [`Category`] declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// The primary input file, if reported.
    pub input_file: Option<String>,
    /// The dialect version, as `major.minor`.
    pub dml_version: Option<String>,
    /// Number of captured diagnostics of any kind.
    pub total_diagnostics: usize,
    /// Number of `error` diagnostics.
    pub total_errors: usize,
    /// Number of `warning` diagnostics.
    pub total_warnings: usize,
    /// Number of diagnostics per category, over all kinds.
    pub error_categories: BTreeMap<Category, usize>,
    /// Whether the compilation produced no errors.
    pub success: bool,
}

impl Summary {
    /// Computes the summary of `records` under the given context.
    ///
    /// When the context carries no dialect version, the version recorded on the
    /// first located diagnostic is used instead.
    pub fn compute(records: &[DiagnosticRecord], context: &SessionContext) -> Self {
        let total_errors = records
            .iter()
            .filter(|r| r.kind().counts_as_error())
            .count();
        let total_warnings = records
            .iter()
            .filter(|r| r.kind() == DiagnosticKind::Warning)
            .count();

        let mut error_categories = BTreeMap::new();
        for record in records {
            *error_categories.entry(record.category()).or_insert(0) += 1;
        }

        let dialect = context
            .dialect
            .or_else(|| records.iter().find_map(DiagnosticRecord::dialect));

        Self {
            input_file: context.input_file.clone(),
            dml_version: dialect.map(|v| v.to_string()),
            total_diagnostics: records.len(),
            total_errors,
            total_warnings,
            error_categories,
            success: total_errors == 0,
        }
    }
}
