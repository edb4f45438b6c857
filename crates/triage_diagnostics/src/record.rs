//! Enriched, immutable diagnostic records in export form.

use crate::category::Category;
use crate::classify::classify;
use crate::raw::{RawDiagnostic, RelatedSite};
use crate::severity::{DiagnosticKind, Severity};
use crate::suggest::SuggestionEngine;
use serde::Serialize;
use serde_json::{Map, Value};
use triage_common::{CaptureFault, CaptureResult, DialectVersion};
use triage_source::{LocationEntry, SourceLocation};

/// One entry of a record's `related_locations` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelatedEntry {
    /// The source file path, or null.
    pub file: Option<String>,
    /// The 1-indexed line number, or null.
    pub line: Option<u32>,
    /// Why this location is relevant.
    pub message: String,
}

/// A raw diagnostic after classification and enrichment.
///
/// Records are built once by [`DiagnosticRecord::from_raw`] and never change
/// afterwards; fields are only reachable through accessors. Serializing a
/// record yields exactly one element of the export document's `diagnostics`
/// array.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiagnosticRecord {
    #[serde(rename = "type")]
    kind: DiagnosticKind,
    severity: Severity,
    code: Option<String>,
    message: Option<String>,
    category: Category,
    location: LocationEntry,
    fix_suggestions: Vec<String>,
    related_locations: Vec<RelatedEntry>,
    documentation_url: Option<String>,
    context: Option<Map<String, Value>>,
    #[serde(skip)]
    dialect: Option<DialectVersion>,
}

impl DiagnosticRecord {
    /// Classifies and enriches a raw diagnostic.
    ///
    /// Never fails. Parts of the raw diagnostic that cannot be used are logged
    /// on the debug channel and exported as null.
    pub fn from_raw(raw: &RawDiagnostic, engine: &SuggestionEngine) -> Self {
        let code = raw.code.as_deref();
        if code.is_none() {
            tracing::debug!(kind = %raw.kind, "diagnostic raised without a code");
        }

        let location = raw.location.as_ref().map(normalize_location);
        let context = drop_fault(normalize_context(raw.context.as_ref()));

        let category = classify(code, raw.kind);
        let suggestions = engine.suggest(code, category, context.as_ref());

        Self {
            kind: raw.kind,
            severity: raw.kind.severity(),
            code: raw.code.clone(),
            message: raw.message.clone(),
            category,
            location: LocationEntry::from_location(location.as_ref()),
            fix_suggestions: suggestions.fixes,
            related_locations: raw.related.iter().filter_map(related_entry).collect(),
            documentation_url: suggestions.documentation_url,
            context,
            dialect: location.as_ref().and_then(|loc| loc.dialect),
        }
    }

    /// The kind of diagnostic the compiler raised.
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// The exported severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The diagnostic code, if the compiler supplied one.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The message, if the compiler supplied one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The assigned category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The normalized primary location.
    pub fn location(&self) -> &LocationEntry {
        &self.location
    }

    /// Fix suggestions, in order.
    pub fn fix_suggestions(&self) -> &[String] {
        &self.fix_suggestions
    }

    /// Related locations, in the order the compiler listed them.
    pub fn related_locations(&self) -> &[RelatedEntry] {
        &self.related_locations
    }

    /// A documentation link, if one is known for this code or category.
    pub fn documentation_url(&self) -> Option<&str> {
        self.documentation_url.as_deref()
    }

    /// The rule-specific context object.
    pub fn context(&self) -> Option<&Map<String, Value>> {
        self.context.as_ref()
    }

    /// The dialect version of the file the primary location lies in.
    pub fn dialect(&self) -> Option<DialectVersion> {
        self.dialect
    }
}

/// Clears line and column numbers that are not 1-indexed.
///
/// The rest of the location, including the file, is kept.
fn normalize_location(location: &SourceLocation) -> SourceLocation {
    let mut loc = location.clone();
    loc.line = drop_fault(one_indexed("location.line", loc.line));
    loc.column = drop_fault(one_indexed("location.column", loc.column));
    loc
}

fn one_indexed(field: &'static str, value: Option<u32>) -> CaptureResult<Option<u32>> {
    match value {
        Some(0) => Err(CaptureFault::new(field, "expected a 1-indexed number, got 0")),
        value => Ok(value),
    }
}

fn drop_fault<T>(result: CaptureResult<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|fault| {
        tracing::debug!(%fault, "dropping unusable field");
        None
    })
}

fn normalize_context(context: Option<&Value>) -> CaptureResult<Option<Map<String, Value>>> {
    match context {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map.clone())),
        Some(other) => Err(CaptureFault::new(
            "context",
            format!("expected a JSON object, found {other}"),
        )),
    }
}

fn related_entry(site: &RelatedSite) -> Option<RelatedEntry> {
    let loc = normalize_location(site.location.as_ref()?);
    Some(RelatedEntry {
        file: loc.file,
        line: loc.line,
        message: site.message.clone(),
    })
}
