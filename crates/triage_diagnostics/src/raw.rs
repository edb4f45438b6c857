//! Raw diagnostics as handed over by the compiler's error-reporting call.

use crate::severity::DiagnosticKind;
use serde::{Deserialize, Serialize};
use triage_source::SourceLocation;

/// Message attached to an ordinary related location.
pub const RELATED_LOCATION_MESSAGE: &str = "related location";

/// Message attached to a candidate site for a default method.
pub const DEFAULT_CANDIDATE_MESSAGE: &str = "default method candidate";

/// A secondary source location that helps explain a diagnostic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelatedSite {
    /// Where the related code lives. Sites without a location are not exported.
    #[serde(default)]
    pub location: Option<SourceLocation>,
    /// Why this location is relevant.
    #[serde(default = "default_related_message")]
    pub message: String,
}

fn default_related_message() -> String {
    RELATED_LOCATION_MESSAGE.to_string()
}

impl RelatedSite {
    /// Creates a related site with a custom message.
    pub fn new(location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            location: Some(location),
            message: message.into(),
        }
    }

    /// Creates a plain related location, such as a conflicting declaration.
    pub fn related(location: SourceLocation) -> Self {
        Self::new(location, RELATED_LOCATION_MESSAGE)
    }

    /// Creates a site naming one candidate default implementation of a method.
    pub fn default_candidate(location: SourceLocation) -> Self {
        Self::new(location, DEFAULT_CANDIDATE_MESSAGE)
    }
}

/// A diagnostic exactly as the compiler raised it.
///
/// Everything except the kind may be missing; enrichment degrades missing
/// fields to null instead of rejecting the diagnostic. The optional `context`
/// is a rule-specific payload, normally a JSON object such as
/// `{"method": "read"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawDiagnostic {
    /// What kind of message this is.
    pub kind: DiagnosticKind,
    /// The stable identifier of the rule that raised it (e.g., `EUNDEF`).
    #[serde(default)]
    pub code: Option<String>,
    /// The human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// The primary source location.
    #[serde(default)]
    pub location: Option<SourceLocation>,
    /// Secondary locations, in the order the compiler listed them.
    #[serde(default)]
    pub related: Vec<RelatedSite>,
    /// Rule-specific structured context.
    #[serde(default)]
    pub context: Option<serde_json::Value>,
}

impl RawDiagnostic {
    /// Creates a diagnostic of the given kind with a code and message.
    pub fn new(kind: DiagnosticKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: Some(code.into()),
            message: Some(message.into()),
            location: None,
            related: Vec::new(),
            context: None,
        }
    }

    /// Creates an error diagnostic.
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, code, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Warning, code, message)
    }

    /// Creates an internal compiler error diagnostic.
    pub fn internal_error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::InternalError, code, message)
    }

    /// Creates an informational diagnostic.
    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Info, code, message)
    }

    /// Sets the primary location.
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Adds a related site.
    pub fn with_related(mut self, site: RelatedSite) -> Self {
        self.related.push(site);
        self
    }

    /// Sets the rule-specific context payload.
    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }
}
