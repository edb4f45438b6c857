//! Diagnostic enrichment: classification, fix suggestions, and export records.
//!
//! A compiler stage hands over a [`RawDiagnostic`]. The [`classify`] rule table
//! assigns it a [`Category`], the [`SuggestionEngine`] derives remediation hints
//! and a documentation link, and [`DiagnosticRecord::from_raw`] combines all of
//! it into the immutable record that is later exported as JSON.

#![warn(missing_docs)]

pub mod category;
pub mod classify;
pub mod raw;
pub mod record;
pub mod severity;
pub mod suggest;

pub use category::Category;
pub use classify::{classify, CategoryRule, CodeMatcher, CATEGORY_RULES};
pub use raw::{RawDiagnostic, RelatedSite, DEFAULT_CANDIDATE_MESSAGE, RELATED_LOCATION_MESSAGE};
pub use record::{DiagnosticRecord, RelatedEntry};
pub use severity::{DiagnosticKind, Severity};
pub use suggest::{Suggestions, SuggestionEngine, DEFAULT_DOC_BASE_URL};
