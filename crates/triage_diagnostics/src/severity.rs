//! Diagnostic kinds as raised by the compiler, and the severities they map to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of message the compiler raised.
///
/// Serialized as the `type` field of an exported diagnostic.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A user error that makes compilation fail.
    Error,
    /// A warning that does not prevent compilation.
    Warning,
    /// An internal compiler error (a bug in the compiler).
    InternalError,
    /// An informational message.
    Info,
}

impl DiagnosticKind {
    /// Returns the severity this kind is exported with.
    ///
    /// Internal compiler errors are `fatal`; every other kind maps to the
    /// severity of the same name.
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::InternalError => Severity::Fatal,
            DiagnosticKind::Error => Severity::Error,
            DiagnosticKind::Warning => Severity::Warning,
            DiagnosticKind::Info => Severity::Info,
        }
    }

    /// Returns `true` if this kind counts toward `total_errors` and fails the
    /// compilation.
    ///
    /// Only [`Error`](DiagnosticKind::Error) counts. Internal errors are
    /// exported with `fatal` severity but leave `success` untouched.
    pub fn counts_as_error(self) -> bool {
        self == DiagnosticKind::Error
    }

    /// Returns the wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::Error => "error",
            DiagnosticKind::Warning => "warning",
            DiagnosticKind::InternalError => "internal_error",
            DiagnosticKind::Info => "info",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The severity level of an exported diagnostic.
///
/// Ordered from least severe (`Info`) to most severe (`Fatal`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// An informational message.
    Info,
    /// A potential issue that doesn't prevent compilation.
    Warning,
    /// A definite problem that prevents successful compilation.
    Error,
    /// The compiler itself failed.
    Fatal,
}

impl Severity {
    /// Returns `true` for [`Error`](Severity::Error) and [`Fatal`](Severity::Fatal).
    pub fn is_error(self) -> bool {
        self >= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_to_severity() {
        assert_eq!(DiagnosticKind::Error.severity(), Severity::Error);
        assert_eq!(DiagnosticKind::Warning.severity(), Severity::Warning);
        assert_eq!(DiagnosticKind::InternalError.severity(), Severity::Fatal);
        assert_eq!(DiagnosticKind::Info.severity(), Severity::Info);
    }

    #[test]
    fn ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn is_error() {
        assert!(Severity::Fatal.is_error());
        assert!(Severity::Error.is_error());
        assert!(!Severity::Warning.is_error());
        assert!(!Severity::Info.is_error());
    }

    #[test]
    fn only_error_kind_counts_as_error() {
        assert!(DiagnosticKind::Error.counts_as_error());
        assert!(!DiagnosticKind::InternalError.counts_as_error());
        assert!(!DiagnosticKind::Warning.counts_as_error());
        assert!(!DiagnosticKind::Info.counts_as_error());
    }

    #[test]
    fn wire_names() {
        assert_eq!(
            serde_json::to_string(&DiagnosticKind::InternalError).unwrap(),
            "\"internal_error\""
        );
        assert_eq!(serde_json::to_string(&Severity::Fatal).unwrap(), "\"fatal\"");
        let kind: DiagnosticKind = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(kind, DiagnosticKind::Warning);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(DiagnosticKind::InternalError.to_string(), "internal_error");
        assert_eq!(Severity::Fatal.to_string(), "fatal");
    }
}
