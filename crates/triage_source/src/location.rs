//! Source locations as reported by compiler stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use triage_common::DialectVersion;

/// A location in DML source code, as reported alongside a diagnostic.
///
/// Every field is optional: some compiler stages know only the file, and some
/// diagnostics are raised without any location at all. Line and column values
/// are 1-indexed. When the reporting stage already rendered the location
/// (`display`), that string is used verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// The path of the source file, if known.
    #[serde(default)]
    pub file: Option<String>,
    /// The line number (1-indexed), if known.
    #[serde(default)]
    pub line: Option<u32>,
    /// The column number (1-indexed), if known.
    #[serde(default)]
    pub column: Option<u32>,
    /// A precomputed `file:line:col` string from the reporting stage.
    #[serde(default)]
    pub display: Option<String>,
    /// The dialect version of the file this location lies in, if known.
    #[serde(default)]
    pub dialect: Option<DialectVersion>,
}

impl SourceLocation {
    /// Creates a location at the given file, line, and column.
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: Some(file.into()),
            line: Some(line),
            column: Some(column),
            display: None,
            dialect: None,
        }
    }

    /// Creates a location that only names a file.
    pub fn file_only(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::default()
        }
    }

    /// Sets the precomputed display string.
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Sets the dialect version of the enclosing file.
    pub fn with_dialect(mut self, dialect: DialectVersion) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// Returns `true` if neither a file, a line, nor a display string is known.
    pub fn is_unknown(&self) -> bool {
        self.file.is_none() && self.line.is_none() && self.display_str().is_none()
    }

    /// Renders this location as a `file:line:col` string, if anything is known.
    ///
    /// A precomputed display string wins. Otherwise the string is assembled
    /// from whichever of file, line, and column are present.
    pub fn render(&self) -> Option<String> {
        if self.is_unknown() {
            return None;
        }
        Some(self.to_string())
    }

    /// The precomputed display string, unless it is blank.
    fn display_str(&self) -> Option<&str> {
        self.display.as_deref().filter(|d| !d.trim().is_empty())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(display) = self.display_str() {
            return f.write_str(display);
        }
        f.write_str(self.file.as_deref().unwrap_or("<unknown>"))?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
            if let Some(column) = self.column {
                write!(f, ":{column}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_full() {
        let loc = SourceLocation::new("a.dml", 12, 5);
        assert_eq!(loc.to_string(), "a.dml:12:5");
        assert_eq!(loc.render().as_deref(), Some("a.dml:12:5"));
    }

    #[test]
    fn precomputed_display_used_verbatim() {
        let loc = SourceLocation::new("a.dml", 12, 5).with_display("lib/a.dml:12:5");
        assert_eq!(loc.render().as_deref(), Some("lib/a.dml:12:5"));
        assert_eq!(loc.to_string(), "lib/a.dml:12:5");
    }

    #[test]
    fn file_only_renders_path() {
        let loc = SourceLocation::file_only("top.dml");
        assert_eq!(loc.render().as_deref(), Some("top.dml"));
    }

    #[test]
    fn line_without_column() {
        let loc = SourceLocation {
            file: Some("b.dml".to_string()),
            line: Some(3),
            ..SourceLocation::default()
        };
        assert_eq!(loc.render().as_deref(), Some("b.dml:3"));
    }

    #[test]
    fn unknown_renders_nothing() {
        let loc = SourceLocation::default();
        assert!(loc.is_unknown());
        assert!(loc.render().is_none());
    }

    #[test]
    fn blank_display_is_ignored() {
        let loc = SourceLocation::new("a.dml", 3, 1).with_display("  ");
        assert_eq!(loc.render().as_deref(), Some("a.dml:3:1"));

        let bare = SourceLocation::default().with_display("");
        assert!(bare.is_unknown());
        assert!(bare.render().is_none());
    }

    #[test]
    fn column_without_line_or_file_is_unknown() {
        let loc = SourceLocation {
            column: Some(4),
            ..SourceLocation::default()
        };
        assert!(loc.is_unknown());
        assert!(loc.render().is_none());
    }

    #[test]
    fn deserialize_sparse() {
        let loc: SourceLocation = serde_json::from_str(r#"{"file": "x.dml"}"#).unwrap();
        assert_eq!(loc.file.as_deref(), Some("x.dml"));
        assert!(loc.line.is_none());
        assert!(loc.dialect.is_none());
    }

    #[test]
    fn deserialize_with_dialect() {
        let loc: SourceLocation = serde_json::from_str(
            r#"{"file": "x.dml", "line": 4, "dialect": {"major": 1, "minor": 4}}"#,
        )
        .unwrap();
        assert_eq!(loc.dialect, Some(DialectVersion::DML_1_4));
    }
}
