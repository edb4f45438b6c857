//! Normalized location entries written to the export document.

use crate::location::SourceLocation;
use serde::{Deserialize, Serialize};

/// Placeholder `location_string` for diagnostics raised without a location.
pub const UNKNOWN_LOCATION: &str = "<unknown location>";

/// The `location` object of an exported diagnostic.
///
/// `file` and `line` are null when unknown; `location_string` is always a
/// usable string, falling back to [`UNKNOWN_LOCATION`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// The source file path, or null.
    pub file: Option<String>,
    /// The 1-indexed line number, or null.
    pub line: Option<u32>,
    /// The rendered `file:line:col` string.
    pub location_string: String,
}

impl LocationEntry {
    /// The entry used for diagnostics without any location.
    pub fn unknown() -> Self {
        Self {
            file: None,
            line: None,
            location_string: UNKNOWN_LOCATION.to_string(),
        }
    }

    /// Builds the entry for an optional primary location.
    ///
    /// A missing location and one with nothing known about it both yield the
    /// placeholder entry.
    pub fn from_location(location: Option<&SourceLocation>) -> Self {
        match location {
            Some(loc) if !loc.is_unknown() => Self {
                file: loc.file.clone(),
                line: loc.line,
                location_string: loc.to_string(),
            },
            _ => Self::unknown(),
        }
    }
}
