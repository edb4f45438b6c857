//! DML dialect versions with parsing and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A DML language dialect version such as `1.2` or `1.4`.
///
/// Displays as `major.minor`, which is the form written to the
/// `dml_version` field of an exported document.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct DialectVersion {
    /// The major version number.
    pub major: u16,
    /// The minor version number.
    pub minor: u16,
}

impl DialectVersion {
    /// DML 1.2, the legacy dialect.
    pub const DML_1_2: DialectVersion = DialectVersion::new(1, 2);
    /// DML 1.4, the current dialect.
    pub const DML_1_4: DialectVersion = DialectVersion::new(1, 4);

    /// Creates a new dialect version.
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for DialectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Error type for parsing dialect version strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid dialect version: '{input}'")]
pub struct ParseVersionError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for DialectVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseVersionError {
            input: s.to_string(),
        };

        let (major, minor) = s.split_once('.').ok_or_else(err)?;
        let major: u16 = major.parse().map_err(|_| err())?;
        let minor: u16 = minor.parse().map_err(|_| err())?;
        Ok(DialectVersion::new(major, minor))
    }
}
