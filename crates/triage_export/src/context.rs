//! Compilation-level metadata attached to the export document.

use triage_common::DialectVersion;

/// The input file and dialect version of the current compilation.
///
/// Both are unknown until the driver reports them. Setting the context again
/// replaces both values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// The primary input file.
    pub input_file: Option<String>,
    /// The dialect version the input file is written in.
    pub dialect: Option<DialectVersion>,
}

impl SessionContext {
    /// Replaces the context; the last call wins.
    pub fn set(&mut self, input_file: Option<String>, dialect: Option<DialectVersion>) {
        self.input_file = input_file;
        self.dialect = dialect;
    }
}
