//! The fixed taxonomy of diagnostic categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A coarse grouping of diagnostic codes that hints at a fix strategy.
///
/// The set is closed. Declaration order is the order categories appear in the
/// `error_categories` map of an exported summary.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Malformed source text.
    Syntax,
    /// Operand or value types that do not fit.
    TypeMismatch,
    /// Template instantiation or override resolution problems.
    TemplateResolution,
    /// References to names that are not in scope.
    UndefinedSymbol,
    /// Conflicting declarations of the same name.
    DuplicateDefinition,
    /// Problems locating or ordering imported files.
    ImportError,
    /// Any other error.
    Semantic,
    /// Constructs that differ between dialect versions.
    Compatibility,
    /// Deprecated or experimental features.
    Deprecation,
    /// Any other warning or message.
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 10] = [
        Category::Syntax,
        Category::TypeMismatch,
        Category::TemplateResolution,
        Category::UndefinedSymbol,
        Category::DuplicateDefinition,
        Category::ImportError,
        Category::Semantic,
        Category::Compatibility,
        Category::Deprecation,
        Category::Other,
    ];

    /// Returns the wire name of this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Syntax => "syntax",
            Category::TypeMismatch => "type_mismatch",
            Category::TemplateResolution => "template_resolution",
            Category::UndefinedSymbol => "undefined_symbol",
            Category::DuplicateDefinition => "duplicate_definition",
            Category::ImportError => "import_error",
            Category::Semantic => "semantic",
            Category::Compatibility => "compatibility",
            Category::Deprecation => "deprecation",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
