//! Rule-table classification of diagnostic codes into categories.
//!
//! Rules are evaluated top to bottom and the first category with a matching
//! code pattern wins. Adding a code to the taxonomy means adding a matcher to
//! [`CATEGORY_RULES`]; the evaluation logic never changes.

use crate::category::Category;
use crate::severity::DiagnosticKind;

/// A pattern tested against a diagnostic code.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CodeMatcher {
    /// The code is exactly this string.
    Exact(&'static str),
    /// The code starts with this string.
    Prefix(&'static str),
    /// The code contains this string anywhere.
    Contains(&'static str),
}

impl CodeMatcher {
    /// Returns `true` if `code` matches this pattern.
    pub fn matches(self, code: &str) -> bool {
        match self {
            CodeMatcher::Exact(s) => code == s,
            CodeMatcher::Prefix(s) => code.starts_with(s),
            CodeMatcher::Contains(s) => code.contains(s),
        }
    }
}

/// Returns `true` if any of `matchers` accepts `code`.
pub(crate) fn any_matches(matchers: &[CodeMatcher], code: &str) -> bool {
    matchers.iter().any(|m| m.matches(code))
}

/// One row of the classification table.
#[derive(Clone, Copy, Debug)]
pub struct CategoryRule {
    /// The category assigned when a matcher accepts the code.
    pub category: Category,
    /// The code patterns belonging to this category.
    pub matchers: &'static [CodeMatcher],
}

use self::CodeMatcher::{Contains, Prefix};

/// The classification table, in priority order.
///
/// A code that matches several rows resolves to the first one, so the order
/// of this table determines category counts and must stay stable.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Syntax,
        matchers: &[Prefix("ESYNTAX"), Contains("PARSE")],
    },
    CategoryRule {
        category: Category::TypeMismatch,
        matchers: &[
            Contains("TYPE"),
            Contains("ECAST"),
            Contains("EBITSLICE"),
            Contains("EINT"),
        ],
    },
    CategoryRule {
        category: Category::TemplateResolution,
        matchers: &[
            Contains("TEMPLATE"),
            Contains("EAMBINH"),
            Contains("ECYCLICTEMPLATE"),
            Contains("EABSTEMPLATE"),
            Contains("ETMETH"),
        ],
    },
    CategoryRule {
        category: Category::UndefinedSymbol,
        matchers: &[
            Contains("EUNDEF"),
            Contains("EREF"),
            Contains("ENVAR"),
            Contains("ENOSYM"),
        ],
    },
    CategoryRule {
        category: Category::DuplicateDefinition,
        matchers: &[Contains("EDUP"), Contains("EREDEF"), Contains("EAMBIG")],
    },
    CategoryRule {
        category: Category::ImportError,
        matchers: &[Contains("IMPORT"), Contains("ECYCLICIMP")],
    },
    CategoryRule {
        category: Category::Compatibility,
        matchers: &[Contains("ECOMPAT"), Contains("EDML12")],
    },
    CategoryRule {
        category: Category::Deprecation,
        matchers: &[Contains("WDEPRECATED"), Contains("WEXPERIMENTAL")],
    },
];

/// Classifies a diagnostic into exactly one [`Category`].
///
/// Codes that match no rule fall back to [`Category::Semantic`] for errors and
/// [`Category::Other`] for every other kind. A missing code matches no rule.
pub fn classify(code: Option<&str>, kind: DiagnosticKind) -> Category {
    let code = code.unwrap_or_default();
    CATEGORY_RULES
        .iter()
        .find(|rule| any_matches(rule.matchers, code))
        .map_or_else(
            || match kind {
                DiagnosticKind::Error => Category::Semantic,
                _ => Category::Other,
            },
            |rule| rule.category,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(code: &str) -> Category {
        classify(Some(code), DiagnosticKind::Error)
    }

    #[test]
    fn matcher_kinds() {
        assert!(CodeMatcher::Exact("EAMBINH").matches("EAMBINH"));
        assert!(!CodeMatcher::Exact("EAMBINH").matches("EAMBINHX"));
        assert!(CodeMatcher::Prefix("ESYNTAX").matches("ESYNTAX"));
        assert!(!CodeMatcher::Prefix("SYNTAX").matches("ESYNTAX"));
        assert!(CodeMatcher::Contains("TYPE").matches("EBTYPE"));
    }

    #[test]
    fn one_code_per_category() {
        assert_eq!(error("ESYNTAX"), Category::Syntax);
        assert_eq!(error("ECAST"), Category::TypeMismatch);
        assert_eq!(error("EAMBINH"), Category::TemplateResolution);
        assert_eq!(error("EUNDEF"), Category::UndefinedSymbol);
        assert_eq!(error("EDUP"), Category::DuplicateDefinition);
        assert_eq!(error("EIMPORT"), Category::ImportError);
        assert_eq!(error("ECOMPAT"), Category::Compatibility);
        assert_eq!(
            classify(Some("WDEPRECATED"), DiagnosticKind::Warning),
            Category::Deprecation
        );
    }

    #[test]
    fn priority_order_resolves_overlaps() {
        // Matches both the type and template families; type wins.
        assert_eq!(error("ETYPETEMPLATE"), Category::TypeMismatch);
        // Cyclic templates are template problems, not import cycles.
        assert_eq!(error("ECYCLICTEMPLATE"), Category::TemplateResolution);
        // PARSE anywhere is syntax, even with an UNDEF fragment later.
        assert_eq!(error("EPARSEUNDEF"), Category::Syntax);
    }

    #[test]
    fn unmatched_error_is_semantic() {
        assert_eq!(error("EBADFMT"), Category::Semantic);
    }

    #[test]
    fn unmatched_non_errors_are_other() {
        assert_eq!(classify(Some("WUNUSED"), DiagnosticKind::Warning), Category::Other);
        assert_eq!(classify(Some("INFO"), DiagnosticKind::Info), Category::Other);
        assert_eq!(
            classify(Some("ICE"), DiagnosticKind::InternalError),
            Category::Other
        );
    }

    #[test]
    fn missing_code_falls_back() {
        assert_eq!(classify(None, DiagnosticKind::Error), Category::Semantic);
        assert_eq!(classify(None, DiagnosticKind::Warning), Category::Other);
    }

    #[test]
    fn warnings_follow_the_same_table() {
        assert_eq!(
            classify(Some("WTYPEMISMATCH"), DiagnosticKind::Warning),
            Category::TypeMismatch
        );
    }

    #[test]
    fn deterministic() {
        for code in ["EUNDEF", "EREF", "WEXPERIMENTAL", "EXYZ"] {
            assert_eq!(error(code), error(code));
        }
    }

    #[test]
    fn table_covers_priority_order() {
        let order: Vec<Category> = CATEGORY_RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Syntax,
                Category::TypeMismatch,
                Category::TemplateResolution,
                Category::UndefinedSymbol,
                Category::DuplicateDefinition,
                Category::ImportError,
                Category::Compatibility,
                Category::Deprecation,
            ]
        );
    }
}
