//! Fix suggestions and documentation links for diagnostic codes.
//!
//! Suggestions come from two constant tables. [`CODE_RULES`] is keyed by exact
//! codes or code families and is searched first; the first matching row wins.
//! When no row matches, the generic hints for the diagnostic's category in
//! [`CATEGORY_HINTS`] are used instead. Documentation links resolve the same
//! way. Nothing here can fail: an unknown code simply yields no suggestions.

use crate::category::Category;
use crate::classify::{any_matches, CodeMatcher};
use serde_json::{Map, Value};

/// Root of the published DML language documentation.
pub const DEFAULT_DOC_BASE_URL: &str = "https://intel.github.io/device-modeling-language";

/// A row of the code-specific suggestion table.
#[derive(Clone, Copy, Debug)]
pub struct CodeRule {
    /// The codes this row applies to.
    pub matchers: &'static [CodeMatcher],
    /// Suggestions, most useful first.
    pub suggestions: &'static [&'static str],
    /// Documentation page, relative to the base URL.
    pub doc_path: Option<&'static str>,
}

/// A row of the category-level fallback table.
#[derive(Clone, Copy, Debug)]
pub struct CategoryHints {
    /// The category these hints apply to.
    pub category: Category,
    /// Generic suggestions for any code in the category.
    pub suggestions: &'static [&'static str],
    /// Documentation page, relative to the base URL.
    pub doc_path: Option<&'static str>,
}

use self::CodeMatcher::{Contains, Exact};

/// Code-specific suggestions, in priority order.
pub const CODE_RULES: &[CodeRule] = &[
    CodeRule {
        matchers: &[Exact("EAMBINH")],
        suggestions: &[
            "Add an 'is <template>' statement to specify template precedence",
            "Check template inheritance order in the object hierarchy",
        ],
        doc_path: Some("language.html#resolution-of-overrides"),
    },
    CodeRule {
        matchers: &[Contains("EUNDEF"), Contains("ENOSYM")],
        suggestions: &[
            "Check if the symbol is defined in imported files",
            "Verify the symbol name spelling",
            "Add necessary import statements if missing",
        ],
        doc_path: None,
    },
    CodeRule {
        matchers: &[Contains("TYPE"), Contains("ECAST")],
        suggestions: &[
            "Check if type conversion is needed",
            "Verify the types of all operands match expected types",
            "Consider explicit type casting if appropriate",
        ],
        doc_path: None,
    },
    CodeRule {
        matchers: &[Contains("CYCLIC")],
        suggestions: &[
            "Review import chain to break circular dependency",
            "Consider refactoring shared code into a separate file",
        ],
        doc_path: None,
    },
    CodeRule {
        matchers: &[Contains("EDUP"), Contains("EREDEF")],
        suggestions: &[
            "Remove or rename one of the duplicate definitions",
            "Check if definitions are unintentionally duplicated across templates",
        ],
        doc_path: None,
    },
    CodeRule {
        matchers: &[Contains("SYNTAX")],
        suggestions: &[
            "Check for missing semicolons, braces, or parentheses",
            "Verify DML syntax matches the version specified (1.2 vs 1.4)",
        ],
        doc_path: None,
    },
];

/// Generic suggestions per category. `semantic` and `other` have no row.
pub const CATEGORY_HINTS: &[CategoryHints] = &[
    CategoryHints {
        category: Category::Syntax,
        suggestions: &["Check for missing semicolons, braces, or parentheses"],
        doc_path: Some("language.html#syntax"),
    },
    CategoryHints {
        category: Category::TypeMismatch,
        suggestions: &["Verify the types of all operands match expected types"],
        doc_path: Some("language.html#types"),
    },
    CategoryHints {
        category: Category::TemplateResolution,
        suggestions: &[
            "Check template inheritance order in the object hierarchy",
            "Verify that every abstract method or parameter of the template is provided",
        ],
        doc_path: Some("language.html#templates"),
    },
    CategoryHints {
        category: Category::UndefinedSymbol,
        suggestions: &[
            "Check if the symbol is defined in imported files",
            "Verify the symbol name spelling",
        ],
        doc_path: Some("language.html#scoping-and-name-resolution"),
    },
    CategoryHints {
        category: Category::DuplicateDefinition,
        suggestions: &["Remove or rename one of the duplicate definitions"],
        doc_path: None,
    },
    CategoryHints {
        category: Category::ImportError,
        suggestions: &[
            "Check that the imported file exists on the import path",
            "Verify the import path spelling",
        ],
        doc_path: Some("language.html#modules-and-imports"),
    },
    CategoryHints {
        category: Category::Compatibility,
        suggestions: &[
            "Verify DML syntax matches the version specified (1.2 vs 1.4)",
            "Consult the DML 1.2 to 1.4 porting guide",
        ],
        doc_path: Some("port-dml.html"),
    },
    CategoryHints {
        category: Category::Deprecation,
        suggestions: &["Replace the deprecated construct with its documented successor"],
        doc_path: None,
    },
];

/// The enrichment derived for one diagnostic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Suggestions {
    /// Actionable hints, in order, without duplicates.
    pub fixes: Vec<String>,
    /// A link to the relevant documentation section.
    pub documentation_url: Option<String>,
}

impl Suggestions {
    fn push(&mut self, hint: impl Into<String>) {
        let hint = hint.into();
        if !self.fixes.contains(&hint) {
            self.fixes.push(hint);
        }
    }
}

/// Looks up fix suggestions and documentation links for diagnostic codes.
#[derive(Clone, Debug)]
pub struct SuggestionEngine {
    doc_base_url: String,
}

impl SuggestionEngine {
    /// Creates an engine linking to documentation under `doc_base_url`.
    pub fn new(doc_base_url: impl Into<String>) -> Self {
        let mut doc_base_url = doc_base_url.into();
        while doc_base_url.ends_with('/') {
            doc_base_url.pop();
        }
        Self { doc_base_url }
    }

    /// Returns the documentation root links are built from.
    pub fn doc_base_url(&self) -> &str {
        &self.doc_base_url
    }

    /// Derives suggestions for a diagnostic with the given code and category.
    ///
    /// Code-specific rows are tried first; the category row is the fallback.
    /// A string `method` field in the context adds a pointer to that method.
    pub fn suggest(
        &self,
        code: Option<&str>,
        category: Category,
        context: Option<&Map<String, Value>>,
    ) -> Suggestions {
        let code_rule = code.and_then(|code| {
            CODE_RULES
                .iter()
                .find(|rule| any_matches(rule.matchers, code))
        });
        let category_hints = CATEGORY_HINTS.iter().find(|h| h.category == category);

        let mut out = Suggestions::default();
        let hints = code_rule
            .map(|rule| rule.suggestions)
            .or_else(|| category_hints.map(|h| h.suggestions))
            .unwrap_or_default();
        for hint in hints {
            out.push(*hint);
        }

        if let Some(method) = context
            .and_then(|ctx| ctx.get("method"))
            .and_then(Value::as_str)
        {
            out.push(format!("Review the definition of method '{method}'"));
        }

        out.documentation_url = code_rule
            .and_then(|rule| rule.doc_path)
            .or_else(|| category_hints.and_then(|h| h.doc_path))
            .map(|path| format!("{}/{path}", self.doc_base_url));
        out
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DOC_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::severity::DiagnosticKind;

    fn suggest(code: &str) -> Suggestions {
        let category = classify(Some(code), DiagnosticKind::Error);
        SuggestionEngine::default().suggest(Some(code), category, None)
    }

    #[test]
    fn undefined_symbol_mentions_imports_and_spelling() {
        let s = suggest("EUNDEF");
        assert_eq!(s.fixes.len(), 3);
        assert!(s.fixes.iter().any(|f| f.contains("import")));
        assert!(s.fixes.iter().any(|f| f.contains("spelling")));
        assert_eq!(
            s.documentation_url.as_deref(),
            Some("https://intel.github.io/device-modeling-language/language.html#scoping-and-name-resolution")
        );
    }

    #[test]
    fn code_specific_doc_link_wins() {
        let s = suggest("EAMBINH");
        assert_eq!(
            s.fixes[0],
            "Add an 'is <template>' statement to specify template precedence"
        );
        assert!(s
            .documentation_url
            .unwrap()
            .ends_with("#resolution-of-overrides"));
    }

    #[test]
    fn category_fallback_without_code_rule() {
        // EREF is an undefined_symbol code with no row of its own.
        let s = suggest("EREF");
        assert_eq!(
            s.fixes,
            vec![
                "Check if the symbol is defined in imported files",
                "Verify the symbol name spelling",
            ]
        );
        assert!(s.documentation_url.is_some());
    }

    #[test]
    fn cyclic_template_uses_code_rows_before_category() {
        let s = suggest("ECYCLICTEMPLATE");
        assert_eq!(s.fixes[0], "Review import chain to break circular dependency");
        assert!(s.documentation_url.unwrap().ends_with("#templates"));
    }

    #[test]
    fn unknown_code_yields_nothing() {
        let s = suggest("EBADFMT");
        assert!(s.fixes.is_empty());
        assert!(s.documentation_url.is_none());
    }

    #[test]
    fn missing_code_uses_category_only() {
        let engine = SuggestionEngine::default();
        let s = engine.suggest(None, Category::Semantic, None);
        assert_eq!(s, Suggestions::default());
    }

    #[test]
    fn method_context_adds_hint_once() {
        let engine = SuggestionEngine::default();
        let ctx = serde_json::json!({"method": "read"});
        let ctx = ctx.as_object();
        let s = engine.suggest(Some("ETMETH"), Category::TemplateResolution, ctx);
        assert_eq!(
            s.fixes.last().map(String::as_str),
            Some("Review the definition of method 'read'")
        );
        let unique: std::collections::HashSet<_> = s.fixes.iter().collect();
        assert_eq!(unique.len(), s.fixes.len());
    }

    #[test]
    fn non_string_method_is_ignored() {
        let engine = SuggestionEngine::default();
        let ctx = serde_json::json!({"method": 3});
        let s = engine.suggest(Some("EBADFMT"), Category::Semantic, ctx.as_object());
        assert!(s.fixes.is_empty());
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let engine = SuggestionEngine::new("https://docs.example/dml/");
        assert_eq!(engine.doc_base_url(), "https://docs.example/dml");
        let s = engine.suggest(Some("ESYNTAX"), Category::Syntax, None);
        assert_eq!(
            s.documentation_url.as_deref(),
            Some("https://docs.example/dml/language.html#syntax")
        );
    }

    #[test]
    fn tables_have_no_duplicate_hints() {
        for rule in CODE_RULES {
            let mut seen = std::collections::HashSet::new();
            assert!(rule.suggestions.iter().all(|s| seen.insert(*s)));
        }
        for hints in CATEGORY_HINTS {
            assert!(!matches!(hints.category, Category::Semantic | Category::Other));
        }
    }
}
