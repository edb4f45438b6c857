//! Implementation of the `triage explain` command.

use triage_diagnostics::{classify, Category, DiagnosticKind, SuggestionEngine, Suggestions};

use crate::pipeline::load_settings;
use crate::{ExplainArgs, GlobalArgs};

/// Runs the `triage explain` command.
pub fn run(args: &ExplainArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_settings(global)?;
    let engine = SuggestionEngine::new(config.export.doc_base_url);
    let kind = DiagnosticKind::from(args.kind);
    let category = classify(Some(&args.code), kind);
    let suggestions = engine.suggest(Some(&args.code), category, None);
    print!("{}", render_explanation(&args.code, kind, category, &suggestions));
    Ok(0)
}

fn render_explanation(
    code: &str,
    kind: DiagnosticKind,
    category: Category,
    suggestions: &Suggestions,
) -> String {
    let mut out = format!(
        "{code} ({kind}, severity {})\ncategory: {category}\n",
        kind.severity()
    );
    if suggestions.fixes.is_empty() {
        out.push_str("suggestions: none\n");
    } else {
        out.push_str("suggestions:\n");
        for fix in &suggestions.fixes {
            out.push_str(&format!("  - {fix}\n"));
        }
    }
    if let Some(url) = &suggestions.documentation_url {
        out.push_str(&format!("documentation: {url}\n"));
    }
    out
}
