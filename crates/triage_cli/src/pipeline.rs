//! Shared helpers for CLI commands: configuration lookup and primary-stream rendering.

use triage_config::{load_config, load_config_file, TriageConfig};
use triage_diagnostics::RawDiagnostic;

use crate::GlobalArgs;

/// Loads the configuration named by `--config`, or `triage.toml` in the
/// current directory, or the defaults.
pub fn load_settings(global: &GlobalArgs) -> Result<TriageConfig, Box<dyn std::error::Error>> {
    let config = match &global.config {
        Some(path) => load_config_file(path)?,
        None => load_config(&std::env::current_dir()?)?,
    };
    Ok(config)
}

/// Renders a raw diagnostic as one human-readable line.
///
/// Produces output like:
/// ```text
/// a.dml:12:5: error EUNDEF: undefined symbol 'foo'
/// ```
pub fn render_primary(raw: &RawDiagnostic) -> String {
    let location = raw
        .location
        .as_ref()
        .and_then(|loc| loc.render())
        .map(|loc| format!("{loc}: "))
        .unwrap_or_default();
    let code = raw
        .code
        .as_deref()
        .map(|code| format!(" {code}"))
        .unwrap_or_default();
    let message = raw.message.as_deref().unwrap_or("");
    format!("{location}{}{code}: {message}", raw.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_source::SourceLocation;

    #[test]
    fn render_with_location() {
        let raw = RawDiagnostic::error("EUNDEF", "undefined symbol 'foo'")
            .at(SourceLocation::new("a.dml", 12, 5));
        assert_eq!(
            render_primary(&raw),
            "a.dml:12:5: error EUNDEF: undefined symbol 'foo'"
        );
    }

    #[test]
    fn render_without_location() {
        let raw = RawDiagnostic::internal_error("ICE", "unexpected node");
        assert_eq!(render_primary(&raw), "internal_error ICE: unexpected node");
    }

    #[test]
    fn render_without_code_or_message() {
        let raw: RawDiagnostic = serde_json::from_str(r#"{"kind": "warning"}"#).unwrap();
        assert_eq!(render_primary(&raw), "warning: ");
    }

    #[test]
    fn explicit_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalArgs {
            quiet: true,
            config: Some(dir.path().join("absent.toml")),
        };
        assert!(load_settings(&global).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triage.toml");
        std::fs::write(&path, "[export]\ngenerator = \"dmlc-ci\"\n").unwrap();
        let global = GlobalArgs {
            quiet: true,
            config: Some(path),
        };
        assert_eq!(load_settings(&global).unwrap().export.generator, "dmlc-ci");
    }
}
