//! Errors from reading and checking `triage.toml`.

use std::path::PathBuf;

/// A `triage.toml` that could not be read, parsed, or accepted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the expected shape.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A text setting is empty or whitespace.
    #[error("export.{field} must not be empty")]
    EmptySetting {
        /// The key within `[export]`.
        field: &'static str,
    },

    /// `doc_base_url` does not use the `http` or `https` scheme.
    #[error("export.doc_base_url must be an http(s) URL, got '{url}'")]
    UnsupportedUrlScheme {
        /// The rejected URL.
        url: String,
    },

    /// `indent` is wider than the exporter accepts.
    #[error("export.indent must be at most {max}, got {indent}")]
    IndentTooWide {
        /// The configured width.
        indent: usize,
        /// The largest accepted width.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_file() {
        let err = ConfigError::Read {
            path: PathBuf::from("/etc/triage.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "failed to read /etc/triage.toml: file not found");
    }

    #[test]
    fn url_scheme_error_shows_url() {
        let err = ConfigError::UnsupportedUrlScheme {
            url: "file:///docs".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "export.doc_base_url must be an http(s) URL, got 'file:///docs'"
        );
    }

    #[test]
    fn indent_error_shows_limit() {
        let err = ConfigError::IndentTooWide { indent: 12, max: 8 };
        assert_eq!(err.to_string(), "export.indent must be at most 8, got 12");
    }

    #[test]
    fn parse_error_converts_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("key = ").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().starts_with("failed to parse configuration:"));
    }
}
