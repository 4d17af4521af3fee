//! Theme errors.

use std::path::PathBuf;

/// Error returned when building, loading or using a [`Theme`](super::Theme).
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// An alias references a style that doesn't exist.
    #[error("style '{from}' aliases non-existent style '{to}'")]
    UnresolvedAlias { from: String, to: String },
    /// A cycle was detected in alias resolution.
    #[error("cycle detected in style aliases: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
    /// A style was requested that the theme doesn't define.
    #[error("unknown style '{name}'")]
    UnknownStyle { name: String },
    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read theme file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file extension doesn't name a supported theme format.
    #[error("unsupported theme file {}: expected one of {}", .path.display(), super::THEME_EXTENSIONS.join(", "))]
    UnsupportedExtension { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_alias_error_display() {
        let err = ThemeError::UnresolvedAlias {
            from: "orphan".to_string(),
            to: "missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("orphan"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_cycle_detected_error_display() {
        let err = ThemeError::CycleDetected {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("cycle"));
        assert!(msg.contains("a -> b -> a"));
    }

    #[test]
    fn test_unsupported_extension_lists_formats() {
        let err = ThemeError::UnsupportedExtension {
            path: PathBuf::from("theme.toml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("theme.toml"));
        assert!(msg.contains(".yaml"));
    }
}
