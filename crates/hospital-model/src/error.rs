//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::PipelineConfig`].
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A line range string such as `2-362` could not be parsed.
    #[error("invalid line range '{value}': {reason}")]
    InvalidRange { value: String, reason: String },

    /// A layout descriptor is inconsistent.
    #[error("invalid layout '{layout}': {reason}")]
    InvalidLayout { layout: String, reason: String },

    /// Two layouts claim the same input lines.
    #[error("layouts '{first}' and '{second}' overlap")]
    OverlappingLayouts { first: String, second: String },

    /// No layouts were configured.
    #[error("no row layouts configured")]
    NoLayouts,
}

impl ConfigError {
    pub(crate) fn layout(layout: &str, reason: impl Into<String>) -> Self {
        Self::InvalidLayout {
            layout: layout.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::OverlappingLayouts {
            first: "range-a".to_string(),
            second: "range-b".to_string(),
        };
        assert_eq!(err.to_string(), "layouts 'range-a' and 'range-b' overlap");
    }

    #[test]
    fn test_layout_helper() {
        let err = ConfigError::layout("range-a", "min_columns must be positive");
        assert_eq!(
            err.to_string(),
            "invalid layout 'range-a': min_columns must be positive"
        );
    }
}
