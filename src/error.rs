//! Error types for release note generation.

use thiserror::Error;

/// Main error type for release-notes operations.
#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    // Release metadata errors
    #[error("Invalid release metadata: {0}")]
    InvalidConfig(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    // Version control errors
    #[error("Git operation failed: {0}")]
    GitError(#[from] git2::Error),

    #[error("Git lookup failed: {0}")]
    GitLookup(String),

    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    // Rendering errors
    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

/// Result type alias using ReleaseNotesError
pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

impl ReleaseNotesError {
    /// Create an invalid metadata error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a git lookup error for objects that resolve to the wrong kind
    pub fn git_lookup(msg: impl Into<String>) -> Self {
        Self::GitLookup(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ReleaseNotesError::invalid_config("missing commit");
        assert_eq!(
            err.to_string(),
            "Invalid release metadata: missing commit"
        );

        let err = ReleaseNotesError::git_lookup("vendor.conf is not a file");
        assert_eq!(
            err.to_string(),
            "Git lookup failed: vendor.conf is not a file"
        );
    }

    #[test]
    fn test_from_conversions() {
        let toml_err = toml::from_str::<toml::Table>("= nope");
        assert!(toml_err.is_err());
        let err: ReleaseNotesError = toml_err.unwrap_err().into();
        assert!(matches!(err, ReleaseNotesError::TomlParseError(_)));

        let io_err =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ReleaseNotesError = io_err.into();
        assert!(matches!(err, ReleaseNotesError::IoError(_)));
    }
}
