//! Application layer errors: scaffold orchestration failures.
//!
//! Input validation errors are `DomainError`; everything here is about the
//! world not cooperating (missing directories, collisions, I/O).

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Failures while executing the scaffold use case.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The registry entry has no backing directory on disk.
    #[error("Template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    /// The destination already exists; nothing was copied or modified.
    #[error("Project already exists at {}", .path.display())]
    ProjectExists { path: PathBuf },

    /// A filesystem operation failed.
    ///
    /// For the primary template copy this is fatal and the destination may
    /// hold a partial copy; the path tells the user what to clean up.
    #[error("Filesystem error at {}: {reason}", .path.display())]
    Filesystem { path: PathBuf, reason: String },

    /// The package manifest could not be parsed or rewritten.
    #[error("Failed to rewrite manifest {}: {reason}", .path.display())]
    ManifestRewrite { path: PathBuf, reason: String },
}

/// Error returned by the [`crate::application::ManifestRewriter`] port.
///
/// Carries only the reason; the service attaches the manifest path when it
/// promotes this into [`ApplicationError::ManifestRewrite`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ManifestError(pub String);

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("Expected a template directory at: {}", path.display()),
                "Run devwf from the toolkit root, or point [paths].templates_dir at it".into(),
                "See 'devwf help' for the list of bundled templates".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check file permissions and available disk space".into(),
                "A partially-copied project directory may remain; remove it before retrying"
                    .into(),
            ],
            Self::ManifestRewrite { path, .. } => vec![
                format!("Check that {} is valid JSON with an object root", path.display()),
            ],
        }
    }

    /// Error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } | Self::ManifestRewrite { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_exists_is_a_user_error() {
        let err = ApplicationError::ProjectExists {
            path: PathBuf::from("../acme-app"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn filesystem_failure_mentions_partial_copy_cleanup() {
        let err = ApplicationError::Filesystem {
            path: PathBuf::from("../acme-app"),
            reason: "disk full".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("partially")));
    }
}
