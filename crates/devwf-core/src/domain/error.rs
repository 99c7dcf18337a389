//! Domain layer errors: input validation failures.

use thiserror::Error;

use crate::domain::template::Template;
use crate::error::ErrorCategory;

/// Violations of the domain rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested template is not in the registry.
    #[error("Unknown template '{input}'")]
    UnknownTemplate { input: String },

    /// The project name fails the character rules.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },
}

impl DomainError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplate { input } => {
                let mut out = vec![
                    format!("'{input}' is not a known template"),
                    "Available templates:".into(),
                ];
                out.extend(Template::ALL.iter().map(|t| format!("  - {t}")));
                out.push("Example: devwf create-project nodejs-supabase my-awesome-app".into());
                out
            }
            Self::InvalidProjectName { .. } => vec![
                "Project names may contain only lowercase letters, digits, and hyphens".into(),
                "Examples: my-app, acme-app, app2".into(),
            ],
        }
    }

    /// Both variants are bad input.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
