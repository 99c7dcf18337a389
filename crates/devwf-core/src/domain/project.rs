//! Project name rules and the per-invocation scaffold request.

use std::fmt;
use std::str::FromStr;

use crate::domain::{error::DomainError, template::Template};

/// A validated project name.
///
/// Construction is the validation: a `ProjectName` always matches
/// `^[a-z0-9-]+$`, so downstream code never re-checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse a candidate name, rejecting anything outside the allowed
    /// character class.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name must not be empty".into(),
            });
        }

        if let Some(bad) = name
            .chars()
            .find(|&c| !matches!(c, 'a'..='z' | '0'..='9' | '-'))
        {
            return Err(DomainError::InvalidProjectName {
                reason: format!(
                    "character '{bad}' is not allowed; use lowercase letters, digits, and hyphens"
                ),
                name,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// One invocation's worth of input: which template, what name.
///
/// Built from command-line input, validated on construction of its parts,
/// and discarded when the run completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub template: Template,
    pub name: ProjectName,
}

impl ScaffoldRequest {
    pub fn new(template: Template, name: ProjectName) -> Self {
        Self { template, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["acme-app", "my-awesome-app", "app123", "a", "2048"] {
            assert!(ProjectName::new(name).is_ok(), "rejected: {name}");
        }
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            ProjectName::new(""),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn uppercase_is_invalid() {
        assert!(ProjectName::new("MyApp").is_err());
    }

    #[test]
    fn underscores_and_dots_are_invalid() {
        assert!(ProjectName::new("my_app").is_err());
        assert!(ProjectName::new("my.app").is_err());
    }

    #[test]
    fn path_separators_are_invalid() {
        assert!(ProjectName::new("a/b").is_err());
        assert!(ProjectName::new("a\\b").is_err());
    }

    #[test]
    fn whitespace_is_invalid() {
        assert!(ProjectName::new("my app").is_err());
    }

    #[test]
    fn rejection_names_the_offending_character() {
        let err = ProjectName::new("my_app").unwrap_err();
        match err {
            DomainError::InvalidProjectName { reason, .. } => assert!(reason.contains('_')),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_str_matches_new() {
        let parsed: ProjectName = "acme-app".parse().unwrap();
        assert_eq!(parsed.as_str(), "acme-app");
    }
}
