//! The template registry.
//!
//! A closed enum rather than a list of strings: adding a template is a
//! compile-time-checked change, and the help command, the CLI diagnostics,
//! and the scaffold path plan all read from the same four variants.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// A project template bundled with the toolkit.
///
/// The identifier doubles as the name of the template directory under the
/// templates root, so `from_str` / `Display` round-trip exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// React/Next.js frontend over a Python/FastAPI + PostgreSQL backend.
    PythonFastapiPostgres,
    /// React/Next.js frontend over a Node.js + Supabase backend.
    NodejsSupabase,
    /// React/Next.js frontend over a Node.js + MongoDB backend.
    NodejsMongodb,
    /// React Native mobile app, backend agnostic.
    ReactNative,
}

impl Template {
    /// Every template, in the order the help command lists them.
    pub const ALL: [Template; 4] = [
        Template::PythonFastapiPostgres,
        Template::NodejsSupabase,
        Template::NodejsMongodb,
        Template::ReactNative,
    ];

    /// Stable identifier, also the template's directory name.
    pub fn id(&self) -> &'static str {
        match self {
            Self::PythonFastapiPostgres => "python-fastapi-postgres",
            Self::NodejsSupabase => "nodejs-supabase",
            Self::NodejsMongodb => "nodejs-mongodb",
            Self::ReactNative => "react-native",
        }
    }

    /// Directory name under the templates root.
    pub fn dir_name(&self) -> &'static str {
        self.id()
    }

    /// Technology stack summary, shown by `devwf help`.
    pub fn stack(&self) -> &'static str {
        match self {
            Self::PythonFastapiPostgres => "React/Next.js + Python/FastAPI + PostgreSQL",
            Self::NodejsSupabase => "React/Next.js + Node.js + Supabase",
            Self::NodejsMongodb => "React/Next.js + Node.js + MongoDB",
            Self::ReactNative => "React Native (TypeScript) + Backend agnostic",
        }
    }

    /// MCP servers the template is wired for, shown by `devwf help`.
    pub fn mcps(&self) -> &'static str {
        match self {
            Self::PythonFastapiPostgres => "Playwright (global) + Swagger",
            Self::NodejsSupabase => "Playwright (global) + Supabase + Swagger",
            Self::NodejsMongodb => "Playwright (global) + MongoDB + Swagger",
            Self::ReactNative => "Playwright (global) + Backend-specific",
        }
    }

    /// Intended use case, shown by `devwf help`.
    pub fn use_case(&self) -> &'static str {
        match self {
            Self::PythonFastapiPostgres => "API-first backends, data-intensive apps",
            Self::NodejsSupabase => "Rapid prototyping, real-time apps, serverless",
            Self::NodejsMongodb => "Document-heavy apps, flexible schemas",
            Self::ReactNative => "Cross-platform mobile apps (iOS + Android)",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Template {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| DomainError::UnknownTemplate { input: s.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for template in Template::ALL {
            assert_eq!(Template::from_str(template.id()).unwrap(), template);
        }
    }

    #[test]
    fn display_matches_id() {
        assert_eq!(Template::NodejsSupabase.to_string(), "nodejs-supabase");
        assert_eq!(
            Template::PythonFastapiPostgres.to_string(),
            "python-fastapi-postgres"
        );
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = Template::from_str("java-spring").unwrap_err();
        assert!(matches!(err, DomainError::UnknownTemplate { ref input } if input == "java-spring"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        // Identifiers are lowercase by construction; "NodeJS-Supabase" is
        // not a registry member.
        assert!(Template::from_str("NodeJS-Supabase").is_err());
    }

    #[test]
    fn all_contains_each_variant_once() {
        let mut ids: Vec<&str> = Template::ALL.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Template::ALL.len());
    }

    #[test]
    fn every_template_has_help_metadata() {
        for template in Template::ALL {
            assert!(!template.stack().is_empty());
            assert!(!template.mcps().is_empty());
            assert!(!template.use_case().is_empty());
        }
    }
}
