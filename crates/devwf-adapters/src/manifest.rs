//! Package-manifest rewriting.
//!
//! Implements the [`ManifestRewriter`] port for `package.json`: replace the
//! root `name` member, keep everything else byte-equivalent up to
//! re-serialization. The crate enables serde_json's `preserve_order` feature
//! so the rewrite never reorders the user's keys.

use serde_json::Value;

use devwf_core::{
    application::{ManifestError, ManifestRewriter},
    domain::ProjectName,
};

/// Rewrites `package.json` content with 2-space indentation and a trailing
/// newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonManifestRewriter;

impl JsonManifestRewriter {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestRewriter for JsonManifestRewriter {
    fn rewrite_name(&self, content: &str, name: &ProjectName) -> Result<String, ManifestError> {
        let mut manifest: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError(format!("invalid JSON: {e}")))?;

        let object = manifest
            .as_object_mut()
            .ok_or_else(|| ManifestError("manifest root is not a JSON object".into()))?;
        object.insert("name".into(), Value::String(name.as_str().into()));

        // to_string_pretty indents with 2 spaces, matching how these
        // manifests are conventionally formatted.
        let mut out = serde_json::to_string_pretty(&manifest)
            .map_err(|e| ManifestError(format!("serialization failed: {e}")))?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(content: &str, name: &str) -> Result<String, ManifestError> {
        JsonManifestRewriter::new().rewrite_name(content, &ProjectName::new(name).unwrap())
    }

    #[test]
    fn replaces_name_and_preserves_other_fields() {
        let out = rewrite(r#"{"name": "old", "version": "1.0.0"}"#, "my-app").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "my-app");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn preserves_member_order() {
        let out = rewrite(
            r#"{"version": "2.0.0", "name": "old", "scripts": {"dev": "next dev"}}"#,
            "acme-app",
        )
        .unwrap();
        let version = out.find("\"version\"").unwrap();
        let name = out.find("\"name\"").unwrap();
        let scripts = out.find("\"scripts\"").unwrap();
        assert!(version < name && name < scripts, "order changed:\n{out}");
    }

    #[test]
    fn adds_name_when_absent() {
        let out = rewrite(r#"{"private": true}"#, "acme-app").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "acme-app");
        assert_eq!(value["private"], true);
    }

    #[test]
    fn nested_structures_survive_untouched() {
        let input = r#"{
  "name": "template",
  "dependencies": {"next": "^14.0.0", "react": "^18.0.0"},
  "workspaces": ["frontend", "backend"]
}"#;
        let out = rewrite(input, "acme-app").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["dependencies"]["next"], "^14.0.0");
        assert_eq!(value["workspaces"][1], "backend");
    }

    #[test]
    fn output_is_two_space_indented_with_trailing_newline() {
        let out = rewrite(r#"{"name":"x"}"#, "y").unwrap();
        assert!(out.starts_with("{\n  \"name\""));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(rewrite("not json at all", "x").is_err());
    }

    #[test]
    fn non_object_root_is_an_error() {
        let err = rewrite(r#"["an", "array"]"#, "x").unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }
}
