//! Path planning: where templates live and where a new project lands.
//!
//! Nothing here touches the disk. A [`Layout`] holds the three resolved
//! roots; [`Layout::plan`] derives every path one scaffold run needs from
//! fixed relative offsets.

use std::path::{Path, PathBuf};

use crate::domain::project::ScaffoldRequest;

/// Default directory of bundled templates, relative to the toolkit root.
pub const TEMPLATES_DIR_NAME: &str = "project-templates";
/// Shared workflow-framework directory copied into every new project.
pub const FRAMEWORK_DIR_NAME: &str = ".bmad-core";
/// Directory holding the local settings file inside a project.
pub const SETTINGS_DIR_NAME: &str = ".claude";
/// Example settings file shipped inside the templates.
pub const SETTINGS_EXAMPLE_FILE: &str = "settings.local.json.example";
/// Active local settings file, materialized from the example.
pub const SETTINGS_FILE: &str = "settings.local.json";
/// Package manifest whose `name` field gets rewritten.
pub const MANIFEST_FILE: &str = "package.json";

/// Resolved source and destination roots for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    templates_root: PathBuf,
    framework_dir: PathBuf,
    output_root: PathBuf,
}

impl Layout {
    /// Build a layout from already-absolute (or deliberately relative) roots.
    pub fn new(
        templates_root: impl Into<PathBuf>,
        framework_dir: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            templates_root: templates_root.into(),
            framework_dir: framework_dir.into(),
            output_root: output_root.into(),
        }
    }

    /// Resolve configured roots against a base directory (the CWD in
    /// practice). Absolute configured paths win; relative ones are joined.
    pub fn resolved(
        base: &Path,
        templates_dir: &Path,
        framework_dir: &Path,
        output_dir: &Path,
    ) -> Self {
        let join = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base.join(p)
            }
        };
        Self {
            templates_root: join(templates_dir),
            framework_dir: join(framework_dir),
            output_root: join(output_dir),
        }
    }

    pub fn templates_root(&self) -> &Path {
        &self.templates_root
    }

    pub fn framework_dir(&self) -> &Path {
        &self.framework_dir
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Derive every path one scaffold run touches.
    pub fn plan(&self, request: &ScaffoldRequest) -> ScaffoldPlan {
        let project_dir = self.output_root.join(request.name.as_str());
        let settings_dir = project_dir.join(SETTINGS_DIR_NAME);

        ScaffoldPlan {
            template_dir: self.templates_root.join(request.template.dir_name()),
            framework_src: self.framework_dir.clone(),
            framework_dst: project_dir.join(FRAMEWORK_DIR_NAME),
            settings_example: settings_dir.join(SETTINGS_EXAMPLE_FILE),
            settings_file: settings_dir.join(SETTINGS_FILE),
            manifest: project_dir.join(MANIFEST_FILE),
            project_dir,
        }
    }
}

/// The concrete paths for one scaffold run, derived once and then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    /// Source template directory.
    pub template_dir: PathBuf,
    /// Destination project directory.
    pub project_dir: PathBuf,
    /// Shared framework directory (source).
    pub framework_src: PathBuf,
    /// Framework destination inside the new project.
    pub framework_dst: PathBuf,
    /// Settings example inside the new project (shipped by the template).
    pub settings_example: PathBuf,
    /// Active settings file to materialize.
    pub settings_file: PathBuf,
    /// Package manifest at the project root.
    pub manifest: PathBuf,
}
