//! Scaffold Service - the create-project use case.
//!
//! Coordinates one scaffold run end to end:
//! 1. Existence checks (template present, destination free)
//! 2. Primary template copy
//! 3. Best-effort framework copy
//! 4. Conditional settings materialization
//! 5. Conditional manifest rewrite
//!
//! The primary copy is NOT transactional. A mid-copy failure aborts the run
//! and leaves the partial destination directory on disk; the error tells the
//! user which path to clean up. There is deliberately no rollback here.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestRewriter},
    },
    domain::{ScaffoldPlan, ScaffoldRequest},
    error::DevwfResult,
};

/// Outcome of the best-effort framework copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameworkCopy {
    /// Framework directory was found and copied into the project.
    Copied,
    /// No framework directory exists at the toolkit root; nothing to do.
    Absent,
    /// Copy failed; the run continued without it.
    Failed { reason: String },
}

/// What one scaffold run actually did, for the CLI to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub framework: FrameworkCopy,
    pub settings_materialized: bool,
    pub manifest_rewritten: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    manifests: Box<dyn ManifestRewriter>,
}

impl ScaffoldService {
    /// Create a scaffold service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, manifests: Box<dyn ManifestRewriter>) -> Self {
        Self {
            filesystem,
            manifests,
        }
    }

    /// Scaffold a new project.
    ///
    /// `request` is already validated (a `ScaffoldRequest` cannot hold an
    /// invalid name or an unregistered template); `plan` holds the derived
    /// paths for this run.
    #[instrument(
        skip_all,
        fields(
            template = %request.template,
            project = %request.name,
            destination = %plan.project_dir.display(),
        )
    )]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        plan: &ScaffoldPlan,
    ) -> DevwfResult<ScaffoldReport> {
        info!("Scaffolding '{}' from '{}'", request.name, request.template);

        // Source must exist, destination must not. Both checks happen before
        // anything is written.
        if !self.filesystem.exists(&plan.template_dir) {
            return Err(ApplicationError::TemplateNotFound {
                path: plan.template_dir.clone(),
            }
            .into());
        }
        if self.filesystem.exists(&plan.project_dir) {
            return Err(ApplicationError::ProjectExists {
                path: plan.project_dir.clone(),
            }
            .into());
        }

        // Primary copy: fatal on failure, no rollback.
        self.filesystem
            .copy_dir(&plan.template_dir, &plan.project_dir)?;
        info!("Template files copied");

        let framework = self.copy_framework(plan);
        let settings_materialized = self.materialize_settings(plan)?;
        let manifest_rewritten = self.rewrite_manifest(request, plan)?;

        info!("Scaffold completed");
        Ok(ScaffoldReport {
            framework,
            settings_materialized,
            manifest_rewritten,
        })
    }

    /// Copy the shared workflow framework into the project, best-effort.
    ///
    /// The framework is a convenience, not a correctness requirement for the
    /// scaffolded project, so failure degrades to a warning.
    fn copy_framework(&self, plan: &ScaffoldPlan) -> FrameworkCopy {
        if !self.filesystem.exists(&plan.framework_src) {
            debug!(
                path = %plan.framework_src.display(),
                "No workflow framework directory, skipping"
            );
            return FrameworkCopy::Absent;
        }

        match self
            .filesystem
            .copy_dir(&plan.framework_src, &plan.framework_dst)
        {
            Ok(()) => {
                info!("Workflow framework copied");
                FrameworkCopy::Copied
            }
            Err(e) => {
                warn!(error = %e, "Could not copy workflow framework, continuing");
                FrameworkCopy::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Materialize the local settings file from its example, once.
    ///
    /// Skipped when the template ships no example or when an active settings
    /// file already exists, so re-running against the same tree never
    /// overwrites user settings.
    fn materialize_settings(&self, plan: &ScaffoldPlan) -> DevwfResult<bool> {
        if !self.filesystem.exists(&plan.settings_example) {
            return Ok(false);
        }
        if self.filesystem.exists(&plan.settings_file) {
            debug!("Settings file already present, not overwriting");
            return Ok(false);
        }

        self.filesystem
            .copy_file(&plan.settings_example, &plan.settings_file)?;
        info!("Settings file created");
        Ok(true)
    }

    /// Rewrite the manifest `name` field, if the template has a manifest.
    fn rewrite_manifest(
        &self,
        request: &ScaffoldRequest,
        plan: &ScaffoldPlan,
    ) -> DevwfResult<bool> {
        if !self.filesystem.exists(&plan.manifest) {
            return Ok(false);
        }

        let content = self.filesystem.read_to_string(&plan.manifest)?;
        let rewritten = self
            .manifests
            .rewrite_name(&content, &request.name)
            .map_err(|e| ApplicationError::ManifestRewrite {
                path: plan.manifest.clone(),
                reason: e.to_string(),
            })?;
        self.filesystem.write_file(&plan.manifest, &rewritten)?;
        info!("Manifest name updated");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    use crate::{
        application::{
            ManifestError,
            ports::{MockFilesystem, MockManifestRewriter},
        },
        domain::{DomainError, Layout, ProjectName, Template},
        error::DevwfError,
    };

    fn request() -> ScaffoldRequest {
        ScaffoldRequest::new(
            Template::NodejsSupabase,
            ProjectName::new("acme-app").unwrap(),
        )
    }

    fn plan() -> ScaffoldPlan {
        Layout::new("/wf/project-templates", "/wf/.bmad-core", "/work").plan(&request())
    }

    fn no_manifest_rewriter() -> Box<MockManifestRewriter> {
        let mut rewriter = MockManifestRewriter::new();
        rewriter.expect_rewrite_name().never();
        Box::new(rewriter)
    }

    /// Route `exists` by path so each test declares only what is present.
    fn exists_for(fs: &mut MockFilesystem, present: Vec<PathBuf>) {
        fs.expect_exists()
            .returning(move |p| present.iter().any(|q| q.as_path() == p));
    }

    fn copy_ok(fs: &mut MockFilesystem) {
        fs.expect_copy_dir().returning(|_, _| Ok(()));
    }

    fn fs_error(path: &Path) -> DevwfError {
        ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: "permission denied".into(),
        }
        .into()
    }

    #[test]
    fn missing_template_dir_is_fatal_and_copies_nothing() {
        let plan = plan();
        let mut fs = MockFilesystem::new();
        exists_for(&mut fs, vec![]);
        fs.expect_copy_dir().never();

        let service = ScaffoldService::new(Box::new(fs), no_manifest_rewriter());
        let err = service.scaffold(&request(), &plan).unwrap_err();
        assert!(matches!(
            err,
            DevwfError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn existing_destination_is_fatal_and_copies_nothing() {
        let plan = plan();
        let mut fs = MockFilesystem::new();
        exists_for(
            &mut fs,
            vec![plan.template_dir.clone(), plan.project_dir.clone()],
        );
        fs.expect_copy_dir().never();

        let service = ScaffoldService::new(Box::new(fs), no_manifest_rewriter());
        let err = service.scaffold(&request(), &plan).unwrap_err();
        assert!(matches!(
            err,
            DevwfError::Application(ApplicationError::ProjectExists { .. })
        ));
    }

    #[test]
    fn primary_copy_failure_aborts_without_rollback() {
        let plan = plan();
        let mut fs = MockFilesystem::new();
        exists_for(&mut fs, vec![plan.template_dir.clone()]);
        fs.expect_copy_dir()
            .times(1)
            .returning(|_, dst| Err(fs_error(dst)));
        // No cleanup attempt follows a failed primary copy.
        fs.expect_copy_file().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs), no_manifest_rewriter());
        let err = service.scaffold(&request(), &plan).unwrap_err();
        assert!(matches!(
            err,
            DevwfError::Application(ApplicationError::Filesystem { .. })
        ));
    }

    #[test]
    fn framework_copy_failure_is_not_fatal() {
        let plan = plan();
        let template_dir = plan.template_dir.clone();
        let framework_src = plan.framework_src.clone();

        let mut fs = MockFilesystem::new();
        exists_for(
            &mut fs,
            vec![plan.template_dir.clone(), plan.framework_src.clone()],
        );
        fs.expect_copy_dir()
            .withf(move |src, _| src == template_dir)
            .returning(|_, _| Ok(()));
        fs.expect_copy_dir()
            .withf(move |src, _| src == framework_src)
            .returning(|src, _| Err(fs_error(src)));

        let service = ScaffoldService::new(Box::new(fs), no_manifest_rewriter());
        let report = service.scaffold(&request(), &plan).unwrap();
        assert!(matches!(report.framework, FrameworkCopy::Failed { .. }));
        assert!(!report.settings_materialized);
        assert!(!report.manifest_rewritten);
    }

    #[test]
    fn settings_file_is_never_overwritten() {
        let plan = plan();
        let mut fs = MockFilesystem::new();
        // Example AND active file both present: must not copy.
        exists_for(
            &mut fs,
            vec![
                plan.template_dir.clone(),
                plan.settings_example.clone(),
                plan.settings_file.clone(),
            ],
        );
        copy_ok(&mut fs);
        fs.expect_copy_file().never();

        let service = ScaffoldService::new(Box::new(fs), no_manifest_rewriter());
        let report = service.scaffold(&request(), &plan).unwrap();
        assert!(!report.settings_materialized);
    }

    #[test]
    fn settings_example_is_materialized_once() {
        let plan = plan();
        let example = plan.settings_example.clone();
        let target = plan.settings_file.clone();

        let mut fs = MockFilesystem::new();
        exists_for(
            &mut fs,
            vec![plan.template_dir.clone(), plan.settings_example.clone()],
        );
        copy_ok(&mut fs);
        fs.expect_copy_file()
            .times(1)
            .withf(move |src, dst| src == example && dst == target)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), no_manifest_rewriter());
        let report = service.scaffold(&request(), &plan).unwrap();
        assert!(report.settings_materialized);
    }

    #[test]
    fn manifest_is_read_rewritten_and_written_back() {
        let plan = plan();
        let manifest = plan.manifest.clone();

        let mut fs = MockFilesystem::new();
        exists_for(
            &mut fs,
            vec![plan.template_dir.clone(), plan.manifest.clone()],
        );
        copy_ok(&mut fs);
        fs.expect_read_to_string()
            .returning(|_| Ok(r#"{"name":"template"}"#.into()));
        fs.expect_write_file()
            .times(1)
            .withf(move |path, content| path == manifest && content == "rewritten")
            .returning(|_, _| Ok(()));

        let mut rewriter = MockManifestRewriter::new();
        rewriter
            .expect_rewrite_name()
            .withf(|content, name| content.contains("template") && name.as_str() == "acme-app")
            .returning(|_, _| Ok("rewritten".into()));

        let service = ScaffoldService::new(Box::new(fs), Box::new(rewriter));
        let report = service.scaffold(&request(), &plan).unwrap();
        assert!(report.manifest_rewritten);
    }

    #[test]
    fn manifest_rewrite_failure_is_fatal_with_the_manifest_path() {
        let plan = plan();
        let mut fs = MockFilesystem::new();
        exists_for(
            &mut fs,
            vec![plan.template_dir.clone(), plan.manifest.clone()],
        );
        copy_ok(&mut fs);
        fs.expect_read_to_string()
            .returning(|_| Ok("not json".into()));
        fs.expect_write_file().never();

        let mut rewriter = MockManifestRewriter::new();
        rewriter
            .expect_rewrite_name()
            .returning(|_, _| Err(ManifestError("bad JSON".into())));

        let service = ScaffoldService::new(Box::new(fs), Box::new(rewriter));
        let err = service.scaffold(&request(), &plan).unwrap_err();
        match err {
            DevwfError::Application(ApplicationError::ManifestRewrite { path, reason }) => {
                assert_eq!(path, PathBuf::from("/work/acme-app/package.json"));
                assert!(reason.contains("bad JSON"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn request_construction_rejects_bad_names_upstream() {
        // The service never sees invalid names; this documents where that
        // contract is enforced.
        assert!(matches!(
            ProjectName::new("Bad Name"),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }
}
