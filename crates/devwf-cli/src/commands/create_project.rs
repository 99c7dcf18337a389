//! Implementation of `devwf create-project`.
//!
//! Responsibility: parse the two positional strings into domain types,
//! resolve the layout from configuration, call the core scaffold service,
//! and render the result. No business logic lives here.

use std::str::FromStr;

use tracing::{debug, instrument};

use devwf_adapters::{JsonManifestRewriter, LocalFilesystem};
use devwf_core::{
    application::{FrameworkCopy, ScaffoldReport, ScaffoldService},
    domain::{Layout, ProjectName, ScaffoldRequest, Template},
    error::DevwfError,
};

use crate::{
    cli::{CreateProjectArgs, GlobalArgs},
    config::AppConfig,
    error::{CliResult, IntoCli as _},
    output::OutputManager,
};

/// Execute `devwf create-project`.
#[instrument(skip_all, fields(template = %args.template, project = %args.name))]
pub fn execute(
    args: CreateProjectArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate inputs into domain types.
    let template = Template::from_str(&args.template).map_err(DevwfError::from)?;
    let name = ProjectName::new(args.name.as_str()).map_err(DevwfError::from)?;
    let request = ScaffoldRequest::new(template, name);

    // 2. Resolve paths against the CWD.
    let cwd = std::env::current_dir().with_cli_context(|| "cannot determine current directory")?;
    let layout = Layout::resolved(
        &cwd,
        &config.paths.templates_dir,
        &config.paths.framework_dir,
        &config.paths.output_dir,
    );
    let plan = layout.plan(&request);

    debug!(
        template_dir = %plan.template_dir.display(),
        project_dir = %plan.project_dir.display(),
        "Paths resolved"
    );

    // 3. Scaffold.
    output.header(&format!("Creating project '{}'", request.name))?;
    output.print(&format!("Template: {}", request.template))?;
    output.print("")?;

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(JsonManifestRewriter::new()),
    );
    let report = service.scaffold(&request, &plan)?;

    // 4. Render the report and next steps.
    render_report(&report, &output)?;

    output.print("")?;
    output.success(&format!("Project '{}' created!", request.name))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", plan.project_dir.display()))?;
        output.print("  npm install  (or: pip install -r backend/requirements.txt for Python)")?;
        output.print("  # Configure .env files")?;
        output.print("  npm run dev")?;
        output.print("")?;
        output.print("Read the README.md for detailed setup instructions.")?;
    }

    Ok(())
}

/// One line per scaffold step, so the conditional and best-effort steps are
/// visible to the user.
fn render_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    output.success("Template files copied")?;

    match &report.framework {
        FrameworkCopy::Copied => output.success("Workflow framework copied")?,
        FrameworkCopy::Absent => {}
        FrameworkCopy::Failed { reason } => {
            output.warning(&format!("Could not copy workflow framework: {reason}"))?
        }
    }

    if report.settings_materialized {
        output.success("Settings file created (.claude/settings.local.json)")?;
    }

    if report.manifest_rewritten {
        output.success("package.json updated")?;
    }

    Ok(())
}
