//! `devwf help` — the template catalog and usage documentation.
//!
//! Distinct from `--help`: that one documents flags; this one documents the
//! toolkit. The template section is driven off the registry so the catalog
//! can never drift from what `create-project` accepts.

use devwf_core::domain::Template;

use crate::{error::CliResult, output::OutputManager};

const RULE: &str = "──────────────────────────────────────────────────────────────";

/// Print the documentation block. Exit code 0 always.
pub fn execute(output: OutputManager) -> CliResult<()> {
    output.header("devwf — Development Workflow Templates")?;
    output.print("")?;

    output.header("Available templates:")?;
    output.print("")?;
    for (index, template) in Template::ALL.iter().enumerate() {
        output.print(&format!("  {}. {}", index + 1, template))?;
        output.print(&format!("     Stack: {}", template.stack()))?;
        output.print(&format!("     MCPs:  {}", template.mcps()))?;
        output.print(&format!("     Use:   {}", template.use_case()))?;
        output.print("")?;
    }

    output.print(RULE)?;
    output.header("Quick start:")?;
    output.print("")?;
    output.print("  # Create a new project")?;
    output.print("  devwf create-project <template> <project-name>")?;
    output.print("")?;
    output.print("  Example:")?;
    output.print("  devwf create-project nodejs-supabase my-awesome-app")?;
    output.print("")?;

    output.print(RULE)?;
    output.header("Documentation:")?;
    output.print("")?;
    output.print("  Master guide:     docs/templates/MASTER-TEMPLATE-GUIDE.md")?;
    output.print("  MCP integration:  docs/templates/MCP-INTEGRATION-GUIDE.md")?;
    output.print("  Workflow method:  .bmad-core/user-guide.md")?;
    output.print("")?;

    output.print(RULE)?;
    output.header("Workflow:")?;
    output.print("")?;
    output.print("  1. Choose a template for your stack")?;
    output.print("  2. Create a project: devwf create-project <template> <name>")?;
    output.print("  3. Follow the template README for setup")?;
    output.print("  4. Use the bundled workflow agents for development")?;
    output.print("  5. Leverage MCPs for enhanced productivity")?;
    output.print("")?;
    output.print("Need help? Check the template-specific README files.")?;

    Ok(())
}
