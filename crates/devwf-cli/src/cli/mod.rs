//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here; the template and name
//! strings are parsed into domain types inside the command handlers so the
//! diagnostics stay in one error taxonomy.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "devwf",
    bin_name = "devwf",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Development workflow templates",
    long_about = "devwf scaffolds new projects from the bundled development \
                  workflow templates and wires them up for immediate use.",
    after_help = "EXAMPLES:\n\
        \x20 devwf help\n\
        \x20 devwf create-project nodejs-supabase my-awesome-app\n\
        \x20 devwf completions bash > /usr/share/bash-completion/completions/devwf",
    arg_required_else_help = true,
    subcommand_required    = true,
    disable_help_subcommand = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the template catalog and usage documentation.
    ///
    /// This replaces clap's built-in help subcommand: it documents the
    /// toolkit (templates, quick start, docs pointers), not the flag
    /// surface. `--help` still prints the generated flag reference.
    #[command(about = "Show available templates and commands")]
    Help,

    /// Create a new project from a template.
    #[command(
        name = "create-project",
        visible_alias = "new",
        about = "Create a new project from a template",
        after_help = "TEMPLATES:\n\
            \x20 python-fastapi-postgres\n\
            \x20 nodejs-supabase\n\
            \x20 nodejs-mongodb\n\
            \x20 react-native\n\n\
            EXAMPLES:\n\
            \x20 devwf create-project nodejs-supabase my-awesome-app\n\
            \x20 devwf create-project react-native acme-mobile"
    )]
    CreateProject(CreateProjectArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 devwf completions bash > ~/.local/share/bash-completion/completions/devwf\n\
            \x20 devwf completions zsh  > ~/.zfunc/_devwf\n\
            \x20 devwf completions fish > ~/.config/fish/completions/devwf.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create-project ────────────────────────────────────────────────────────────

/// Arguments for `devwf create-project`.
#[derive(Debug, Args)]
pub struct CreateProjectArgs {
    /// Template identifier (see `devwf help` for the catalog).
    #[arg(value_name = "TEMPLATE", help = "Template to scaffold from")]
    pub template: String,

    /// Name of the project to create; lowercase letters, digits, and
    /// hyphens only.
    #[arg(value_name = "PROJECT_NAME", help = "Name of the new project")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `devwf completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
