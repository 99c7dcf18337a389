//! Command handlers. One module per subcommand, no business logic.

pub mod completions;
pub mod create_project;
pub mod help;
