//! Core domain layer for devwf.
//!
//! Pure business logic with no I/O: the template registry, project-name
//! rules, and path planning. Anything that touches the filesystem goes
//! through the ports defined in the application layer.

pub mod error;
pub mod layout;
pub mod project;
pub mod template;

pub use error::DomainError;
pub use layout::{
    FRAMEWORK_DIR_NAME, Layout, MANIFEST_FILE, SETTINGS_DIR_NAME, SETTINGS_EXAMPLE_FILE,
    SETTINGS_FILE, ScaffoldPlan, TEMPLATES_DIR_NAME,
};
pub use project::{ProjectName, ScaffoldRequest};
pub use template::Template;
