//! Devwf Core - domain and application layers.
//!
//! This crate provides the template registry, input validation, path
//! planning, and the scaffold use case for the devwf toolkit, following
//! hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           devwf-cli (CLI)               │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Service            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, ManifestRewriter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     devwf-adapters (Infrastructure)     │
//! │ (LocalFilesystem, JsonManifestRewriter) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (`domain`) is pure: the template registry, the
//! `ProjectName` rules, and the path plan never touch the filesystem.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use devwf_core::{
//!     application::ScaffoldService,
//!     domain::{Layout, ProjectName, ScaffoldRequest, Template},
//! };
//!
//! # fn adapters() -> (Box<dyn devwf_core::application::Filesystem>, Box<dyn devwf_core::application::ManifestRewriter>) { unimplemented!() }
//! let request = ScaffoldRequest::new(
//!     Template::NodejsSupabase,
//!     ProjectName::new("acme-app").unwrap(),
//! );
//! let layout = Layout::resolved(Path::new("."), Path::new("project-templates"), Path::new(".bmad-core"), Path::new(".."));
//!
//! let (filesystem, manifests) = adapters();
//! let service = ScaffoldService::new(filesystem, manifests);
//! let report = service.scaffold(&request, &layout.plan(&request)).unwrap();
//! ```

// Domain layer (pure logic, no I/O)
pub mod domain;

// Application layer (use case orchestration)
pub mod application;

// Root error type
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Filesystem, FrameworkCopy, ManifestRewriter, ScaffoldReport, ScaffoldService,
    };
    pub use crate::domain::{Layout, ProjectName, ScaffoldPlan, ScaffoldRequest, Template};
    pub use crate::error::{DevwfError, DevwfResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
