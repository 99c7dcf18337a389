//! Application layer for devwf.
//!
//! - **Service**: the scaffold use case ([`ScaffoldService`])
//! - **Ports**: trait boundaries toward infrastructure
//! - **Errors**: orchestration failures (validation lives in `domain`)

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ManifestError};
pub use ports::{Filesystem, ManifestRewriter};
pub use services::{FrameworkCopy, ScaffoldReport, ScaffoldService};
