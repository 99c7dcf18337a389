//! Driven (output) ports - implemented by infrastructure.
//!
//! The application needs two things from the outside world: a filesystem
//! and a way to rewrite a package manifest. `devwf-adapters` provides the
//! production implementations; tests use mocks or the in-memory filesystem.

use std::path::Path;

use crate::application::error::ManifestError;
use crate::domain::ProjectName;
use crate::error::DevwfResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `devwf_adapters::filesystem::LocalFilesystem` (production)
/// - `devwf_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check whether a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Recursively copy a directory tree, hidden files included.
    ///
    /// Creates `dst` (which must not exist beforehand for the primary copy;
    /// the service checks that) and preserves the directory structure. Not
    /// transactional: on failure, whatever was copied so far stays on disk.
    fn copy_dir(&self, src: &Path, dst: &Path) -> DevwfResult<()>;

    /// Copy a single file byte-for-byte, without inspecting its content.
    fn copy_file(&self, src: &Path, dst: &Path) -> DevwfResult<()>;

    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> DevwfResult<String>;

    /// Write a string to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> DevwfResult<()>;
}

/// Port for the manifest `name` rewrite.
///
/// Pure text-to-text so the JSON dependency stays in the adapters crate and
/// the service composes with any `Filesystem`.
///
/// Implemented by `devwf_adapters::manifest::JsonManifestRewriter`.
#[cfg_attr(test, mockall::automock)]
pub trait ManifestRewriter: Send + Sync {
    /// Return `content` with its root `name` member set to `name`, all
    /// other members (and their order) untouched.
    fn rewrite_name(&self, content: &str, name: &ProjectName) -> Result<String, ManifestError>;
}
