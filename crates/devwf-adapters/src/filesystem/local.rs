//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;

use devwf_core::{application::Filesystem, error::DevwfResult};

/// Production filesystem implementation.
///
/// The recursive copy walks the source tree in-process (no shelling out to
/// `cp`/`xcopy`), which keeps behavior identical across platforms: hidden
/// files are copied, directory structure is preserved, symlinks are not
/// followed, and the first I/O error aborts the walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy_dir(&self, src: &Path, dst: &Path) -> DevwfResult<()> {
        for entry in WalkDir::new(src).follow_links(false) {
            let entry = entry.map_err(|e| {
                let at = e.path().unwrap_or(src).to_path_buf();
                map_io_error(&at, e.into_io_error(), "walk directory")
            })?;

            // Every walked path is under `src`; strip_prefix cannot fail here.
            let rel = entry
                .path()
                .strip_prefix(src)
                .expect("walked entry outside copy source");
            let target = dst.join(rel);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, Some(e), "create directory"))?;
            } else {
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| map_io_error(parent, Some(e), "create directory"))?;
                }
                trace!(from = %entry.path().display(), to = %target.display(), "copy");
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(entry.path(), Some(e), "copy file"))?;
            }
        }
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> DevwfResult<()> {
        std::fs::copy(src, dst)
            .map(|_| ())
            .map_err(|e| map_io_error(src, Some(e), "copy file"))
    }

    fn read_to_string(&self, path: &Path) -> DevwfResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, Some(e), "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> DevwfResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, Some(e), "write file"))
    }
}

fn map_io_error(
    path: &Path,
    e: Option<io::Error>,
    operation: &str,
) -> devwf_core::error::DevwfError {
    use devwf_core::application::ApplicationError;

    let reason = match e {
        Some(e) => format!("Failed to {operation}: {e}"),
        None => format!("Failed to {operation}"),
    };
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
