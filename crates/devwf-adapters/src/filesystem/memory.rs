//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use devwf_core::{
    application::{ApplicationError, Filesystem},
    error::DevwfResult,
};

/// In-memory filesystem for tests: files are strings, directories are a set.
///
/// `Clone` shares the underlying store, so a test can keep a handle for
/// assertions while the service owns a boxed copy.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    // Paths whose operations should fail, for error-path tests.
    poisoned: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating parent directories implicitly.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        add_ancestors(&mut inner.directories, &path);
        inner.files.insert(path, content.into());
    }

    /// Seed an (empty) directory.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        add_ancestors(&mut inner.directories, &path);
        inner.directories.insert(path);
    }

    /// Make every operation under `path` fail, for error-path tests.
    pub fn poison(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().poisoned.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().files.get(path).cloned()
    }

    /// All file paths currently stored, sorted.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().files.keys().cloned().collect()
    }

    fn is_poisoned(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.poisoned.iter().any(|p| path.starts_with(p))
    }

    fn fail(path: &Path, reason: &str) -> devwf_core::error::DevwfError {
        ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
        .into()
    }
}

fn add_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
    // The leaf itself may be a file; the caller decides what it is.
    directories.remove(path);
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn copy_dir(&self, src: &Path, dst: &Path) -> DevwfResult<()> {
        if self.is_poisoned(src) || self.is_poisoned(dst) {
            return Err(Self::fail(src, "simulated copy failure"));
        }
        if !self.exists(src) {
            return Err(Self::fail(src, "source does not exist"));
        }

        let (files, dirs): (Vec<_>, Vec<_>) = {
            let inner = self.inner.read().unwrap();
            (
                inner
                    .files
                    .iter()
                    .filter(|(p, _)| p.starts_with(src))
                    .map(|(p, c)| (p.clone(), c.clone()))
                    .collect(),
                inner
                    .directories
                    .iter()
                    .filter(|p| p.starts_with(src))
                    .cloned()
                    .collect(),
            )
        };

        let mut inner = self.inner.write().unwrap();
        inner.directories.insert(dst.to_path_buf());
        for dir in dirs {
            let rel = dir.strip_prefix(src).expect("dir under src");
            inner.directories.insert(dst.join(rel));
        }
        for (file, content) in files {
            let rel = file.strip_prefix(src).expect("file under src");
            inner.files.insert(dst.join(rel), content);
        }
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> DevwfResult<()> {
        if self.is_poisoned(src) || self.is_poisoned(dst) {
            return Err(Self::fail(src, "simulated copy failure"));
        }
        let content = self
            .read_file(src)
            .ok_or_else(|| Self::fail(src, "source file does not exist"))?;
        self.add_file(dst, content);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> DevwfResult<String> {
        if self.is_poisoned(path) {
            return Err(Self::fail(path, "simulated read failure"));
        }
        self.read_file(path)
            .ok_or_else(|| Self::fail(path, "file does not exist"))
    }

    fn write_file(&self, path: &Path, content: &str) -> DevwfResult<()> {
        if self.is_poisoned(path) {
            return Err(Self::fail(path, "simulated write failure"));
        }
        self.add_file(path, content);
        Ok(())
    }
}
