//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use fastscaf_core::{
    application::{ApplicationError, ports::Filesystem},
    error::FastscafResult,
};

/// In-memory filesystem for testing.
///
/// Enforces the same rule the OS does: writing a file whose parent directory
/// has not been created fails. Service tests rely on that to catch missing
/// provisioning steps.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> FastscafResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> FastscafResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> FastscafResult<String> {
        let inner = self.inner.read().map_err(|_| poisoned(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn poisoned(path: &Path) -> fastscaf_core::error::FastscafError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("missing/file.txt");

        assert!(fs.write_file(path, "x").is_err());

        fs.create_dir_all(Path::new("missing")).unwrap();
        assert!(fs.write_file(path, "x").is_ok());
        assert_eq!(fs.read_file(path).as_deref(), Some("x"));
    }

    #[test]
    fn create_dir_all_registers_parents() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b/c")).unwrap();

        assert!(fs.exists(Path::new("a")));
        assert!(fs.exists(Path::new("a/b")));
        assert!(fs.exists(Path::new("a/b/c")));
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let fs = MemoryFilesystem::new();
        assert!(fs.read_to_string(Path::new("nope.txt")).is_err());
    }
}
