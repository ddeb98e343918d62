//! Filesystem provisioning primitives.
//!
//! Three small building blocks the services compose: create-if-absent
//! writes, package provisioning (directory + seeded aggregator), and
//! per-directory `.gitignore` emission. All of them are idempotent — calling
//! any of them twice is a no-op the second time.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::index::{INDEX_FILE_NAME, IndexFile};
use crate::error::FastscafResult;

/// `.gitignore` content dropped into every generated package.
const GITIGNORE_CONTENT: &str = "/__pycache__\n";

/// Result of a [`create_if_absent`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist; exactly one write happened.
    Created,
    /// The file already existed; nothing was written.
    AlreadyExists,
}

/// Write `content` to `path` unless the file already exists.
///
/// Never overwrites. The parent directory must already exist; a missing
/// parent surfaces as a filesystem error from the port.
pub fn create_if_absent(
    fs: &dyn Filesystem,
    path: &Path,
    content: &str,
) -> FastscafResult<WriteOutcome> {
    if fs.exists(path) {
        return Ok(WriteOutcome::AlreadyExists);
    }
    fs.write_file(path, content)?;
    debug!(path = %path.display(), "file created");
    Ok(WriteOutcome::Created)
}

/// Ensure `dir` exists as a package: the directory itself (with parents)
/// plus an aggregator seeded with an empty managed region.
///
/// A freshly provisioned directory is therefore always already `Managed`.
/// `fixed_preamble` is written first when given (the `database` package).
pub fn ensure_package(
    fs: &dyn Filesystem,
    dir: &Path,
    fixed_preamble: Option<&str>,
) -> FastscafResult<()> {
    fs.create_dir_all(dir)?;
    let index_path = dir.join(INDEX_FILE_NAME);
    if !fs.exists(&index_path) {
        fs.write_file(&index_path, &IndexFile::seeded(fixed_preamble).render())?;
        debug!(path = %index_path.display(), "aggregator seeded");
    }
    Ok(())
}

/// Drop a `.gitignore` for `__pycache__` into `dir` if absent.
pub fn ensure_gitignore(fs: &dyn Filesystem, dir: &Path) -> FastscafResult<WriteOutcome> {
    create_if_absent(fs, &dir.join(".gitignore"), GITIGNORE_CONTENT)
}
