//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fastscaf-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ArtifactKind, ArtifactName, DbEngine};
use crate::error::FastscafResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `fastscaf_adapters::filesystem::LocalFilesystem` (production)
/// - `fastscaf_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// `write_file` requires the parent directory to exist already — directory
/// provisioning is an explicit step, never a side effect of a write. The
/// memory adapter enforces this so tests catch missing provisioning.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FastscafResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> FastscafResult<()>;

    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> FastscafResult<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the built-in template set.
///
/// Template literal content carries no invariants; it is data the services
/// pass through to the filesystem. Keeping it behind a port keeps the core
/// crate free of Python source strings.
pub trait TemplateProvider: Send + Sync {
    /// Source for one generated artifact file.
    fn artifact(&self, kind: ArtifactKind, name: &ArtifactName) -> String;

    /// `database/database.py` for the chosen engine.
    fn database_module(&self, engine: DbEngine, database: &str) -> String;

    /// Top-level `main.py`.
    fn app_entrypoint(&self) -> String;

    /// `.env` for the chosen engine.
    fn env_file(&self, engine: DbEngine, database: &str) -> String;

    /// `requirements.txt` (base dependencies plus engine extras).
    fn requirements(&self, engine: DbEngine) -> String;
}
