//! Generate Service - per-artifact orchestration.
//!
//! One call generates one artifact:
//! 1. Ensure the target package (and, for factories, its database parent)
//! 2. Refuse if the artifact file already exists
//! 3. Write the artifact from its template
//! 4. Register the export in the package aggregator (models and services)
//!
//! The conflict check runs before any artifact write; packages ensured on
//! the way are deliberately left in place on failure — provisioning is
//! idempotent and not a mutation worth rolling back.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateProvider},
        provision::{WriteOutcome, create_if_absent, ensure_gitignore, ensure_package},
    },
    domain::{
        ArtifactKind, ArtifactName, ExportEntry,
        index::{DATABASE_PREAMBLE, INDEX_FILE_NAME, MergeOutcome, upsert},
    },
    error::FastscafResult,
};

/// What happened to the package aggregator during a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    /// The export was written into the managed region.
    Updated,
    /// The managed region already carried an identical entry.
    Unchanged,
    /// The aggregator content was not recognized and was left untouched.
    /// Callers should surface this as a warning, not a failure.
    SkippedCustom,
    /// This artifact kind does not register exports.
    NotRegistered,
}

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Path of the written artifact, relative to the generation root.
    pub artifact_path: PathBuf,
    pub index: IndexStatus,
}

/// Orchestrates single-artifact generation through the ports.
pub struct GenerateService {
    templates: Box<dyn TemplateProvider>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    pub fn new(templates: Box<dyn TemplateProvider>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
        }
    }

    /// Generate one artifact under `root`.
    #[instrument(skip_all, fields(kind = %kind, name = identifier))]
    pub fn generate(
        &self,
        root: &Path,
        kind: ArtifactKind,
        identifier: &str,
    ) -> FastscafResult<GenerateReport> {
        let name = ArtifactName::new(identifier);
        let fs = self.filesystem.as_ref();

        // Factories live inside the database package; the parent must exist
        // (with its fixed preamble) before the factories folder does.
        if kind == ArtifactKind::Factory {
            let database_dir = root.join("database");
            ensure_package(fs, &database_dir, Some(DATABASE_PREAMBLE))?;
            ensure_gitignore(fs, &database_dir)?;
        }

        let dir = root.join(kind.directory());
        ensure_package(fs, &dir, None)?;

        let artifact_path = dir.join(kind.file_name(&name));
        if fs.exists(&artifact_path) {
            return Err(ApplicationError::ArtifactExists {
                path: artifact_path,
            }
            .into());
        }

        ensure_gitignore(fs, &dir)?;
        let content = self.templates.artifact(kind, &name);
        if let WriteOutcome::AlreadyExists = create_if_absent(fs, &artifact_path, &content)? {
            return Err(ApplicationError::ArtifactExists {
                path: artifact_path,
            }
            .into());
        }
        info!(path = %artifact_path.display(), "artifact written");

        let index = match kind.export_entry(&name) {
            None => IndexStatus::NotRegistered,
            Some(entry) => self.register_export(&dir, entry)?,
        };

        Ok(GenerateReport {
            artifact_path,
            index,
        })
    }

    /// Upsert `entry` into the aggregator of `dir`.
    fn register_export(&self, dir: &Path, entry: ExportEntry) -> FastscafResult<IndexStatus> {
        let fs = self.filesystem.as_ref();
        let index_path = dir.join(INDEX_FILE_NAME);
        let current = fs.read_to_string(&index_path)?;

        match upsert(&current, None, entry) {
            MergeOutcome::Updated(next) => {
                fs.write_file(&index_path, &next)?;
                info!(path = %index_path.display(), "aggregator updated");
                Ok(IndexStatus::Updated)
            }
            MergeOutcome::Unchanged => Ok(IndexStatus::Unchanged),
            MergeOutcome::SkippedCustom => {
                warn!(
                    path = %index_path.display(),
                    "aggregator has unrecognized content; not updated"
                );
                Ok(IndexStatus::SkippedCustom)
            }
        }
    }
}
