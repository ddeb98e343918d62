//! Project Service - project-tree initialization.
//!
//! Lays down the folder set of a fresh layered FastAPI project plus its
//! starter files. Everything that already exists is reported and left
//! alone; re-running `project` against a half-initialized tree fills in
//! only what is missing.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateProvider},
        provision::{WriteOutcome, create_if_absent, ensure_gitignore, ensure_package},
    },
    domain::{DbEngine, ProjectName, index::DATABASE_PREAMBLE},
    error::FastscafResult,
};

/// Folders every project starts with. `utils` and `tests` appear on demand
/// when their first artifact is generated.
pub const PROJECT_FOLDERS: &[&str] = &[
    "models", "schemas", "routes", "service", "database", "storage", "scripts",
];

/// What `init` did, item by item, for CLI display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectReport {
    /// Display labels of folders/files that were created.
    pub created: Vec<String>,
    /// Display labels of folders/files that already existed.
    pub skipped: Vec<String>,
}

impl ProjectReport {
    fn record(&mut self, label: impl Into<String>, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Created => self.created.push(label.into()),
            WriteOutcome::AlreadyExists => self.skipped.push(label.into()),
        }
    }
}

/// Orchestrates project initialization through the ports.
pub struct ProjectService {
    templates: Box<dyn TemplateProvider>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectService {
    pub fn new(templates: Box<dyn TemplateProvider>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            templates,
            filesystem,
        }
    }

    /// Initialize the project tree under `root`.
    ///
    /// The name must already be validated; the default database name is the
    /// project slug.
    #[instrument(skip_all, fields(project = %name.camel(), engine = %engine))]
    pub fn init(
        &self,
        root: &Path,
        name: &ProjectName,
        engine: DbEngine,
    ) -> FastscafResult<ProjectReport> {
        let fs = self.filesystem.as_ref();
        let mut report = ProjectReport::default();

        for folder in PROJECT_FOLDERS {
            let dir = root.join(folder);
            if fs.exists(&dir) {
                report.skipped.push((*folder).to_owned());
                continue;
            }
            let preamble = (*folder == "database").then_some(DATABASE_PREAMBLE);
            ensure_package(fs, &dir, preamble)?;
            ensure_gitignore(fs, &dir)?;
            report.created.push((*folder).to_owned());
        }

        let database = name.slug();
        report.record(
            "database/database.py",
            create_if_absent(
                fs,
                &root.join("database").join("database.py"),
                &self.templates.database_module(engine, database),
            )?,
        );
        report.record(
            "main.py",
            create_if_absent(fs, &root.join("main.py"), &self.templates.app_entrypoint())?,
        );
        report.record(
            ".env",
            create_if_absent(
                fs,
                &root.join(".env"),
                &self.templates.env_file(engine, database),
            )?,
        );
        report.record(
            "requirements.txt",
            create_if_absent(
                fs,
                &root.join("requirements.txt"),
                &self.templates.requirements(engine),
            )?,
        );

        // Root .gitignore is ensured even on re-runs.
        fs.create_dir_all(root)?;
        ensure_gitignore(fs, root)?;

        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "project initialized"
        );
        Ok(report)
    }
}
