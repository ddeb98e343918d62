//! Implementation of the `fastscaf project` command.
//!
//! Responsibility: validate the project name, call the core project service,
//! and display the per-item report. No provisioning logic lives here.

use tracing::{info, instrument};

use fastscaf_adapters::{BuiltinTemplates, LocalFilesystem};
use fastscaf_core::application::ProjectService;
use fastscaf_core::domain::validate_project_name;

use crate::{
    cli::{GlobalArgs, ProjectArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `fastscaf project` command.
///
/// Dispatch sequence:
/// 1. Validate the project name (before anything touches the filesystem)
/// 2. Resolve the generation root
/// 3. Initialize the tree via `ProjectService`
/// 4. Report created and skipped items
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: ProjectArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = validate_project_name(&args.name).map_err(|e| CliError::Core(e.into()))?;
    let engine = args.engine();
    let root = super::resolve_root(&global, &config)?;

    output.info(&format!(
        "Creating project in {} ({engine} database)",
        root.display()
    ))?;
    info!(root = %root.display(), engine = %engine, "project init started");

    let service = ProjectService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(LocalFilesystem::new()),
    );
    let report = service.init(&root, &name, engine).map_err(CliError::Core)?;

    for item in &report.created {
        output.success(&format!("{item} created"))?;
    }
    for item in &report.skipped {
        output.warning(&format!("{item} already exists"))?;
    }

    output.success(&format!(
        "Project {} ({}) is ready",
        name.camel(),
        name.slug()
    ))?;

    Ok(())
}
