//! Implementation of the artifact-generation commands.
//!
//! `model`, `schema`, `route`, `service`, `util`, `factory`, `script` and
//! `test` all share this handler — they differ only by [`ArtifactKind`].
//! Responsibility: wire adapters into the core service and display results.
//! No generation logic lives here.

use tracing::{debug, instrument};

use fastscaf_adapters::{BuiltinTemplates, LocalFilesystem};
use fastscaf_core::application::{GenerateService, IndexStatus};
use fastscaf_core::domain::ArtifactKind;

use crate::{
    cli::{GlobalArgs, NameArg},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute one artifact-generation command.
#[instrument(skip_all, fields(kind = %kind, name = %args.name))]
pub fn execute(
    kind: ArtifactKind,
    args: NameArg,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let root = super::resolve_root(&global, &config)?;
    debug!(root = %root.display(), "generation root resolved");

    let service = GenerateService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(LocalFilesystem::new()),
    );

    let report = service
        .generate(&root, kind, &args.name)
        .map_err(CliError::Core)?;

    output.success(&format!(
        "{} {} created ({})",
        capitalize(kind.as_str()),
        args.name,
        report.artifact_path.display()
    ))?;

    match report.index {
        IndexStatus::Updated => {
            output.print(&format!("  export registered in {}/__init__.py", kind.directory()))?;
        }
        IndexStatus::SkippedCustom => {
            output.warning(&format!(
                "{}/__init__.py has unrecognized content and was not updated",
                kind.directory()
            ))?;
        }
        IndexStatus::Unchanged | IndexStatus::NotRegistered => {}
    }

    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
