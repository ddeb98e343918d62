//! Command handlers.

use std::path::PathBuf;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

pub mod completions;
pub mod generate;
pub mod project;

/// Resolve the generation root: `--root` flag, then config, then the
/// current working directory.
pub(crate) fn resolve_root(global: &GlobalArgs, config: &AppConfig) -> CliResult<PathBuf> {
    if let Some(root) = &global.root {
        return Ok(root.clone());
    }
    if let Some(root) = &config.defaults.root {
        return Ok(root.clone());
    }
    std::env::current_dir().map_err(|e| crate::error::CliError::IoError {
        message: "failed to resolve the current directory".into(),
        source: e,
    })
}
