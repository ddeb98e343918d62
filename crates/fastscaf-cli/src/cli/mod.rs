//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

use fastscaf_core::domain::DbEngine;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fastscaf",
    bin_name = "fastscaf",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} FastAPI project scaffolding",
    long_about = "Fastscaf generates layered FastAPI project boilerplate \
                  and keeps each package's __init__.py exports in sync.",
    after_help = "EXAMPLES:\n\
        \x20 fastscaf project BookStore --postgres\n\
        \x20 fastscaf model Book\n\
        \x20 fastscaf service Book\n\
        \x20 fastscaf completions bash > /usr/share/bash-completion/completions/fastscaf",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the project folder tree and starter files.
    #[command(
        about = "Initialise a new project tree",
        after_help = "EXAMPLES:\n\
            \x20 fastscaf project BookStore --postgres\n\
            \x20 fastscaf project BookStore -m"
    )]
    Project(ProjectArgs),

    /// Generate a SQLAlchemy model (registered in models/__init__.py).
    #[command(about = "Generate a model")]
    Model(NameArg),

    /// Generate a Pydantic schema.
    #[command(about = "Generate a schema")]
    Schema(NameArg),

    /// Generate a FastAPI route module.
    #[command(about = "Generate a route")]
    Route(NameArg),

    /// Generate a service class (registered in service/__init__.py).
    #[command(about = "Generate a service")]
    Service(NameArg),

    /// Generate a utility module.
    #[command(about = "Generate a util")]
    Util(NameArg),

    /// Generate a factory-boy factory under database/factories.
    #[command(about = "Generate a factory")]
    Factory(NameArg),

    /// Generate a script stub.
    #[command(about = "Generate a script")]
    Script(NameArg),

    /// Generate a pytest API test.
    #[command(about = "Generate a test")]
    Test(NameArg),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fastscaf completions bash > ~/.local/share/bash-completion/completions/fastscaf\n\
            \x20 fastscaf completions zsh  > ~/.zfunc/_fastscaf\n\
            \x20 fastscaf completions fish > ~/.config/fish/completions/fastscaf.fish"
    )]
    Completions(CompletionsArgs),
}

// ── project ───────────────────────────────────────────────────────────────────

/// Arguments for `fastscaf project`.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("engine").required(true).multiple(false)))]
pub struct ProjectArgs {
    /// Project name in CamelCase (e.g. BookStore).
    #[arg(value_name = "NAME", help = "Project name in CamelCase")]
    pub name: String,

    /// Use the MySQL database template.
    #[arg(short = 'm', long = "mysql", group = "engine", help = "Use the MySQL database template")]
    pub mysql: bool,

    /// Use the PostgreSQL database template.
    #[arg(
        short = 'p',
        long = "postgres",
        group = "engine",
        help = "Use the PostgreSQL database template"
    )]
    pub postgres: bool,
}

impl ProjectArgs {
    /// The selected engine; exactly one flag is guaranteed by the arg group.
    pub fn engine(&self) -> DbEngine {
        if self.mysql {
            DbEngine::Mysql
        } else {
            DbEngine::Postgres
        }
    }
}

// ── artifact commands ─────────────────────────────────────────────────────────

/// The single identifier argument every artifact command takes.
#[derive(Debug, Args)]
pub struct NameArg {
    /// Artifact name in CamelCase (e.g. UserProfile).
    #[arg(value_name = "NAME", help = "Artifact name in CamelCase")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fastscaf completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_project_with_postgres() {
        let cli = Cli::parse_from(["fastscaf", "project", "BookStore", "--postgres"]);
        match cli.command {
            Commands::Project(args) => {
                assert_eq!(args.name, "BookStore");
                assert_eq!(args.engine(), DbEngine::Postgres);
            }
            other => panic!("expected Project, got {other:?}"),
        }
    }

    #[test]
    fn parse_project_with_short_mysql_flag() {
        let cli = Cli::parse_from(["fastscaf", "project", "BookStore", "-m"]);
        match cli.command {
            Commands::Project(args) => assert_eq!(args.engine(), DbEngine::Mysql),
            other => panic!("expected Project, got {other:?}"),
        }
    }

    #[test]
    fn project_requires_exactly_one_engine_flag() {
        assert!(Cli::try_parse_from(["fastscaf", "project", "BookStore"]).is_err());
        assert!(Cli::try_parse_from(["fastscaf", "project", "BookStore", "-m", "-p"]).is_err());
    }

    #[test]
    fn parse_model_command() {
        let cli = Cli::parse_from(["fastscaf", "model", "UserProfile"]);
        match cli.command {
            Commands::Model(args) => assert_eq!(args.name, "UserProfile"),
            other => panic!("expected Model, got {other:?}"),
        }
    }

    #[test]
    fn global_root_flag_is_available_after_subcommand() {
        let cli = Cli::parse_from(["fastscaf", "model", "User", "--root", "/tmp/proj"]);
        assert_eq!(cli.global.root.as_deref(), Some(std::path::Path::new("/tmp/proj")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["fastscaf", "--quiet", "--verbose", "model", "X"]);
        assert!(result.is_err());
    }
}
