//! Command-line surface of `modcraft`.
//!
//! Scaffold subcommands take no positional arguments. Every name is asked
//! for interactively, or read line by line from stdin when it is not a
//! terminal.

use clap::{Args, Parser, Subcommand, ValueEnum};

use modcraft_core::domain::ArtifactKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

const AFTER_HELP: &str = "EXAMPLES:
  modcraft module
  modcraft model
  printf 'Billing\\n\\nInvoice\\n' | modcraft controller
  MODCRAFT_ENVIRONMENT__MODE=development modcraft module --no-refresh";

/// Module scaffolding for modular monoliths.
///
/// Creates modules and the classes inside them (controllers, models,
/// events, jobs, migrations and more) and, in development mode, wires new
/// modules into the autoload map and the provider list.
#[derive(Debug, Parser)]
#[command(
    name = "modcraft",
    version,
    author,
    after_help = AFTER_HELP,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new module and register it.
    Module(ModuleArgs),
    /// Create a controller inside a module.
    Controller,
    /// Create a model, optionally with migration, factory, seeder and controller.
    Model,
    /// Create an event, optionally with a listener.
    Event,
    /// Create a queued job.
    Job,
    /// Create a table migration.
    Migration,
    /// Create a form request.
    HttpRequest,
    /// Create a JSON resource.
    HttpResource,
    /// Create a domain collection.
    DomainCollection,

    /// Show every artifact kind with its location and stub.
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Write a configuration file holding the defaults.
    Init(InitArgs),

    /// Print a shell completion script.
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

impl Commands {
    /// `None` for the subcommands that do not scaffold anything.
    pub fn artifact_kind(&self) -> Option<ArtifactKind> {
        let kind = match self {
            Self::Module(_) => ArtifactKind::Module,
            Self::Controller => ArtifactKind::Controller,
            Self::Model => ArtifactKind::Model,
            Self::Event => ArtifactKind::Event,
            Self::Job => ArtifactKind::Job,
            Self::Migration => ArtifactKind::Migration,
            Self::HttpRequest => ArtifactKind::HttpRequest,
            Self::HttpResource => ArtifactKind::HttpResource,
            Self::DomainCollection => ArtifactKind::DomainCollection,
            Self::List(_) | Self::Init(_) | Self::Completions(_) | Self::Config(_) => return None,
        };
        Some(kind)
    }
}

#[derive(Debug, Args)]
pub struct ModuleArgs {
    /// Skip the refresh command after wiring the module.
    #[arg(long)]
    pub no_refresh: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ListFormat {
    /// Aligned columns.
    #[default]
    Table,
    /// Kind names only.
    List,
    Json,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the per-user file instead of `./modcraft.toml`.
    #[arg(long)]
    pub global: bool,

    /// Replace a file that already exists.
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value by dotted key, e.g. `paths.modules_dir`.
    Get { key: String },
    /// Print the whole configuration as TOML.
    List,
    /// Print the file that `modcraft init` would write or `--config` names.
    Path,
}
