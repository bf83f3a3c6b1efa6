//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tenantry - retrofit multi-tenancy onto a generated application tree
#[derive(Parser, Debug)]
#[command(name = "tn")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the tenant entity for a generated project
    Init(InitArgs),

    /// Make an entity tenant aware
    Entity(EntityArgs),

    /// List entities and their tenantised status
    Ls(LsArgs),
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the tenant entity (e.g. Company)
    #[arg(short, long)]
    pub tenant_name: String,
}

/// Arguments for the entity command
#[derive(Args, Debug)]
pub struct EntityArgs {
    /// Entity to make tenant aware
    pub name: String,

    /// Override the configured client framework (angular, react)
    #[arg(short, long)]
    pub framework: Option<String>,

    /// Override the active locales (comma-separated)
    #[arg(short, long)]
    pub languages: Option<String>,

    /// Request regeneration of non-client layers afterwards
    #[arg(long)]
    pub regenerate: bool,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: LsOutput,
}

/// List output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// Table format
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
