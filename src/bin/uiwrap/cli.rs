//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// uiwrap - wrap UI interface definitions into generated header/implementation pairs
#[derive(Parser)]
#[command(name = "uiwrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Clone)]
pub struct GlobalArgs {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to Wrap.toml (defaults to searching upward from the current directory)
    #[arg(long, global = true, env = "UIWRAP_MANIFEST")]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every wrap_ui invocation and show the declared rules
    Configure(ConfigureArgs),

    /// List every generated file published by the configuration run
    Files(FilesArgs),

    /// Show the declared rules in build order
    Order(OrderArgs),
}

#[derive(Args)]
pub struct ConfigureArgs {
    /// Emit the configuration result as JSON
    #[arg(long)]
    pub plan: bool,
}

#[derive(Args)]
pub struct FilesArgs {
    /// Print the list on one line, space separated
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct OrderArgs {
    /// Show each rule's dependencies
    #[arg(long)]
    pub depends: bool,
}
