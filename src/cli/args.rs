//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and check documentation site navigation configs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory (default: docnav.toml)
    #[arg(short = 'C', long, global = true, default_value = docnav::config::DEFAULT_CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Maximum nesting depth of nav entries and sidebar items
    #[arg(long, global = true, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config and print a summary
    #[command(visible_alias = "c")]
    Check,

    /// Print the top navigation bar
    #[command(visible_alias = "n")]
    Nav {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the sidebar shown for a page path
    #[command(visible_alias = "s")]
    Sidebar {
        /// Page path, e.g. /guide/advanced/intro
        #[arg(value_name = "PATH")]
        path: String,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Output options shared by the printing commands.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Print JSON instead of a tree
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,
}
