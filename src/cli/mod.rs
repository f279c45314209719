//! Command-line interface module.

mod args;
pub mod check;
pub mod report;
pub mod tree;

pub use args::{Cli, Commands, OutputArgs};

use anyhow::{Context, Result};
use docnav::config::{self, ConfigError, FieldPath, NormalizeOptions, find_config_file};
use docnav::model::NavigationModel;
use docnav::{debug, log};
use std::path::PathBuf;

/// A normalized config together with where it came from.
pub struct Loaded {
    pub path: PathBuf,
    pub model: NavigationModel,
    /// Fields dropped during normalization.
    pub ignored: Vec<FieldPath>,
}

/// Run the selected subcommand.
pub fn run(cli: &Cli) -> Result<()> {
    let loaded = load(cli)?;

    match &cli.command {
        Commands::Check => check::run_check(&loaded),
        Commands::Nav { output } => tree::print_nav(&loaded.model, output),
        Commands::Sidebar { path, output } => tree::print_sidebar(&loaded.model, path, output),
    }
}

/// Locate, read and normalize the config file.
fn load(cli: &Cli) -> Result<Loaded> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let path = find_config_file(&cli.config, &cwd)
        .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;
    debug!("config"; "using {}", path.display());

    let options = cli
        .max_depth
        .map_or_else(NormalizeOptions::default, |max_depth| NormalizeOptions {
            max_depth,
        });
    let (model, ignored) = config::load_with_ignored(&path, options)?;

    if !ignored.is_empty() {
        print_ignored_warning(&ignored, &path);
    }

    Ok(Loaded {
        path,
        model,
        ignored,
    })
}

/// Print warning about unknown fields on nav entries and sidebar items.
fn print_ignored_warning(fields: &[FieldPath], path: &std::path::Path) {
    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!("warning"; "unknown fields in {}, ignoring:", display_path);
    for field in fields {
        eprintln!("- {field}");
    }
}
