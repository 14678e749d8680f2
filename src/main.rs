//! dlmv - a terminal file navigator with repository-clone integration.
//!
//! Usage:
//!   dlmv [PATH]                        Browse starting at PATH
//!   dlmv --clone <SOURCE> [PATH]       Browse with clone mode armed; press
//!                                      `c` to clone SOURCE into the directory
//!                                      currently on screen
//!   dlmv --clone <SOURCE> --options --depth 1
//!                                      Pass extra options through to git clone
//!   dlmv --help                        Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result, bail};

use dlmv_core::CloneTarget;
use dlmv_tui::TuiConfig;

#[derive(Parser)]
#[command(
    name = "dlmv",
    version,
    about = "Navigate the filesystem and clone repositories in place",
    long_about = "dlmv lets you browse directories in the terminal and, when a \
                  clone source is configured, drop a git clone into whichever \
                  directory you are currently looking at."
)]
struct Cli {
    /// Directory to start navigating from (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Repository source to clone with the `c` key (URL or scp-style path)
    #[arg(long, value_name = "SOURCE")]
    clone: Option<String>,

    /// Additional options passed through to git clone
    #[arg(
        long,
        value_name = "OPT",
        num_args = 1..,
        allow_hyphen_values = true,
        requires = "clone"
    )]
    options: Vec<String>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let path = cli.path.canonicalize().context("Invalid start path")?;
    if !path.is_dir() {
        bail!("Start path is not a directory: {}", path.display());
    }

    let clone_target = cli
        .clone
        .map(|source| CloneTarget::new(source, cli.options));

    let config = TuiConfig::new().with_clone_target(clone_target);
    dlmv_tui::run_with_config(path, config)?;

    Ok(())
}
