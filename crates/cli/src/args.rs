//! Clap argument types.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Load a directory of stream configs and report on it
#[derive(Parser, Debug)]
#[command(name = "streams")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Loader settings file (defaults to `streams.toml` in the stream directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip files whose name ends with `_<SUFFIX>` before the extension
    #[arg(long, global = true, value_name = "SUFFIX")]
    pub test_suffix: Option<String>,

    /// Do not replace `${VAR}` references with environment variables
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load every stream and print its lints, failing if there are any
    Lint(DirArgs),

    /// Load every stream and list the resulting keys
    List(ListArgs),
}

#[derive(Args, Debug)]
pub struct DirArgs {
    /// Directory containing stream files
    pub dir: PathBuf,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory containing stream files
    pub dir: PathBuf,

    /// Print the loaded streams as a JSON object keyed by stream name
    #[arg(long)]
    pub json: bool,
}
