//! streams: discover, parse and lint a directory of stream configs.

mod args;

use args::{Cli, Command, DirArgs, ListArgs};
use clap::Parser;
use color_eyre::eyre::{bail, Result};
use colored::Colorize;
use sk_core::config::{load_settings, load_with_settings, SETTINGS_FILE};
use sk_protocol::config_models::LoaderSettings;
use sk_protocol::stream_models::StreamConfig;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // RUST_LOG always takes precedence. Lints are printed by the commands
    // themselves, so the loader's per-lint warnings stay hidden by default.
    let level = if cli.verbose { Level::DEBUG } else { Level::ERROR };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .try_init();

    match &cli.command {
        Command::Lint(args) => run_lint(&cli, args),
        Command::List(args) => run_list(&cli, args),
    }
}

/// Resolves loader settings: settings file first, then CLI overrides.
fn resolve_settings(cli: &Cli, dir: &Path) -> Result<LoaderSettings> {
    let mut settings = match &cli.config {
        Some(path) => {
            if !path.is_file() {
                bail!("Settings file {} does not exist", path.display());
            }
            load_settings(path)?
        }
        None => load_settings(&dir.join(SETTINGS_FILE))?,
    };

    if let Some(suffix) = &cli.test_suffix {
        settings.test_suffix = suffix.clone();
    }
    if cli.no_env {
        settings.interpolate_env = false;
    }

    Ok(settings)
}

fn load(cli: &Cli, dir: &Path) -> Result<(HashMap<String, StreamConfig>, Vec<String>)> {
    let settings = resolve_settings(cli, dir)?;
    let mut streams = HashMap::new();
    let lints = load_with_settings(dir, &settings, &mut streams)?;
    Ok((streams, lints))
}

fn run_lint(cli: &Cli, args: &DirArgs) -> Result<()> {
    let (streams, lints) = load(cli, &args.dir)?;

    for lint in &lints {
        println!("{} {lint}", "warning:".yellow().bold());
    }

    let summary = format!("{} streams loaded, {} lints", streams.len(), lints.len());
    if lints.is_empty() {
        println!("{}", summary.green());
        Ok(())
    } else {
        println!("{}", summary.yellow());
        std::process::exit(1);
    }
}

fn run_list(cli: &Cli, args: &ListArgs) -> Result<()> {
    let (streams, lints) = load(cli, &args.dir)?;

    for lint in &lints {
        eprintln!("{} {lint}", "warning:".yellow().bold());
    }

    let streams: BTreeMap<String, StreamConfig> = streams.into_iter().collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&streams)?);
        return Ok(());
    }

    for (key, stream) in &streams {
        println!(
            "{}  {} -> {}",
            key.bold(),
            stream.input.kind.cyan(),
            stream.output.kind.cyan()
        );
    }

    Ok(())
}
