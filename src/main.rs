//! Lookupsheet - build a sheet from a definition file and export it as CSV

use anyhow::{Context, Result, bail};
use clap::Parser;
use lookupsheet_core::storage::{to_csv, write_csv};
use lookupsheet_core::{ReplayMode, SheetRegistry, load_definition, replay};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lookupsheet")]
#[command(
    author,
    version,
    about = "Replay a sheet definition (columns + cell assignments) and export it as CSV"
)]
struct Cli {
    /// Sheet definition file (.toml)
    file: PathBuf,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report rejected assignments and continue instead of failing
    #[arg(long)]
    keep_going: bool,

    /// Log filter, e.g. `debug` or `lookupsheet_core=trace` (default: RUST_LOG, else `warn`)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let definition = load_definition(&cli.file)
        .with_context(|| format!("Failed to load {}", cli.file.display()))?;
    tracing::debug!(
        "Loaded {}: {} column(s), {} assignment(s)",
        cli.file.display(),
        definition.columns.len(),
        definition.cells.len()
    );

    let mode = if cli.keep_going {
        ReplayMode::KeepGoing
    } else {
        ReplayMode::StopOnError
    };

    let registry = SheetRegistry::new();
    let report = replay(&registry, definition, mode).context("Failed to create sheet")?;
    tracing::info!(
        "Sheet {}: {} applied, {} rejected",
        report.sheet.id(),
        report.applied,
        report.rejected.len()
    );

    for rejection in &report.rejected {
        let a = &rejection.assignment;
        if !cli.keep_going {
            bail!(
                "Cell {}{} rejected ({}): {}",
                a.column,
                a.row,
                rejection.error.kind().as_str(),
                rejection.error
            );
        }
        eprintln!(
            "Warning: cell {}{} rejected ({}): {}",
            a.column,
            a.row,
            rejection.error.kind().as_str(),
            rejection.error
        );
    }

    match cli.output {
        Some(path) => {
            write_csv(&path, &report.sheet)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Exported sheet {} ({} cell(s)) to {}",
                report.sheet.id(),
                report.applied,
                path.display()
            );
        }
        None => print!("{}", to_csv(&report.sheet)),
    }

    Ok(())
}
