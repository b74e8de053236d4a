use anyhow::{Context, Result};
use clap::Parser;
use legend_patch::logging::init_logging;
use legend_patch::utils::display_diff_side_by_side;
use legend_patch::{DEFAULT_TARGET, PatchReport, Patcher};
use std::path::PathBuf;
use tracing::debug;

/// Repairs the mis-encoded minus sign in the legend component.
#[derive(Parser, Debug)]
#[command(name = "legend-patch", version)]
struct Cli {
    /// File to patch
    #[arg(default_value = DEFAULT_TARGET)]
    path: PathBuf,

    /// Show what would change without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Print the patch report as JSON
    #[arg(long)]
    json: bool,
}

fn print_json(report: &PatchReport) -> Result<()> {
    let out = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    println!("{}", out);
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let patcher = Patcher::new(&cli.path);

    if cli.dry_run {
        let preview = patcher
            .preview()
            .with_context(|| format!("Failed to preview {}", patcher.path().display()))?;

        if cli.json {
            print_json(&preview.report)?;
        } else if preview.report.changed {
            display_diff_side_by_side(&preview.before, &preview.after);
        } else {
            println!("No changes for {}", patcher.path().display());
        }
        return Ok(());
    }

    let report = patcher
        .run()
        .with_context(|| format!("Failed to patch {}", patcher.path().display()))?;
    debug!(replacements = report.total_replacements(), "done");

    if cli.json {
        print_json(&report)?;
    }
    Ok(())
}
