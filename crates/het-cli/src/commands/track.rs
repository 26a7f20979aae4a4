//! Track command implementation.
//!
//! `het track --input <run.json|run.yaml> [--alpha <a>] [--export <path>] [--format table|json]`
//!
//! Replays the checkpoints of a run file through a snapshot tracker and
//! prints the curvature, fidelity, and entropy series.

use std::fs;

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use het_curvature::{SnapshotReport, SnapshotTracker};

use super::common::{OutputFormat, RunFile, load_document, resolve_config, to_complex};

/// Execute the track command.
pub fn execute(input: &str, alpha: Option<f64>, export: Option<&str>, format: &str) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    let run: RunFile = load_document(input)?;
    let report = run_tracker(&run, alpha)?;

    if let Some(path) = export {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("Failed to write report: {path}"))?;
        eprintln!("{} Report written to {}", style("OK").green().bold(), path);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

/// Feed every stage of `run` through a fresh tracker.
pub fn run_tracker(run: &RunFile, alpha: Option<f64>) -> Result<SnapshotReport> {
    let config = resolve_config(alpha, run.alpha)?;
    let mut tracker = SnapshotTracker::new(&run.target, config)?;

    info!(
        "Tracking {} stages toward |{}> (alpha = {})",
        run.stages.len(),
        run.target,
        config.alpha()
    );

    for stage in &run.stages {
        tracker
            .capture(stage.stage.clone(), &to_complex(&stage.amplitudes))
            .with_context(|| format!("Stage '{}' failed", stage.stage))?;
    }

    Ok(tracker.report())
}

fn print_report(report: &SnapshotReport) {
    println!(
        "\n{} Snapshots toward |{}> (alpha = {}):",
        style("✓").green().bold(),
        report.target,
        report.alpha
    );
    println!(
        "  {:<4} {:<24} {:>10} {:>10} {:>14}",
        "#", "stage", "curvature", "fidelity", "meas. entropy"
    );
    for (i, s) in report.snapshots.iter().enumerate() {
        println!(
            "  {:<4} {:<24} {:>10.6} {:>10.6} {:>14.6}",
            i, s.stage, s.curvature, s.fidelity, s.measurement_entropy
        );
    }

    let Some(summary) = &report.summary else {
        println!("  (no stages)");
        return;
    };

    println!();
    println!("{}", style("Summary").bold().underlined());
    println!("  Target probability: {:.2}%", summary.target_probability_pct);
    println!("  Final curvature:    {:.6}", summary.final_curvature);
    println!("  Final fidelity:     {:.6}", summary.final_fidelity);
    println!("  Final von Neumann:  {:.6}", summary.final_entropy);
    println!("  Curvature change:   {:+.6}", summary.curvature_delta);

    let assessment = if summary.target_probability_pct > 90.0 {
        style("highly effective").green()
    } else if summary.target_probability_pct > 70.0 {
        style("satisfactory").yellow()
    } else {
        style("suboptimal").red()
    };
    println!("  Assessment:         {assessment}");
}
