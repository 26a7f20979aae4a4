//! het Command-Line Interface
//!
//! Estimates the hypercube curvature of quantum probability landscapes and
//! tracks it, with fidelity and entropy, across the steps of an algorithm.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{curvature, track, version};

/// het - curvature of quantum probability landscapes
#[derive(Parser)]
#[command(name = "het")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the curvature of a single probability vector
    Curvature {
        /// Comma-separated probabilities (length must be a power of two)
        #[arg(short, long, conflicts_with = "input")]
        probs: Option<String>,

        /// Input file (JSON or YAML): a list of weights, {probabilities}, or {amplitudes}
        #[arg(short, long)]
        input: Option<String>,

        /// Idle-mass mixing parameter in [0, 1] (default 0.5)
        #[arg(short, long)]
        alpha: Option<f64>,

        /// Show the per-edge breakdown
        #[arg(long)]
        edges: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Track curvature, fidelity and entropy across the stages of a run file
    Track {
        /// Run file (JSON or YAML) with target, optional alpha, and stages
        #[arg(short, long)]
        input: String,

        /// Idle-mass mixing parameter in [0, 1]; overrides the run file
        #[arg(short, long)]
        alpha: Option<f64>,

        /// Output file for the JSON report
        #[arg(short, long)]
        export: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Curvature {
            probs,
            input,
            alpha,
            edges,
            format,
        } => curvature::execute(probs.as_deref(), input.as_deref(), alpha, edges, &format),

        Commands::Track {
            input,
            alpha,
            export,
            format,
        } => track::execute(&input, alpha, export.as_deref(), &format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
