//! Curvature command implementation.
//!
//! `het curvature (--probs <list> | --input <file>) [--alpha <a>] [--edges] [--format table|json]`

use anyhow::Result;
use console::style;
use serde::Serialize;
use tracing::info;

use het_curvature::{
    CurvatureEstimator, EdgeCurvature, ProbabilityVector, basis_label, mean_curvature,
};

use super::common::{OutputFormat, StateInput, load_document, parse_probability_list, resolve_config};

#[derive(Debug, Serialize)]
struct CurvatureOutput {
    n_qubits: usize,
    alpha: f64,
    edges: usize,
    curvature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    edge_curvatures: Option<Vec<EdgeCurvature>>,
}

/// Execute the curvature command.
pub fn execute(
    probs: Option<&str>,
    input: Option<&str>,
    alpha: Option<f64>,
    show_edges: bool,
    format: &str,
) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    let weights = match (probs, input) {
        (Some(list), None) => parse_probability_list(list)?,
        (None, Some(path)) => load_document::<StateInput>(path)?.into_weights(),
        (Some(_), Some(_)) => anyhow::bail!("Pass either --probs or --input, not both"),
        (None, None) => anyhow::bail!("One of --probs or --input is required"),
    };

    let config = resolve_config(alpha, None)?;
    let estimator = CurvatureEstimator::new(config);
    let pv = ProbabilityVector::from_probabilities(weights)?;

    info!("Estimating curvature for {} qubits", pv.n_qubits());

    let edge_curvatures = estimator.edge_curvatures(&pv)?;

    let output = CurvatureOutput {
        n_qubits: pv.n_qubits(),
        alpha: config.alpha(),
        edges: edge_curvatures.len(),
        curvature: mean_curvature(&edge_curvatures),
        edge_curvatures: show_edges.then_some(edge_curvatures),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Table => print_table(&output),
    }

    Ok(())
}

fn print_table(output: &CurvatureOutput) {
    println!(
        "\n{} Curvature ({} qubits, {} edges, alpha = {}):",
        style("✓").green().bold(),
        output.n_qubits,
        output.edges,
        output.alpha
    );
    println!("  {}", style(format!("{:.6}", output.curvature)).cyan().bold());

    if let Some(edges) = &output.edge_curvatures {
        println!();
        println!(
            "  {:<12} {:<12} {:>8} {:>8} {:>10}",
            "u", "v", "m_u", "m_v", "curvature"
        );
        for e in edges {
            println!(
                "  |{:<10}> |{:<10}> {:>8.4} {:>8.4} {:>10.6}",
                basis_label(e.u, output.n_qubits),
                basis_label(e.v, output.n_qubits),
                e.mass_u,
                e.mass_v,
                e.curvature
            );
        }
    }
}
