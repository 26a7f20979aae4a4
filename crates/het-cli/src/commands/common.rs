//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use num_complex::Complex64;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use het_curvature::{CurvatureConfig, DEFAULT_ALPHA};

/// A state supplied on disk, either as weights or as complex amplitudes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StateInput {
    /// A bare list of probability weights.
    Weights(Vec<f64>),
    /// `{ probabilities: [...] }`
    Probabilities { probabilities: Vec<f64> },
    /// `{ amplitudes: [[re, im], ...] }`
    Amplitudes { amplitudes: Vec<[f64; 2]> },
}

impl StateInput {
    /// Convert to raw probability weights (squared magnitudes for amplitudes).
    pub fn into_weights(self) -> Vec<f64> {
        match self {
            Self::Weights(w) | Self::Probabilities { probabilities: w } => w,
            Self::Amplitudes { amplitudes } => to_complex(&amplitudes)
                .iter()
                .map(Complex64::norm_sqr)
                .collect(),
        }
    }
}

/// One checkpoint of a tracked run.
#[derive(Debug, Clone, Deserialize)]
pub struct StageInput {
    /// Checkpoint label.
    pub stage: String,
    /// Statevector at this checkpoint as `[re, im]` pairs.
    pub amplitudes: Vec<[f64; 2]>,
}

/// A run file for the `track` command.
#[derive(Debug, Clone, Deserialize)]
pub struct RunFile {
    /// Idle-mass parameter; falls back to the default when omitted.
    #[serde(default)]
    pub alpha: Option<f64>,
    /// Target basis state label, most significant bit first.
    pub target: String,
    /// Checkpoints in order.
    pub stages: Vec<StageInput>,
}

/// Convert `[re, im]` pairs to complex amplitudes.
pub fn to_complex(pairs: &[[f64; 2]]) -> Vec<Complex64> {
    pairs.iter().map(|&[re, im]| Complex64::new(re, im)).collect()
}

/// Load a JSON or YAML document, choosing the format by extension.
pub fn load_document<T: DeserializeOwned>(path: &str) -> Result<T> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Failed to parse YAML: {path}")),
        _ => serde_json::from_str(&source).with_context(|| format!("Failed to parse JSON: {path}")),
    }
}

/// Parse a comma-separated probability list such as `0.5,0.25,0.25,0`.
pub fn parse_probability_list(list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("Invalid probability value: '{s}'"))
        })
        .collect()
}

/// Build the estimator configuration, preferring an explicit CLI alpha.
pub fn resolve_config(cli_alpha: Option<f64>, file_alpha: Option<f64>) -> Result<CurvatureConfig> {
    let alpha = cli_alpha.or(file_alpha).unwrap_or(DEFAULT_ALPHA);
    Ok(CurvatureConfig::new(alpha)?)
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Parse a format name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown output format: '{other}'. Available: table, json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probability_list() {
        assert_eq!(
            parse_probability_list("0.5, 0.25,0.25,0").unwrap(),
            vec![0.5, 0.25, 0.25, 0.0]
        );
        assert!(parse_probability_list("0.5,abc").is_err());
    }

    #[test]
    fn test_state_input_shapes() {
        let w: StateInput = serde_json::from_str("[1, 0]").unwrap();
        assert_eq!(w.into_weights(), vec![1.0, 0.0]);

        let p: StateInput = serde_json::from_str(r#"{"probabilities": [0.5, 0.5]}"#).unwrap();
        assert_eq!(p.into_weights(), vec![0.5, 0.5]);

        let a: StateInput =
            serde_json::from_str(r#"{"amplitudes": [[0.6, 0.0], [0.0, 0.8]]}"#).unwrap();
        let weights = a.into_weights();
        assert!((weights[0] - 0.36).abs() < 1e-12);
        assert!((weights[1] - 0.64).abs() < 1e-12);
    }

    #[test]
    fn test_run_file_yaml() {
        let yaml = "target: \"10\"\nstages:\n  - stage: start\n    amplitudes: [[1, 0], [0, 0], [0, 0], [0, 0]]\n";
        let run: RunFile = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(run.target, "10");
        assert_eq!(run.alpha, None);
        assert_eq!(run.stages.len(), 1);
        assert_eq!(run.stages[0].amplitudes.len(), 4);
    }

    #[test]
    fn test_resolve_config_precedence() {
        assert_eq!(resolve_config(None, None).unwrap().alpha(), 0.5);
        assert_eq!(resolve_config(None, Some(0.2)).unwrap().alpha(), 0.2);
        assert_eq!(resolve_config(Some(0.9), Some(0.2)).unwrap().alpha(), 0.9);
        assert!(resolve_config(Some(2.0), None).is_err());
    }

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert!(OutputFormat::parse("csv").is_err());
    }
}
