//! Checkpoint tracking for evolving quantum states.
//!
//! A [`SnapshotTracker`] is handed the statevector after each step of some
//! external process (state preparation, an oracle call, a diffusion step,
//! ...) and records the curvature of its probability landscape together with
//! the fidelity to a fixed target basis state and the state entropies.
//!
//! # Example
//!
//! ```rust
//! use het_curvature::{CurvatureConfig, SnapshotTracker};
//! use num_complex::Complex64;
//!
//! let mut tracker = SnapshotTracker::new("11", CurvatureConfig::default()).unwrap();
//!
//! let uniform = vec![Complex64::new(0.5, 0.0); 4];
//! tracker.capture("prepare", &uniform).unwrap();
//!
//! let mut marked = vec![Complex64::new(0.0, 0.0); 4];
//! marked[3] = Complex64::new(1.0, 0.0);
//! tracker.capture("amplify", &marked).unwrap();
//!
//! assert_eq!(tracker.snapshots().len(), 2);
//! assert_eq!(tracker.latest().unwrap().fidelity, 1.0);
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::curvature::{CurvatureConfig, CurvatureEstimator};
use crate::error::{CurvatureError, CurvatureResult};
use crate::metrics;
use crate::probability::{ProbabilityVector, parse_basis_label};

/// Metrics captured at one checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Checkpoint label.
    pub stage: String,
    /// Mean edge curvature of the probability landscape.
    pub curvature: f64,
    /// Probability of the target basis state.
    pub fidelity: f64,
    /// Von Neumann entropy of the state, in bits.
    pub von_neumann_entropy: f64,
    /// Shannon entropy of the measurement distribution, in bits.
    pub measurement_entropy: f64,
}

/// Ordered snapshot series with a summary of the final checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotReport {
    /// Target basis state label.
    pub target: String,
    /// Idle-mass parameter used for every curvature estimate.
    pub alpha: f64,
    /// Snapshots in capture order.
    pub snapshots: Vec<Snapshot>,
    /// Summary of the series (absent if nothing was captured).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SnapshotSummary>,
}

/// Summary of a snapshot series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotSummary {
    /// Curvature at the last checkpoint.
    pub final_curvature: f64,
    /// Fidelity at the last checkpoint.
    pub final_fidelity: f64,
    /// Von Neumann entropy at the last checkpoint.
    pub final_entropy: f64,
    /// Final fidelity expressed as a percentage.
    pub target_probability_pct: f64,
    /// Change in curvature between the first and last checkpoints.
    pub curvature_delta: f64,
}

/// Records snapshots at named checkpoints for a fixed target state.
#[derive(Debug, Clone)]
pub struct SnapshotTracker {
    target_label: String,
    target: usize,
    n_qubits: usize,
    dimension: usize,
    estimator: CurvatureEstimator,
    snapshots: Vec<Snapshot>,
}

impl SnapshotTracker {
    /// Create a tracker for the basis state labelled `target` (MSB first).
    ///
    /// The label width fixes the register size: every captured state must
    /// have `2^target.len()` amplitudes, so the label must be narrower
    /// than `usize`.
    pub fn new(target: &str, config: CurvatureConfig) -> CurvatureResult<Self> {
        let index = parse_basis_label(target)?;
        let dimension = u32::try_from(target.len())
            .ok()
            .and_then(|width| 1usize.checked_shl(width))
            .ok_or_else(|| CurvatureError::InvalidBasisLabel(target.to_string()))?;
        Ok(Self {
            target_label: target.to_string(),
            target: index,
            n_qubits: target.len(),
            dimension,
            estimator: CurvatureEstimator::new(config),
            snapshots: Vec::new(),
        })
    }

    /// Target basis-state index.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Target basis-state label.
    pub fn target_label(&self) -> &str {
        &self.target_label
    }

    /// Number of qubits in the tracked register.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Capture metrics for `amplitudes` under the label `stage`.
    pub fn capture(
        &mut self,
        stage: impl Into<String>,
        amplitudes: &[Complex64],
    ) -> CurvatureResult<&Snapshot> {
        if amplitudes.len() != self.dimension {
            return Err(CurvatureError::DimensionMismatch {
                expected: self.dimension,
                actual: amplitudes.len(),
            });
        }

        let probs = ProbabilityVector::from_amplitudes(amplitudes)?;
        let snapshot = Snapshot {
            stage: stage.into(),
            curvature: self.estimator.estimate(&probs)?,
            fidelity: metrics::fidelity(amplitudes, self.target)?,
            von_neumann_entropy: metrics::von_neumann_entropy(amplitudes),
            measurement_entropy: metrics::shannon_entropy(&probs),
        };

        info!(
            stage = %snapshot.stage,
            curvature = snapshot.curvature,
            fidelity = snapshot.fidelity,
            "captured snapshot"
        );

        self.snapshots.push(snapshot);
        Ok(&self.snapshots[self.snapshots.len() - 1])
    }

    /// All snapshots in capture order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Curvature values in capture order.
    pub fn curvature_series(&self) -> Vec<f64> {
        self.snapshots.iter().map(|s| s.curvature).collect()
    }

    /// Build a serializable report of the series.
    pub fn report(&self) -> SnapshotReport {
        let summary = match (self.snapshots.first(), self.snapshots.last()) {
            (Some(first), Some(last)) => Some(SnapshotSummary {
                final_curvature: last.curvature,
                final_fidelity: last.fidelity,
                final_entropy: last.von_neumann_entropy,
                target_probability_pct: last.fidelity * 100.0,
                curvature_delta: last.curvature - first.curvature,
            }),
            _ => None,
        };

        SnapshotReport {
            target: self.target_label.clone(),
            alpha: self.estimator.config().alpha(),
            snapshots: self.snapshots.clone(),
            summary,
        }
    }
}
