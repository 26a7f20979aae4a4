//! `het-curvature` — discrete curvature of quantum probability landscapes.
//!
//! Measures how "curved" the probability distribution of an n-qubit state
//! is, viewed as mass on the Boolean hypercube of basis states:
//!
//! - **Probability vectors**: validated, normalized weights over 2^n basis
//!   states, built from raw probabilities or complex amplitudes
//! - **State graph**: the hypercube linking basis states at Hamming distance 1
//! - **Curvature estimator**: a Ricci-Ollivier style per-edge curvature with
//!   a closed-form transport approximation, averaged over all edges
//! - **Snapshots**: curvature, fidelity, and entropy recorded at the
//!   checkpoints of an evolving algorithm
//!
//! Graph construction is a brute-force pairwise scan (O(4^n)), so the crate
//! targets small registers.
//!
//! # Quick start
//!
//! ```rust
//! use het_curvature::{CurvatureConfig, CurvatureEstimator};
//!
//! let estimator = CurvatureEstimator::new(CurvatureConfig::new(0.5).unwrap());
//!
//! // Uniform mass is flat: every edge contributes exactly 1.
//! assert_eq!(estimator.estimate(&[0.25, 0.25, 0.25, 0.25][..]).unwrap(), 1.0);
//!
//! // All mass on |0>: m_0 = 1, m_1 = 0.5, curvature 1 - 0.5.
//! assert_eq!(estimator.estimate(&[1.0, 0.0][..]).unwrap(), 0.5);
//! ```

pub mod curvature;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod probability;
pub mod snapshot;

pub use curvature::{
    CurvatureConfig, CurvatureEstimator, DEFAULT_ALPHA, EdgeCurvature, estimate,
    mean_curvature,
};
pub use error::{CurvatureError, CurvatureResult};
pub use graph::StateGraph;
pub use probability::{ProbabilitySource, ProbabilityVector, basis_label, parse_basis_label};
pub use snapshot::{Snapshot, SnapshotReport, SnapshotSummary, SnapshotTracker};
