//! Ricci-Ollivier style curvature over the basis-state hypercube.
//!
//! For each hypercube edge `(u, v)` with weight `d_uv`:
//!
//! ```text
//! m_u       = p_u + alpha * (1 - p_u)
//! m_v       = p_v + alpha * (1 - p_v)
//! W(u, v)  ~= |m_u - m_v| * d_uv
//! kappa_uv  = 1 - W(u, v) / d_uv
//! ```
//!
//! and the estimate is the arithmetic mean of `kappa_uv` over all edges, or
//! 0.0 when the graph has no edges (a single basis state).
//!
//! The transport term is a closed-form approximation, not an optimal
//! transport solve. Downstream snapshot series depend on this exact formula.
//!
//! Near 1: mass is nearly uniform between neighbouring basis states.
//! Lower values: mass is sharply peaked across Hamming-adjacent states.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{CurvatureError, CurvatureResult};
use crate::graph::StateGraph;
use crate::probability::{ProbabilitySource, ProbabilityVector};

/// Default idle-mass mixing parameter.
pub const DEFAULT_ALPHA: f64 = 0.5;

/// Estimator configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurvatureConfig")]
pub struct CurvatureConfig {
    alpha: f64,
}

#[derive(Deserialize)]
struct RawCurvatureConfig {
    #[serde(default = "default_alpha")]
    alpha: f64,
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

impl TryFrom<RawCurvatureConfig> for CurvatureConfig {
    type Error = CurvatureError;

    fn try_from(raw: RawCurvatureConfig) -> Result<Self, Self::Error> {
        Self::new(raw.alpha)
    }
}

impl CurvatureConfig {
    /// Create a configuration with the given idle-mass parameter.
    ///
    /// `alpha = 0` uses the raw probability at each vertex; `alpha = 1`
    /// treats every vertex as fully massed, forcing curvature 1.
    pub fn new(alpha: f64) -> CurvatureResult<Self> {
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(CurvatureError::InvalidAlpha(alpha));
        }
        Ok(Self { alpha })
    }

    /// The idle-mass parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Local mass at a vertex with probability `p`.
    pub fn mass(&self, p: f64) -> f64 {
        p + self.alpha * (1.0 - p)
    }
}

impl Default for CurvatureConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Curvature contribution of a single hypercube edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeCurvature {
    /// Lower basis-state index.
    pub u: usize,
    /// Higher basis-state index.
    pub v: usize,
    /// Edge weight (Hamming distance).
    pub weight: f64,
    /// Local mass at `u`.
    pub mass_u: f64,
    /// Local mass at `v`.
    pub mass_v: f64,
    /// Approximate transport cost `|m_u - m_v| * weight`.
    pub transport_cost: f64,
    /// `1 - transport_cost / weight`.
    pub curvature: f64,
}

/// Curvature estimator for probability landscapes on the hypercube.
///
/// Stateless apart from its configuration; every call builds its own graph,
/// so one estimator can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurvatureEstimator {
    config: CurvatureConfig,
}

impl CurvatureEstimator {
    /// Create an estimator with the given configuration.
    pub fn new(config: CurvatureConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CurvatureConfig {
        &self.config
    }

    /// Mean edge curvature of the distribution provided by `source`.
    pub fn estimate<S>(&self, source: &S) -> CurvatureResult<f64>
    where
        S: ProbabilitySource + ?Sized,
    {
        let probs = source.probability_vector()?;
        let edges = self.compute_edges(&probs);

        if edges.is_empty() {
            debug!(n_qubits = probs.n_qubits(), "no edges, curvature is 0");
            return Ok(0.0);
        }

        let mean = mean_curvature(&edges);
        debug!(
            n_qubits = probs.n_qubits(),
            edges = edges.len(),
            alpha = self.config.alpha,
            curvature = mean,
            "estimated curvature"
        );
        Ok(mean)
    }

    /// Per-edge breakdown of the estimate, in graph edge order.
    pub fn edge_curvatures<S>(&self, source: &S) -> CurvatureResult<Vec<EdgeCurvature>>
    where
        S: ProbabilitySource + ?Sized,
    {
        let probs = source.probability_vector()?;
        Ok(self.compute_edges(&probs))
    }

    fn compute_edges(&self, probs: &ProbabilityVector) -> Vec<EdgeCurvature> {
        let graph = StateGraph::for_vector(probs);
        let p = probs.as_slice();

        graph
            .edges()
            .filter(|&(_, _, weight)| weight > 0.0)
            .map(|(u, v, weight)| {
                let mass_u = self.config.mass(p[u]);
                let mass_v = self.config.mass(p[v]);
                let transport_cost = (mass_u - mass_v).abs() * weight;
                let curvature = 1.0 - transport_cost / weight;
                trace!(u, v, mass_u, mass_v, curvature, "edge curvature");
                EdgeCurvature {
                    u,
                    v,
                    weight,
                    mass_u,
                    mass_v,
                    transport_cost,
                    curvature,
                }
            })
            .collect()
    }
}

/// Arithmetic mean of per-edge curvatures, or 0.0 for an edgeless graph.
///
/// `CurvatureEstimator::estimate` is exactly this over `edge_curvatures`.
pub fn mean_curvature(edges: &[EdgeCurvature]) -> f64 {
    if edges.is_empty() {
        return 0.0;
    }
    edges.iter().map(|e| e.curvature).sum::<f64>() / edges.len() as f64
}

/// Estimate curvature of raw probability weights with the given `alpha`.
///
/// Weights are validated and normalized before use.
pub fn estimate(probabilities: &[f64], alpha: f64) -> CurvatureResult<f64> {
    CurvatureEstimator::new(CurvatureConfig::new(alpha)?).estimate(probabilities)
}
