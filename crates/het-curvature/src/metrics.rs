//! Companion state metrics recorded next to the curvature at each checkpoint.

use num_complex::Complex64;

use crate::error::{CurvatureError, CurvatureResult};
use crate::probability::ProbabilityVector;

/// Eigenvalues below this are treated as zero when computing entropies.
const ENTROPY_EPS: f64 = 1e-12;

/// Fidelity of a statevector with the basis state `target`: `|a_target|^2`.
///
/// The amplitudes are used as given, without renormalization.
pub fn fidelity(amplitudes: &[Complex64], target: usize) -> CurvatureResult<f64> {
    amplitudes
        .get(target)
        .map(Complex64::norm_sqr)
        .ok_or(CurvatureError::TargetOutOfRange {
            target,
            len: amplitudes.len(),
        })
}

/// Von Neumann entropy, in bits, of the density matrix `|psi><psi|`.
///
/// `|psi><psi|` has rank one: its only non-zero eigenvalue is `<psi|psi>`.
/// A normalized statevector therefore always has zero entropy; an
/// unnormalized one reports `-lambda * log2(lambda)` for that eigenvalue.
pub fn von_neumann_entropy(amplitudes: &[Complex64]) -> f64 {
    let lambda: f64 = amplitudes.iter().map(Complex64::norm_sqr).sum();
    if lambda <= ENTROPY_EPS || (lambda - 1.0).abs() <= ENTROPY_EPS {
        return 0.0;
    }
    -lambda * lambda.log2()
}

/// Shannon entropy, in bits, of the measurement distribution.
pub fn shannon_entropy(probs: &ProbabilityVector) -> f64 {
    probs
        .iter()
        .filter(|&p| p > ENTROPY_EPS)
        .map(|p| -p * p.log2())
        .sum()
}
