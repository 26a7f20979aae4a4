//! Probability vectors over the computational basis.
//!
//! A [`ProbabilityVector`] holds one non-negative weight per basis state of
//! an n-qubit register, normalized to sum to 1. Index `i` corresponds to the
//! n-bit label of `i`, most significant bit first:
//!
//! ```text
//! n = 3:  index 6  <->  "110"
//! ```
//!
//! Richer state representations (complex amplitudes, already-computed
//! probabilities) reach the estimator through the [`ProbabilitySource`]
//! trait, which converts them to this plain vector at the boundary.
//!
//! # Example
//!
//! ```rust
//! use het_curvature::probability::ProbabilityVector;
//! use num_complex::Complex64;
//!
//! let h = 1.0 / 2.0_f64.sqrt();
//! let pv = ProbabilityVector::from_amplitudes(&[
//!     Complex64::new(h, 0.0),
//!     Complex64::new(0.0, h),
//! ])
//! .unwrap();
//! assert_eq!(pv.n_qubits(), 1);
//! assert!((pv.get(1).unwrap() - 0.5).abs() < 1e-12);
//! ```

use std::borrow::Cow;

use num_complex::Complex64;

use crate::error::{CurvatureError, CurvatureResult};

/// A validated, normalized probability distribution over 2^n basis states.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityVector {
    probs: Vec<f64>,
    n_qubits: usize,
}

impl ProbabilityVector {
    /// Validate `weights` and normalize them by their total.
    ///
    /// The weights need not sum to 1; they are always divided by their sum,
    /// even when already normalized. Fails if the vector is empty, its length
    /// is not a power of two, any entry is negative or non-finite, or the
    /// total is zero.
    pub fn from_probabilities(mut weights: Vec<f64>) -> CurvatureResult<Self> {
        let len = weights.len();
        if len == 0 {
            return Err(CurvatureError::EmptyVector);
        }
        if !len.is_power_of_two() {
            return Err(CurvatureError::NotPowerOfTwo { len });
        }

        for (index, &value) in weights.iter().enumerate() {
            if !value.is_finite() {
                return Err(CurvatureError::NonFiniteProbability { index });
            }
            if value < 0.0 {
                return Err(CurvatureError::NegativeProbability { index, value });
            }
        }

        // Rescale by the largest entry first so the sum cannot overflow.
        let max = weights.iter().copied().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return Err(CurvatureError::ZeroTotalMass);
        }
        for p in &mut weights {
            *p /= max;
        }

        let total: f64 = weights.iter().sum();
        for p in &mut weights {
            *p /= total;
        }

        Ok(Self {
            n_qubits: len.trailing_zeros() as usize,
            probs: weights,
        })
    }

    /// Build from complex amplitudes by taking the elementwise squared magnitude.
    pub fn from_amplitudes(amplitudes: &[Complex64]) -> CurvatureResult<Self> {
        Self::from_probabilities(amplitudes.iter().map(Complex64::norm_sqr).collect())
    }

    /// Uniform distribution over `2^n_qubits` basis states.
    pub fn uniform(n_qubits: usize) -> Self {
        let len = 1usize << n_qubits;
        Self {
            probs: vec![1.0 / len as f64; len],
            n_qubits,
        }
    }

    /// Number of qubits, i.e. log2 of the vector length.
    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    /// Number of basis states.
    pub fn len(&self) -> usize {
        self.probs.len()
    }

    /// Always false: an empty vector cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    /// Normalized probability of basis state `index`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.probs.get(index).copied()
    }

    /// The normalized probabilities, indexed by basis state.
    pub fn as_slice(&self) -> &[f64] {
        &self.probs
    }

    /// Iterate over the normalized probabilities.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.probs.iter().copied()
    }

    /// Consume the vector, returning the normalized probabilities.
    pub fn into_inner(self) -> Vec<f64> {
        self.probs
    }
}

/// Anything that can provide a normalized, power-of-two-length probability vector.
///
/// This is the only contract the estimator depends on. Implementations
/// convert their own representation and validate it on the way in.
pub trait ProbabilitySource {
    /// Produce the validated probability vector.
    fn probability_vector(&self) -> CurvatureResult<Cow<'_, ProbabilityVector>>;
}

impl ProbabilitySource for ProbabilityVector {
    fn probability_vector(&self) -> CurvatureResult<Cow<'_, ProbabilityVector>> {
        Ok(Cow::Borrowed(self))
    }
}

impl ProbabilitySource for [f64] {
    fn probability_vector(&self) -> CurvatureResult<Cow<'_, ProbabilityVector>> {
        ProbabilityVector::from_probabilities(self.to_vec()).map(Cow::Owned)
    }
}

impl ProbabilitySource for Vec<f64> {
    fn probability_vector(&self) -> CurvatureResult<Cow<'_, ProbabilityVector>> {
        self.as_slice().probability_vector()
    }
}

impl ProbabilitySource for [Complex64] {
    fn probability_vector(&self) -> CurvatureResult<Cow<'_, ProbabilityVector>> {
        ProbabilityVector::from_amplitudes(self).map(Cow::Owned)
    }
}

impl ProbabilitySource for Vec<Complex64> {
    fn probability_vector(&self) -> CurvatureResult<Cow<'_, ProbabilityVector>> {
        self.as_slice().probability_vector()
    }
}

/// The n-bit label of basis state `index`, most significant bit first.
///
/// Returns an empty string for a zero-qubit register.
pub fn basis_label(index: usize, n_qubits: usize) -> String {
    if n_qubits == 0 {
        return String::new();
    }
    format!("{index:0n_qubits$b}")
}

/// Parse an n-bit label such as `"110"` into its basis-state index.
pub fn parse_basis_label(label: &str) -> CurvatureResult<usize> {
    let valid = !label.is_empty()
        && label.len() <= usize::BITS as usize
        && label.bytes().all(|b| b == b'0' || b == b'1');
    if !valid {
        return Err(CurvatureError::InvalidBasisLabel(label.to_string()));
    }
    usize::from_str_radix(label, 2).map_err(|_| CurvatureError::InvalidBasisLabel(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_weights() {
        let pv = ProbabilityVector::from_probabilities(vec![1.0, 3.0]).unwrap();
        assert_eq!(pv.n_qubits(), 1);
        assert!((pv.as_slice()[0] - 0.25).abs() < 1e-15);
        assert!((pv.as_slice()[1] - 0.75).abs() < 1e-15);
    }

    #[test]
    fn test_single_state_is_zero_qubits() {
        let pv = ProbabilityVector::from_probabilities(vec![4.0]).unwrap();
        assert_eq!(pv.n_qubits(), 0);
        assert_eq!(pv.get(0), Some(1.0));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            ProbabilityVector::from_probabilities(vec![]),
            Err(CurvatureError::EmptyVector)
        );
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        assert_eq!(
            ProbabilityVector::from_probabilities(vec![0.2, 0.3, 0.5]),
            Err(CurvatureError::NotPowerOfTwo { len: 3 })
        );
    }

    #[test]
    fn test_rejects_negative_entry() {
        let err = ProbabilityVector::from_probabilities(vec![0.5, -0.5, 0.5, 0.5]).unwrap_err();
        assert_eq!(
            err,
            CurvatureError::NegativeProbability {
                index: 1,
                value: -0.5
            }
        );
    }

    #[test]
    fn test_rejects_nan() {
        let err = ProbabilityVector::from_probabilities(vec![0.5, f64::NAN]).unwrap_err();
        assert_eq!(err, CurvatureError::NonFiniteProbability { index: 1 });
    }

    #[test]
    fn test_rejects_zero_mass() {
        assert_eq!(
            ProbabilityVector::from_probabilities(vec![0.0; 4]),
            Err(CurvatureError::ZeroTotalMass)
        );
    }

    #[test]
    fn test_normalizes_near_max_weights() {
        let pv = ProbabilityVector::from_probabilities(vec![1e308, 1e308]).unwrap();
        assert_eq!(pv.as_slice(), &[0.5, 0.5]);

        let pv = ProbabilityVector::from_probabilities(vec![f64::MAX, 0.0, f64::MAX, 0.0]).unwrap();
        assert_eq!(pv.as_slice(), &[0.5, 0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_from_amplitudes_squares_magnitude() {
        let pv = ProbabilityVector::from_amplitudes(&[
            Complex64::new(0.6, 0.0),
            Complex64::new(0.0, -0.8),
        ])
        .unwrap();
        assert!((pv.as_slice()[0] - 0.36).abs() < 1e-12);
        assert!((pv.as_slice()[1] - 0.64).abs() < 1e-12);
    }

    #[test]
    fn test_uniform() {
        let pv = ProbabilityVector::uniform(3);
        assert_eq!(pv.len(), 8);
        assert!(pv.iter().all(|p| p == 0.125));
    }

    #[test]
    fn test_source_borrows_existing_vector() {
        let pv = ProbabilityVector::uniform(2);
        let cow = pv.probability_vector().unwrap();
        assert!(matches!(cow, Cow::Borrowed(_)));
    }

    #[test]
    fn test_basis_labels() {
        assert_eq!(basis_label(6, 3), "110");
        assert_eq!(basis_label(1, 4), "0001");
        assert_eq!(basis_label(0, 0), "");
        assert_eq!(parse_basis_label("110").unwrap(), 6);
        assert_eq!(parse_basis_label("0001").unwrap(), 1);
    }

    #[test]
    fn test_parse_basis_label_rejects_garbage() {
        assert!(parse_basis_label("").is_err());
        assert!(parse_basis_label("102").is_err());
        assert!(parse_basis_label("|110>").is_err());
    }
}
