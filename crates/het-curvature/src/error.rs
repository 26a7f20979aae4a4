//! Error types for the curvature crate.

use thiserror::Error;

/// Errors produced while validating inputs or estimating curvature.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CurvatureError {
    /// The probability (or amplitude) vector has no entries.
    #[error("probability vector is empty")]
    EmptyVector,

    /// Vector length is not 2^n for any integer n.
    #[error("probability vector length {len} is not a power of two")]
    NotPowerOfTwo {
        /// The offending length.
        len: usize,
    },

    /// An entry is below zero.
    #[error("probability at index {index} is negative ({value})")]
    NegativeProbability {
        /// Basis-state index of the entry.
        index: usize,
        /// The negative value.
        value: f64,
    },

    /// An entry is NaN or infinite.
    #[error("probability at index {index} is not finite")]
    NonFiniteProbability {
        /// Basis-state index of the entry.
        index: usize,
    },

    /// Entries sum to zero, so the vector cannot be normalized.
    #[error("probability vector has zero total mass")]
    ZeroTotalMass,

    /// The mixing parameter lies outside [0, 1] or is not finite.
    #[error("alpha must lie in [0, 1], got {0}")]
    InvalidAlpha(f64),

    /// A basis label contains characters other than '0' and '1'.
    #[error("invalid basis label '{0}': expected a non-empty string of 0s and 1s")]
    InvalidBasisLabel(String),

    /// The state dimension does not match what the caller configured.
    #[error("expected a state of dimension {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension implied by the configuration.
        expected: usize,
        /// Dimension of the supplied state.
        actual: usize,
    },

    /// A basis-state index falls outside the state.
    #[error("target basis state {target} is out of range for a state of dimension {len}")]
    TargetOutOfRange {
        /// Requested basis-state index.
        target: usize,
        /// Dimension of the state.
        len: usize,
    },
}

impl CurvatureError {
    /// True for the malformed-probability-vector family of errors.
    ///
    /// These are the failures a caller sees when the vector itself violates
    /// the estimator's preconditions, as opposed to bad configuration.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyVector
                | Self::NotPowerOfTwo { .. }
                | Self::NegativeProbability { .. }
                | Self::NonFiniteProbability { .. }
                | Self::ZeroTotalMass
        )
    }
}

/// Result type for curvature operations.
pub type CurvatureResult<T> = Result<T, CurvatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_classification() {
        assert!(CurvatureError::EmptyVector.is_invalid_input());
        assert!(CurvatureError::NotPowerOfTwo { len: 3 }.is_invalid_input());
        assert!(CurvatureError::ZeroTotalMass.is_invalid_input());
        assert!(!CurvatureError::InvalidAlpha(2.0).is_invalid_input());
        assert!(!CurvatureError::InvalidBasisLabel("x".into()).is_invalid_input());
    }

    #[test]
    fn test_error_messages() {
        let err = CurvatureError::NotPowerOfTwo { len: 6 };
        assert_eq!(
            err.to_string(),
            "probability vector length 6 is not a power of two"
        );
        let err = CurvatureError::InvalidAlpha(1.5);
        assert!(err.to_string().contains("1.5"));
    }
}
