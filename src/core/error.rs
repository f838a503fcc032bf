//! Error kinds raised by the simulation engine.

use thiserror::Error;

/// Result alias used across the engine.
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Every validation failure the engine can report.
///
/// Validation always runs before mutation, so an `Err` leaves the receiver untouched
/// (the one exception is [`Circuit::run`](crate::core::circuit::Circuit::run), which does not
/// roll back layers applied before the failing one).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Type Mismatch: {0}")]
    TypeMismatch(String),

    #[error("Invalid Amplitude: squared magnitudes sum to {norm_sqr}, expected 1")]
    InvalidAmplitude { norm_sqr: f64 },

    #[error("Not Unitary: max |(MᴴM - I)ij| = {deviation:e}")]
    NotUnitary { deviation: f64 },

    #[error("Invalid Dimension: {rows}x{cols} (expected a 2^k shape with k >= 1)")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("Dimension Mismatch: expected dimension {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Invalid Index: {index} (valid: {valid})")]
    InvalidIndex { index: usize, valid: String },

    #[error("Empty Layer: a layer needs at least one gate")]
    EmptyLayer,

    #[error("Invalid Exponent: {0} (use adjoint() for inverses)")]
    InvalidExponent(i64),

    #[error("Invalid Target: {0}")]
    InvalidTarget(String),

    #[error("Unknown Gate: {0}")]
    UnknownGate(String),
}

impl QuantumError {
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        QuantumError::TypeMismatch(message.into())
    }

    pub(crate) fn index(index: usize, valid: impl Into<String>) -> Self {
        QuantumError::InvalidIndex { index, valid: valid.into() }
    }

    /// `true` for both a malformed operator shape and an operator/state size mismatch.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            QuantumError::InvalidDimension { .. } | QuantumError::DimensionMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_layer_message() {
        assert_eq!(
            QuantumError::EmptyLayer.to_string(),
            "Empty Layer: a layer needs at least one gate"
        );
    }

    #[test]
    fn test_index_message() {
        let err = QuantumError::index(7, "0..=3");
        assert_eq!(err.to_string(), "Invalid Index: 7 (valid: 0..=3)");
    }

    #[test]
    fn test_dimension_family() {
        assert!(QuantumError::DimensionMismatch { expected: 4, found: 8 }.is_dimension_error());
        assert!(QuantumError::InvalidDimension { rows: 3, cols: 3 }.is_dimension_error());
        assert!(!QuantumError::EmptyLayer.is_dimension_error());
    }
}
