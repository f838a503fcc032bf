//! Single qubit: a normalized pair of amplitudes (α, β).
use std::fmt;

use nalgebra::DVector;
use num_complex::Complex64 as C64;

use crate::core::apply::QuantumState;
use crate::core::error::{QuantumError, QuantumResult};
use crate::core::render::render_state;
use crate::core::types::{ensure_normalized, IntoAmplitude};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Qubit {
    alpha: C64,
    beta: C64,
}

impl Qubit {
    /// Fails with `InvalidAmplitude` unless |α|² + |β|² = 1 within tolerance,
    /// and with `TypeMismatch` if either amplitude is NaN or infinite.
    pub fn new(alpha: impl IntoAmplitude, beta: impl IntoAmplitude) -> QuantumResult<Self> {
        let (alpha, beta) = (alpha.into_amplitude(), beta.into_amplitude());
        ensure_normalized(&[alpha, beta])?;
        Ok(Self { alpha, beta })
    }

    /// |0>
    pub fn zero() -> Self {
        Self { alpha: C64::new(1.0, 0.0), beta: C64::new(0.0, 0.0) }
    }

    /// |1>
    pub fn one() -> Self {
        Self { alpha: C64::new(0.0, 0.0), beta: C64::new(1.0, 0.0) }
    }

    pub fn alpha(&self) -> C64 {
        self.alpha
    }

    pub fn beta(&self) -> C64 {
        self.beta
    }

    pub fn amplitudes(&self) -> [C64; 2] {
        [self.alpha, self.beta]
    }

    /// Replace both amplitudes at once; on error the qubit is unchanged.
    pub fn set_amplitudes(&mut self, alpha: impl IntoAmplitude, beta: impl IntoAmplitude) -> QuantumResult<()> {
        *self = Self::new(alpha, beta)?;
        Ok(())
    }

    /// Column vector [α, β]ᵀ.
    pub fn ket(&self) -> DVector<C64> {
        DVector::from_vec(vec![self.alpha, self.beta])
    }

    pub fn show(&self) -> String {
        render_state(&self.amplitudes(), 1)
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

impl QuantumState for Qubit {
    fn state_dimension(&self) -> usize {
        2
    }

    fn state_vector(&self) -> DVector<C64> {
        self.ket()
    }

    fn replace_state(&mut self, ket: DVector<C64>) -> QuantumResult<()> {
        if ket.len() != 2 {
            return Err(QuantumError::DimensionMismatch { expected: 2, found: ket.len() });
        }
        self.set_amplitudes(ket[0], ket[1])
    }

    fn accept_operator(&self, dim: usize) -> QuantumResult<()> {
        if dim != 2 {
            return Err(QuantumError::InvalidTarget(format!(
                "a qubit only accepts 2x2 operators, got {dim}x{dim}"
            )));
        }
        Ok(())
    }

    fn collapse_to(&mut self, index: usize) {
        *self = if index == 0 { Self::zero() } else { Self::one() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_checks_normalization() {
        let s = 1.0 / 2.0_f64.sqrt();
        let q = Qubit::new(s, C64::new(0.0, s)).unwrap();
        assert_eq!(q.alpha(), C64::new(s, 0.0));
        assert_eq!(q.beta(), C64::new(0.0, s));

        assert!(matches!(
            Qubit::new(1.0, 1.0),
            Err(QuantumError::InvalidAmplitude { .. })
        ));
        assert!(matches!(
            Qubit::new(f64::INFINITY, 0.0),
            Err(QuantumError::TypeMismatch(_))
        ));
    }

    #[test]
    fn integer_amplitudes_are_accepted() {
        assert_eq!(Qubit::new(1, 0).unwrap(), Qubit::zero());
        assert_eq!(Qubit::new(0u8, C64::new(0.0, 1.0)).unwrap().beta(), C64::new(0.0, 1.0));
        assert!(matches!(Qubit::new(1, 1), Err(QuantumError::InvalidAmplitude { .. })));

        let mut q = Qubit::zero();
        q.set_amplitudes(0, -1).unwrap();
        assert_eq!(q.beta(), C64::new(-1.0, 0.0));
    }

    #[test]
    fn failed_set_leaves_state_alone() {
        let mut q = Qubit::zero();
        assert!(q.set_amplitudes(0.5, 0.5).is_err());
        assert_eq!(q, Qubit::zero());
        q.set_amplitudes(0.0, -1.0).unwrap();
        assert_eq!(q.beta(), C64::new(-1.0, 0.0));
    }

    #[test]
    fn ket_is_a_column() {
        let k = Qubit::one().ket();
        assert_eq!(k.len(), 2);
        assert_eq!(k[1], C64::new(1.0, 0.0));
    }

    #[test]
    fn two_qubit_operator_is_an_invalid_target() {
        let q = Qubit::zero();
        assert!(matches!(q.accept_operator(4), Err(QuantumError::InvalidTarget(_))));
    }
}
