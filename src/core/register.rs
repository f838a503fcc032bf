//! Multi-qubit register: the joint 2^n-amplitude state of n qubits.
use std::fmt;

use nalgebra::DVector;
use num_complex::Complex64 as C64;

use crate::core::apply::QuantumState;
use crate::core::error::{QuantumError, QuantumResult};
use crate::core::ops::kron_vec;
use crate::core::qubit::Qubit;
use crate::core::render::render_state;
use crate::core::types::{ensure_normalized, is_qubit_dimension};

#[derive(Clone, Debug, PartialEq)]
pub struct Register {
    amplitudes: DVector<C64>,
}

impl Register {
    /// Build from an explicit amplitude list of length 2^n (n ≥ 1).
    pub fn new(amplitudes: Vec<C64>) -> QuantumResult<Self> {
        if !is_qubit_dimension(amplitudes.len()) {
            return Err(QuantumError::InvalidDimension { rows: amplitudes.len(), cols: 1 });
        }
        ensure_normalized(&amplitudes)?;
        Ok(Self { amplitudes: DVector::from_vec(amplitudes) })
    }

    /// Tensor product of `qubits`, the first one most significant.
    pub fn from_qubits(qubits: &[Qubit]) -> QuantumResult<Self> {
        // 2^len must fit in a usize, as in `basis`
        if qubits.len() >= usize::BITS as usize {
            return Err(QuantumError::InvalidDimension { rows: 0, cols: 1 });
        }
        let (first, rest) = qubits
            .split_first()
            .ok_or(QuantumError::InvalidDimension { rows: 0, cols: 1 })?;
        let joint = rest.iter().fold(first.ket(), |acc, q| kron_vec(&acc, &q.ket()));
        // kron of unit vectors can still drift past tolerance for wide registers
        ensure_normalized(joint.as_slice())?;
        Ok(Self { amplitudes: joint })
    }

    /// |0…0> over `qubits` qubits.
    pub fn zero(qubits: usize) -> QuantumResult<Self> {
        Self::basis(qubits, 0)
    }

    /// Basis state `index` over `qubits` qubits.
    pub fn basis(qubits: usize, index: usize) -> QuantumResult<Self> {
        if qubits == 0 || qubits >= usize::BITS as usize {
            return Err(QuantumError::InvalidDimension { rows: 0, cols: 1 });
        }
        let dim = 1usize << qubits;
        if index >= dim {
            return Err(QuantumError::index(index, format!("0..{dim}")));
        }
        let mut amplitudes = DVector::from_element(dim, C64::new(0.0, 0.0));
        amplitudes[index] = C64::new(1.0, 0.0);
        Ok(Self { amplitudes })
    }

    /// Number of basis states (2^n).
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of qubits (n).
    pub fn qubit_count(&self) -> usize {
        self.dimension().trailing_zeros() as usize
    }

    pub fn amplitudes(&self) -> &[C64] {
        self.amplitudes.as_slice()
    }

    pub fn ket(&self) -> DVector<C64> {
        self.amplitudes.clone()
    }

    /// Replace every amplitude at once. The length must stay the same.
    pub fn set_amplitudes(&mut self, amplitudes: Vec<C64>) -> QuantumResult<()> {
        if amplitudes.len() != self.dimension() {
            return Err(QuantumError::DimensionMismatch {
                expected: self.dimension(),
                found: amplitudes.len(),
            });
        }
        ensure_normalized(&amplitudes)?;
        self.amplitudes = DVector::from_vec(amplitudes);
        Ok(())
    }

    pub fn show(&self) -> String {
        render_state(self.amplitudes(), self.qubit_count())
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

impl QuantumState for Register {
    fn state_dimension(&self) -> usize {
        self.dimension()
    }

    fn state_vector(&self) -> DVector<C64> {
        self.ket()
    }

    fn replace_state(&mut self, ket: DVector<C64>) -> QuantumResult<()> {
        self.set_amplitudes(ket.as_slice().to_vec())
    }

    fn accept_operator(&self, dim: usize) -> QuantumResult<()> {
        if dim != self.dimension() {
            return Err(QuantumError::DimensionMismatch { expected: self.dimension(), found: dim });
        }
        Ok(())
    }

    fn collapse_to(&mut self, index: usize) {
        self.amplitudes.fill(C64::new(0.0, 0.0));
        self.amplitudes[index] = C64::new(1.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: f64) -> C64 {
        C64::new(r, 0.0)
    }

    #[test]
    fn length_must_be_a_power_of_two() {
        let err = Register::new(vec![c(1.0), c(0.0), c(0.0)]).unwrap_err();
        assert_eq!(err, QuantumError::InvalidDimension { rows: 3, cols: 1 });
        assert!(Register::new(vec![c(1.0)]).is_err());
    }

    #[test]
    fn from_qubits_orders_first_qubit_high() {
        let r = Register::from_qubits(&[Qubit::one(), Qubit::zero()]).unwrap();
        assert_eq!(r.qubit_count(), 2);
        assert_eq!(r.amplitudes(), &[c(0.0), c(0.0), c(1.0), c(0.0)]);
    }

    #[test]
    fn from_no_qubits_fails() {
        assert!(Register::from_qubits(&[]).unwrap_err().is_dimension_error());
    }

    #[test]
    fn from_too_many_qubits_fails_before_allocating() {
        let wide = vec![Qubit::zero(); usize::BITS as usize];
        assert!(Register::from_qubits(&wide).unwrap_err().is_dimension_error());
    }

    #[test]
    fn set_amplitudes_keeps_length() {
        let mut r = Register::zero(2).unwrap();
        assert!(matches!(
            r.set_amplitudes(vec![c(0.0), c(1.0)]),
            Err(QuantumError::DimensionMismatch { expected: 4, found: 2 })
        ));
        assert!(matches!(
            r.set_amplitudes(vec![c(1.0), c(1.0), c(0.0), c(0.0)]),
            Err(QuantumError::InvalidAmplitude { .. })
        ));
        assert_eq!(r, Register::zero(2).unwrap());
    }

    #[test]
    fn basis_index_is_checked() {
        assert!(matches!(Register::basis(2, 4), Err(QuantumError::InvalidIndex { index: 4, .. })));
        assert_eq!(Register::basis(2, 3).unwrap().amplitudes()[3], c(1.0));
    }
}
