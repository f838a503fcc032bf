//! A layer: one time step, the ordered Kronecker product of its gates.
use std::borrow::Cow;
use std::sync::Arc;

use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

use crate::core::apply::Unitary;
use crate::core::error::{QuantumError, QuantumResult};
use crate::core::operator::Operator;
use crate::core::ops::kron;

/// Ordered, non-empty list of shared gates. The first gate acts on the most significant qubits.
///
/// The layer never caches its effective matrix; every query recomposes it from the current
/// gate list, so edits are always reflected.
#[derive(Clone, Debug)]
pub struct Layer {
    gates: Vec<Arc<Operator>>,
}

impl Layer {
    pub fn new<I, G>(gates: I) -> QuantumResult<Self>
    where
        I: IntoIterator<Item = G>,
        G: Into<Arc<Operator>>,
    {
        let gates: Vec<Arc<Operator>> = gates.into_iter().map(Into::into).collect();
        if gates.is_empty() {
            return Err(QuantumError::EmptyLayer);
        }
        Ok(Self { gates })
    }

    pub fn gates(&self) -> &[Arc<Operator>] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn nth_gate(&self, index: usize) -> QuantumResult<&Arc<Operator>> {
        self.gates
            .get(index)
            .ok_or_else(|| QuantumError::index(index, format!("0..{}", self.gates.len())))
    }

    /// Remove and return gate `index`. Removing the last remaining gate fails with `EmptyLayer`.
    pub fn delete_gate(&mut self, index: usize) -> QuantumResult<Arc<Operator>> {
        if index >= self.gates.len() {
            return Err(QuantumError::index(index, format!("0..{}", self.gates.len())));
        }
        if self.gates.len() == 1 {
            return Err(QuantumError::EmptyLayer);
        }
        Ok(self.gates.remove(index))
    }

    /// Insert before position `index`; `index == len()` appends.
    pub fn insert_gate(&mut self, gate: impl Into<Arc<Operator>>, index: usize) -> QuantumResult<()> {
        if index > self.gates.len() {
            return Err(QuantumError::index(index, format!("0..={}", self.gates.len())));
        }
        self.gates.insert(index, gate.into());
        Ok(())
    }

    pub fn push_gate(&mut self, gate: impl Into<Arc<Operator>>) {
        self.gates.push(gate.into());
    }

    /// Product of the member dimensions, or `None` when it does not fit in a `usize`
    /// (64 or more qubits on a 64-bit target).
    pub fn effective_dimension(&self) -> Option<usize> {
        self.gates.iter().try_fold(1usize, |acc, g| acc.checked_mul(g.dimension()))
    }

    /// Total qubits spanned by the layer.
    pub fn qubit_count(&self) -> u32 {
        self.gates.iter().map(|g| g.qubit_count()).sum()
    }

    /// G₀ ⊗ G₁ ⊗ … ⊗ Gₖ.
    pub fn effective_matrix(&self) -> DMatrix<C64> {
        let mut iter = self.gates.iter();
        let first = match iter.next() {
            Some(g) => g.matrix().clone(),
            None => return DMatrix::identity(1, 1),
        };
        iter.fold(first, |acc, g| kron(&acc, g.matrix()))
    }
}

impl Unitary for Layer {
    fn label(&self) -> String {
        let names: Vec<&str> = self.gates.iter().map(|g| g.name()).collect();
        names.join(" ⊗ ")
    }

    // Saturates: no state vector is usize::MAX long, so an overflowing layer is rejected
    // by the target's dimension check before any matrix is built.
    fn operator_dimension(&self) -> usize {
        self.effective_dimension().unwrap_or(usize::MAX)
    }

    fn operator_matrix(&self) -> Cow<'_, DMatrix<C64>> {
        match self.gates.as_slice() {
            [only] => Cow::Borrowed(only.matrix()),
            _ => Cow::Owned(self.effective_matrix()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gates;
    use crate::core::register::Register;

    fn hh() -> Layer {
        Layer::new([gates::hadamard(), gates::hadamard()]).unwrap()
    }

    #[test]
    fn empty_layer_is_rejected() {
        let none: Vec<Operator> = Vec::new();
        assert_eq!(Layer::new(none).unwrap_err(), QuantumError::EmptyLayer);
    }

    #[test]
    fn dimension_is_the_product() {
        let l = Layer::new([gates::hadamard(), gates::swap(), gates::toffoli(2).unwrap()]).unwrap();
        assert_eq!(l.effective_dimension(), Some(2 * 4 * 8));
        assert_eq!(l.qubit_count(), 6);
        assert_eq!(l.effective_matrix().nrows(), 64);
    }

    #[test]
    fn shared_gate_in_two_layers() {
        let h = Arc::new(gates::hadamard());
        let a = Layer::new([h.clone()]).unwrap();
        let b = Layer::new([h.clone(), h.clone()]).unwrap();
        assert_eq!(Arc::strong_count(&h), 4);
        assert_eq!(a.effective_dimension(), Some(2));
        assert_eq!(b.effective_dimension(), Some(4));
    }

    #[test]
    fn insert_at_len_appends() {
        let mut l = hh();
        l.insert_gate(gates::pauli_x(), 2).unwrap();
        assert_eq!(l.len(), 3);
        assert_eq!(l.nth_gate(2).unwrap().name(), "Pauli-X");
        assert!(matches!(
            l.insert_gate(gates::pauli_x(), 5),
            Err(QuantumError::InvalidIndex { index: 5, .. })
        ));
    }

    #[test]
    fn delete_checks_range_and_emptiness() {
        let mut l = hh();
        assert!(matches!(l.delete_gate(2), Err(QuantumError::InvalidIndex { index: 2, .. })));
        assert_eq!(l.delete_gate(0).unwrap().name(), "Hadamard");
        assert_eq!(l.delete_gate(0).unwrap_err(), QuantumError::EmptyLayer);
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn matrix_follows_edits() {
        let mut l = Layer::new([gates::pauli_x()]).unwrap();
        let before = l.effective_matrix();
        l.insert_gate(Operator::default(), 0).unwrap();
        let after = l.effective_matrix();
        assert_eq!(before.nrows(), 2);
        assert_eq!(after.nrows(), 4);
        // I ⊗ X flips the low qubit
        assert_eq!(after[(1, 0)], C64::new(1.0, 0.0));
    }

    #[test]
    fn wide_layer_dimension_overflows_to_none() {
        let wide = Layer::new((0..64).map(|_| gates::hadamard())).unwrap();
        assert_eq!(wide.qubit_count(), 64);
        assert_eq!(wide.effective_dimension(), None);
        assert_eq!(wide.operator_dimension(), usize::MAX);

        let mut r = Register::zero(2).unwrap();
        let err = wide.apply_to(&mut r).unwrap_err();
        assert_eq!(err, QuantumError::DimensionMismatch { expected: 4, found: usize::MAX });
        assert_eq!(r, Register::zero(2).unwrap());
    }

    #[test]
    fn label_joins_names() {
        assert_eq!(hh().label(), "Hadamard ⊗ Hadamard");
    }
}
