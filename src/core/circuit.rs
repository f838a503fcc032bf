//! Circuits: layers applied to a state one after another.
use tracing::{debug, warn};

use crate::core::apply::{apply, QuantumState, Unitary};
use crate::core::error::{QuantumError, QuantumResult};
use crate::core::layer::Layer;

#[derive(Clone, Debug, Default)]
pub struct Circuit {
    layers: Vec<Layer>,
}

impl Circuit {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn nth_layer(&self, index: usize) -> QuantumResult<&Layer> {
        self.layers
            .get(index)
            .ok_or_else(|| QuantumError::index(index, format!("0..{}", self.layers.len())))
    }

    pub fn delete_layer(&mut self, index: usize) -> QuantumResult<Layer> {
        if index >= self.layers.len() {
            return Err(QuantumError::index(index, format!("0..{}", self.layers.len())));
        }
        Ok(self.layers.remove(index))
    }

    /// Insert before position `index`; `index == len()` appends.
    pub fn insert_layer(&mut self, layer: Layer, index: usize) -> QuantumResult<()> {
        if index > self.layers.len() {
            return Err(QuantumError::index(index, format!("0..={}", self.layers.len())));
        }
        self.layers.insert(index, layer);
        Ok(())
    }

    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Apply every layer to `target` in order.
    ///
    /// Stops at the first failing layer. Layers before it have already been applied and are
    /// not rolled back, so the target should be discarded after an error.
    pub fn run<S: QuantumState>(&self, target: &mut S) -> QuantumResult<()> {
        for (i, layer) in self.layers.iter().enumerate() {
            debug!(layer = i, gates = %layer.label(), dim = ?layer.effective_dimension(), "applying layer");
            if let Err(e) = apply(layer, target) {
                warn!(layer = i, error = %e, "circuit run aborted");
                return Err(e);
            }
        }
        Ok(())
    }
}

impl FromIterator<Layer> for Circuit {
    fn from_iter<T: IntoIterator<Item = Layer>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gates;
    use crate::core::operator::Operator;
    use crate::core::register::Register;

    #[test]
    fn empty_circuit_is_a_no_op() {
        let mut r = Register::basis(2, 1).unwrap();
        Circuit::default().run(&mut r).unwrap();
        assert_eq!(r, Register::basis(2, 1).unwrap());
    }

    #[test]
    fn failed_run_keeps_earlier_layers() {
        let c: Circuit = [
            Layer::new([gates::pauli_x(), Operator::default()]).unwrap(),
            Layer::new([gates::pauli_x()]).unwrap(),
        ]
        .into_iter()
        .collect();
        let mut r = Register::zero(2).unwrap();
        let err = c.run(&mut r).unwrap_err();
        assert_eq!(err, QuantumError::DimensionMismatch { expected: 4, found: 2 });
        // first layer (X on qubit 0) already landed
        assert_eq!(r, Register::basis(2, 2).unwrap());
    }

    #[test]
    fn layer_editing() {
        let mut c = Circuit::new(vec![Layer::new([gates::hadamard()]).unwrap()]);
        c.insert_layer(Layer::new([gates::pauli_z()]).unwrap(), 1).unwrap();
        assert!(c.insert_layer(Layer::new([gates::pauli_z()]).unwrap(), 3).is_err());
        assert_eq!(c.nth_layer(1).unwrap().gates()[0].name(), "Pauli-Z");
        assert!(c.delete_layer(2).is_err());
        c.delete_layer(0).unwrap();
        assert_eq!(c.len(), 1);
    }
}
