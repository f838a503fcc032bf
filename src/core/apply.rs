//! Applying operators to states, and projective measurement.
use std::borrow::Cow;
use std::collections::BTreeMap;

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::trace;

use crate::core::error::{QuantumError, QuantumResult};
use crate::core::operator::Operator;
use crate::core::types::norm_sqr;

/// Anything that acts on a state as one unitary matrix: a single [`Operator`] or a whole layer.
pub trait Unitary {
    fn label(&self) -> String;
    fn operator_dimension(&self) -> usize;
    fn operator_matrix(&self) -> Cow<'_, DMatrix<C64>>;

    /// Shorthand for [`apply`].
    fn apply_to<S: QuantumState>(&self, target: &mut S) -> QuantumResult<()>
    where
        Self: Sized,
    {
        apply(self, target)
    }
}

impl Unitary for Operator {
    fn label(&self) -> String {
        self.name().to_string()
    }

    fn operator_dimension(&self) -> usize {
        self.dimension()
    }

    fn operator_matrix(&self) -> Cow<'_, DMatrix<C64>> {
        Cow::Borrowed(self.matrix())
    }
}

/// A normalized state vector that operators can be applied to: a qubit or a register.
pub trait QuantumState {
    fn state_dimension(&self) -> usize;
    fn state_vector(&self) -> DVector<C64>;

    /// Validated wholesale replacement of the amplitudes.
    fn replace_state(&mut self, ket: DVector<C64>) -> QuantumResult<()>;

    /// Fail unless an operator of dimension `dim` can act on this state.
    fn accept_operator(&self, dim: usize) -> QuantumResult<()>;

    /// Overwrite the state with basis vector `index`.
    fn collapse_to(&mut self, index: usize);

    fn probabilities(&self) -> Vec<f64> {
        self.state_vector().iter().map(|z| z.norm_sqr()).collect()
    }

    /// Sample a basis index with probability |aᵢ|² and collapse onto it.
    fn measure<R: Rng + ?Sized>(&mut self, rng: &mut R) -> QuantumResult<usize>
    where
        Self: Sized,
    {
        let index = outcome_distribution(&self.probabilities())?.sample(rng);
        self.collapse_to(index);
        trace!(index, "collapsed");
        Ok(index)
    }

    /// [`QuantumState::measure`] with the thread-local RNG.
    fn measure_random(&mut self) -> QuantumResult<usize>
    where
        Self: Sized,
    {
        self.measure(&mut rand::thread_rng())
    }

    /// Draw `shots` outcomes without collapsing; returns outcome → count.
    fn sample<R: Rng + ?Sized>(&self, shots: usize, rng: &mut R) -> QuantumResult<BTreeMap<usize, usize>>
    where
        Self: Sized,
    {
        let dist = outcome_distribution(&self.probabilities())?;
        let mut counts = BTreeMap::new();
        for _ in 0..shots {
            *counts.entry(dist.sample(rng)).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

fn outcome_distribution(probabilities: &[f64]) -> QuantumResult<WeightedIndex<f64>> {
    WeightedIndex::new(probabilities).map_err(|_| QuantumError::InvalidAmplitude {
        norm_sqr: probabilities.iter().sum(),
    })
}

/// Compute `M · ψ` and store it back through the target's validated setter.
///
/// A qubit only accepts 2×2 operators (`InvalidTarget` otherwise); a register only accepts
/// operators of its own dimension (`DimensionMismatch` otherwise).
pub fn apply<U, S>(gate: &U, target: &mut S) -> QuantumResult<()>
where
    U: Unitary + ?Sized,
    S: QuantumState,
{
    target.accept_operator(gate.operator_dimension())?;
    let matrix = gate.operator_matrix();
    let next = &*matrix * &target.state_vector();
    trace!(gate = %gate.label(), dim = matrix.nrows(), drift = (norm_sqr(next.iter()) - 1.0).abs(), "apply");
    target.replace_state(next)
}
