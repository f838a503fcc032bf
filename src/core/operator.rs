//! Unitary operators (gates) over 2^k-dimensional state spaces.
use std::fmt;

use nalgebra::DMatrix;
use num_complex::Complex64 as C64;
use tracing::trace;

use crate::core::error::{QuantumError, QuantumResult};
use crate::core::ops::matrix_power;
use crate::core::types::{ensure_unitary, tolerance, unitary_deviation};

/// Whether an operator accepts mutation after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// A user-built operator: matrix, name and power may be changed.
    Mutable,
    /// A catalog gate: mutators are accepted and ignored.
    Fixed,
}

/// A named unitary matrix of dimension 2^k.
#[derive(Clone, Debug)]
pub struct Operator {
    name: String,
    matrix: DMatrix<C64>,
    mutability: Mutability,
}

impl Default for Operator {
    /// The mutable 2×2 identity.
    fn default() -> Self {
        Self {
            name: "Identity".to_string(),
            matrix: DMatrix::identity(2, 2),
            mutability: Mutability::Mutable,
        }
    }
}

impl Operator {
    /// Build a mutable operator, rejecting non-square, non-power-of-two or non-unitary matrices.
    pub fn new(name: impl Into<String>, matrix: DMatrix<C64>) -> QuantumResult<Self> {
        ensure_unitary(&matrix)?;
        Ok(Self { name: name.into(), matrix, mutability: Mutability::Mutable })
    }

    /// Mutable identity over `qubits` qubits.
    pub fn identity(qubits: u32) -> QuantumResult<Self> {
        if qubits == 0 || qubits >= usize::BITS {
            return Err(QuantumError::InvalidDimension { rows: 1, cols: 1 });
        }
        let dim = 1usize << qubits;
        Ok(Self {
            name: "Identity".to_string(),
            matrix: DMatrix::identity(dim, dim),
            mutability: Mutability::Mutable,
        })
    }

    /// Catalog constructor. The matrices passed here are known-unitary constants.
    pub(crate) fn fixed(name: impl Into<String>, matrix: DMatrix<C64>) -> Self {
        debug_assert!(ensure_unitary(&matrix).is_ok());
        Self { name: name.into(), matrix, mutability: Mutability::Fixed }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matrix(&self) -> &DMatrix<C64> {
        &self.matrix
    }

    /// Side length of the matrix (2^k).
    pub fn dimension(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of qubits the operator acts on (k).
    pub fn qubit_count(&self) -> u32 {
        self.dimension().trailing_zeros()
    }

    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    pub fn is_fixed(&self) -> bool {
        self.mutability == Mutability::Fixed
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if self.is_fixed() {
            trace!(gate = %self.name, "set_name ignored on fixed gate");
            return;
        }
        self.name = name.into();
    }

    /// Replace the matrix. Validation happens before the swap, so a failure leaves `self` unchanged.
    pub fn set_matrix(&mut self, matrix: DMatrix<C64>) -> QuantumResult<()> {
        if self.is_fixed() {
            trace!(gate = %self.name, "set_matrix ignored on fixed gate");
            return Ok(());
        }
        ensure_unitary(&matrix)?;
        self.matrix = matrix;
        Ok(())
    }

    /// Raise the matrix to the `exp`-th power in place.
    ///
    /// `0` yields the identity; negative exponents fail with `InvalidExponent`
    /// (take [`Operator::adjoint`] for the inverse). Fixed gates ignore the call entirely,
    /// whatever the exponent.
    pub fn power(&mut self, exp: i64) -> QuantumResult<()> {
        if self.is_fixed() {
            trace!(gate = %self.name, "power ignored on fixed gate");
            return Ok(());
        }
        let exp = checked_exponent(exp)?;
        self.matrix = matrix_power(&self.matrix, exp);
        Ok(())
    }

    /// A new mutable operator equal to `self^exp`; works on fixed gates too.
    pub fn powered(&self, exp: i64) -> QuantumResult<Operator> {
        let e = checked_exponent(exp)?;
        Ok(Operator {
            name: format!("{}^{}", self.name, exp),
            matrix: matrix_power(&self.matrix, e),
            mutability: Mutability::Mutable,
        })
    }

    /// The inverse (conjugate transpose) as a new mutable operator.
    pub fn adjoint(&self) -> Operator {
        Operator {
            name: format!("{}†", self.name),
            matrix: self.matrix.adjoint(),
            mutability: Mutability::Mutable,
        }
    }

    /// Whether MᴴM = I holds within tolerance.
    pub fn unitary_check(&self) -> bool {
        unitary_deviation(&self.matrix) <= tolerance()
    }
}

fn checked_exponent(exp: i64) -> QuantumResult<u64> {
    u64::try_from(exp).map_err(|_| QuantumError::InvalidExponent(exp))
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.dimension(), self.dimension())
    }
}
