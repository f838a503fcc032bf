//! qvantum: a small state-vector quantum circuit simulator.
//!
//! ```
//! use qvantum::core::{gates, Circuit, Layer, QuantumState, Register};
//!
//! let mut reg = Register::zero(2).unwrap();
//! let circuit = Circuit::new(vec![
//!     Layer::new([gates::hadamard(), Default::default()]).unwrap(),
//!     Layer::new([gates::cnot(0, 1).unwrap()]).unwrap(),
//! ]);
//! circuit.run(&mut reg).unwrap();
//! let p = reg.probabilities();
//! assert!((p[0] - 0.5).abs() < 1e-12 && (p[3] - 0.5).abs() < 1e-12);
//! ```
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;

pub use crate::core::{
    apply, Circuit, IntoAmplitude, Layer, Mutability, Operator, QuantumError, QuantumResult,
    QuantumState, Qubit, Register, Unitary,
};
