//! Simulation engine: states, operators, layers and circuits.
//!
//! Basis ordering is big-endian throughout: qubit 0 is the most significant bit of a basis
//! index, and the first gate of a layer acts on the most significant qubits.

pub mod apply;
pub mod circuit;
pub mod circuit_file;
pub mod error;
pub mod gates;
pub mod layer;
pub mod operator;
pub mod ops;
pub mod qubit;
pub mod register;
pub mod render;
pub mod types;

pub use apply::{apply, QuantumState, Unitary};
pub use circuit::Circuit;
pub use error::{QuantumError, QuantumResult};
pub use layer::Layer;
pub use operator::{Mutability, Operator};
pub use qubit::Qubit;
pub use register::Register;
pub use types::{IntoAmplitude, TOLERANCE};
