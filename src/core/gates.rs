//! Named gate catalog. Every gate here is a fixed [`Operator`].
//!
//! Multi-qubit gates use big-endian ordering: qubit 0 is the most significant bit
//! of the basis index, so CNOT(0, 1) maps |10> to |11>.
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;

use crate::core::error::{QuantumError, QuantumResult};
use crate::core::operator::Operator;
use crate::core::ops::{c, permutation, qubit_bit};

fn diag(entries: &[C64]) -> DMatrix<C64> {
    DMatrix::from_diagonal(&DVector::from_vec(entries.to_vec()))
}

pub fn hadamard() -> Operator {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    Operator::fixed(
        "Hadamard",
        DMatrix::from_row_slice(2, 2, &[c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0)]),
    )
}

/// √X: squaring it gives Pauli-X.
pub fn square_not() -> Operator {
    Operator::fixed(
        "Square-Not",
        DMatrix::from_row_slice(2, 2, &[c(0.5, 0.5), c(0.5, -0.5), c(0.5, -0.5), c(0.5, 0.5)]),
    )
}

pub fn pauli_x() -> Operator {
    Operator::fixed(
        "Pauli-X",
        DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)]),
    )
}

pub fn pauli_y() -> Operator {
    Operator::fixed(
        "Pauli-Y",
        DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)]),
    )
}

pub fn pauli_z() -> Operator {
    Operator::fixed("Pauli-Z", diag(&[c(1.0, 0.0), c(-1.0, 0.0)]))
}

pub fn phase() -> Operator {
    Operator::fixed("Phase", diag(&[c(1.0, 0.0), c(0.0, 1.0)]))
}

pub fn pi8() -> Operator {
    let phi = std::f64::consts::FRAC_PI_4;
    Operator::fixed("π/8", diag(&[c(1.0, 0.0), C64::from_polar(1.0, phi)]))
}

pub fn swap() -> Operator {
    Operator::fixed("Swap", permutation(4, |i| ((i & 1) << 1) | (i >> 1)))
}

/// √SWAP: squaring it gives Swap.
pub fn square_swap() -> Operator {
    let (p, m) = (c(0.5, 0.5), c(0.5, -0.5));
    let (o, z) = (c(1.0, 0.0), c(0.0, 0.0));
    Operator::fixed(
        "Square-Swap",
        DMatrix::from_row_slice(4, 4, &[o, z, z, z, z, p, m, z, z, m, p, z, z, z, z, o]),
    )
}

/// Controlled-Not on a 2-qubit block; `(control, target)` is `(0, 1)` or `(1, 0)`.
pub fn cnot(control: usize, target: usize) -> QuantumResult<Operator> {
    if control > 1 {
        return Err(QuantumError::index(control, "control 0 or 1"));
    }
    if target > 1 || target == control {
        return Err(QuantumError::index(target, format!("target {}", 1 - control)));
    }
    Ok(cnot_block(control))
}

// control < 2; the target is the other qubit
fn cnot_block(control: usize) -> Operator {
    let target = 1 - control;
    let m = permutation(4, |i| {
        if qubit_bit(i, control, 2) == 1 {
            i ^ (1 << (1 - target))
        } else {
            i
        }
    });
    Operator::fixed("Controlled-Not", m)
}

pub fn controlled_z() -> Operator {
    let o = c(1.0, 0.0);
    Operator::fixed("Controlled-Z", diag(&[o, o, o, c(-1.0, 0.0)]))
}

pub fn controlled_phase() -> Operator {
    let o = c(1.0, 0.0);
    Operator::fixed("Controlled-Phase", diag(&[o, o, o, c(0.0, 1.0)]))
}

/// Ising XX-type coupling with phase `phi` (radians).
pub fn ising(phi: f64) -> QuantumResult<Operator> {
    if !phi.is_finite() {
        return Err(QuantumError::type_mismatch(format!("Ising phase must be a finite number, got {phi}")));
    }
    Ok(ising_block(phi))
}

fn ising_block(phi: f64) -> Operator {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    let (o, z) = (c(s, 0.0), c(0.0, 0.0));
    let mi = c(0.0, -s);
    let corner_hi = c(0.0, -1.0) * C64::from_polar(s, phi);
    let corner_lo = c(0.0, -1.0) * C64::from_polar(s, -phi);
    Operator::fixed(
        "Ising",
        DMatrix::from_row_slice(
            4,
            4,
            &[o, z, z, corner_hi, z, o, mi, z, z, mi, o, z, corner_lo, z, z, o],
        ),
    )
}

/// Toffoli (CCNOT) on a 3-qubit block: flips `target` when the other two qubits are set.
pub fn toffoli(target: usize) -> QuantumResult<Operator> {
    if target > 2 {
        return Err(QuantumError::index(target, "target 0, 1 or 2"));
    }
    Ok(toffoli_block(target))
}

fn toffoli_block(target: usize) -> Operator {
    let m = permutation(8, |i| {
        let controls_set = (0..3).filter(|&q| q != target).all(|q| qubit_bit(i, q, 3) == 1);
        if controls_set {
            i ^ (1 << (2 - target))
        } else {
            i
        }
    });
    Operator::fixed("Toffoli", m)
}

/// Fredkin (CSWAP) on a 3-qubit block: swaps the other two qubits when `control` is set.
pub fn fredkin(control: usize) -> QuantumResult<Operator> {
    if control > 2 {
        return Err(QuantumError::index(control, "control 0, 1 or 2"));
    }
    Ok(fredkin_block(control))
}

fn fredkin_block(control: usize) -> Operator {
    let (a, b) = match control {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };
    let m = permutation(8, |i| {
        if qubit_bit(i, control, 3) == 1 && qubit_bit(i, a, 3) != qubit_bit(i, b, 3) {
            i ^ (1 << (2 - a)) ^ (1 << (2 - b))
        } else {
            i
        }
    });
    Operator::fixed("Fredkin", m)
}

/// Parameterless gates by name (case-insensitive, common aliases accepted).
pub fn by_name(name: &str) -> Option<Operator> {
    let g = match name.to_ascii_lowercase().as_str() {
        "identity" | "i" => Operator::default(),
        "hadamard" | "h" => hadamard(),
        "square-not" | "sqrt-not" | "sqrt-x" => square_not(),
        "pauli-x" | "x" | "not" => pauli_x(),
        "pauli-y" | "y" => pauli_y(),
        "pauli-z" | "z" => pauli_z(),
        "phase" | "s" => phase(),
        "pi8" | "pi/8" | "π/8" | "t" => pi8(),
        "swap" => swap(),
        "square-swap" | "sqrt-swap" => square_swap(),
        "controlled-z" | "cz" => controlled_z(),
        "controlled-phase" | "cs" => controlled_phase(),
        _ => return None,
    };
    Some(g)
}

/// Every catalog gate: both CNOT orientations, Ising at φ = 0, and each Toffoli target and
/// Fredkin control.
pub fn catalog() -> Vec<Operator> {
    let mut all = vec![
        hadamard(),
        square_not(),
        pauli_x(),
        pauli_y(),
        pauli_z(),
        phase(),
        pi8(),
        swap(),
        square_swap(),
        controlled_z(),
        controlled_phase(),
        cnot_block(0),
        cnot_block(1),
        ising_block(0.0),
    ];
    all.extend((0..3).map(toffoli_block));
    all.extend((0..3).map(fredkin_block));
    all
}
