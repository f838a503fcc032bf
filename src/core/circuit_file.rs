//! TOML circuit descriptions.
//!
//! ```toml
//! qubits = 2                      # or: amplitudes = [0.6, [0.0, 0.8], 0, 0]
//!
//! [[layer]]
//! gates = ["hadamard", "identity"]
//!
//! [[layer]]
//! gates = [{ name = "cnot", control = 0, target = 1 }]
//! ```
use std::path::Path;
use std::sync::Arc;

use num_complex::Complex64 as C64;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::core::circuit::Circuit;
use crate::core::error::QuantumError;
use crate::core::gates;
use crate::core::layer::Layer;
use crate::core::operator::Operator;
use crate::core::register::Register;

#[derive(Debug, Error)]
pub enum CircuitFileError {
    #[error("failed to read circuit file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed circuit file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("circuit file needs exactly one of `qubits` or `amplitudes`")]
    MissingState,
    #[error("layer {layer}, gate {gate}: {source}")]
    Gate {
        layer: usize,
        gate: usize,
        #[source]
        source: QuantumError,
    },
    #[error(transparent)]
    Quantum(#[from] QuantumError),
}

/// A register and the circuit to run on it.
#[derive(Debug, Clone)]
pub struct CircuitFile {
    pub register: Register,
    pub circuit: Circuit,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CircuitDoc {
    qubits: Option<usize>,
    amplitudes: Option<Vec<toml::Value>>,
    #[serde(default, rename = "layer")]
    layers: Vec<LayerDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayerDoc {
    gates: Vec<GateDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GateDoc {
    Name(String),
    Table(GateTable),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GateTable {
    name: String,
    control: Option<usize>,
    target: Option<usize>,
    phi: Option<toml::Value>,
    power: Option<i64>,
    #[serde(default)]
    adjoint: bool,
}

pub fn load_circuit_file(path: impl AsRef<Path>) -> Result<CircuitFile, CircuitFileError> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = src.len(), "loading circuit file");
    parse_circuit(&src)
}

pub fn parse_circuit(src: &str) -> Result<CircuitFile, CircuitFileError> {
    let doc: CircuitDoc = toml::from_str(src)?;

    let register = match (doc.qubits, doc.amplitudes) {
        (Some(n), None) => Register::zero(n)?,
        (None, Some(values)) => {
            let amplitudes = values.iter().map(amplitude).collect::<Result<Vec<_>, _>>()?;
            Register::new(amplitudes)?
        }
        _ => return Err(CircuitFileError::MissingState),
    };

    let mut circuit = Circuit::default();
    for (li, layer) in doc.layers.into_iter().enumerate() {
        let mut ops: Vec<Arc<Operator>> = Vec::with_capacity(layer.gates.len());
        for (gi, entry) in layer.gates.iter().enumerate() {
            let op = resolve_gate(entry)
                .map_err(|source| CircuitFileError::Gate { layer: li, gate: gi, source })?;
            ops.push(Arc::new(op));
        }
        let layer = Layer::new(ops)
            .map_err(|source| CircuitFileError::Gate { layer: li, gate: 0, source })?;
        circuit.push_layer(layer);
    }

    Ok(CircuitFile { register, circuit })
}

fn number(value: &toml::Value, what: &str) -> Result<f64, QuantumError> {
    match value {
        toml::Value::Integer(i) => Ok(*i as f64),
        toml::Value::Float(f) => Ok(*f),
        other => Err(QuantumError::type_mismatch(format!(
            "{what} must be a number, got {}",
            other.type_str()
        ))),
    }
}

/// A real number or a `[re, im]` pair.
fn amplitude(value: &toml::Value) -> Result<C64, QuantumError> {
    match value {
        toml::Value::Array(parts) if parts.len() == 2 => Ok(C64::new(
            number(&parts[0], "amplitude real part")?,
            number(&parts[1], "amplitude imaginary part")?,
        )),
        other => Ok(C64::new(number(other, "amplitude")?, 0.0)),
    }
}

fn resolve_gate(entry: &GateDoc) -> Result<Operator, QuantumError> {
    let table = match entry {
        GateDoc::Name(name) => {
            return gates::by_name(name).ok_or_else(|| QuantumError::UnknownGate(name.clone()));
        }
        GateDoc::Table(t) => t,
    };

    let base = match table.name.to_ascii_lowercase().as_str() {
        "cnot" | "controlled-not" | "cx" => {
            gates::cnot(table.control.unwrap_or(0), table.target.unwrap_or(1))?
        }
        "toffoli" | "ccnot" | "ccx" => gates::toffoli(table.target.unwrap_or(2))?,
        "fredkin" | "cswap" => gates::fredkin(table.control.unwrap_or(0))?,
        "ising" => {
            let phi = table
                .phi
                .as_ref()
                .ok_or_else(|| QuantumError::type_mismatch("ising needs a numeric `phi`"))?;
            gates::ising(number(phi, "phi")?)?
        }
        other => gates::by_name(other).ok_or_else(|| QuantumError::UnknownGate(table.name.clone()))?,
    };

    let base = match table.power {
        Some(p) => base.powered(p)?,
        None => base,
    };
    Ok(if table.adjoint { base.adjoint() } else { base })
}
