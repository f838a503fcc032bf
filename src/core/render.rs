//! Human-readable rendering of state vectors: `|Ψ> = (a+bi)|0> + (c+di)|1>`.
use num_complex::Complex64 as C64;

/// Values that would print as ±0.0000 are shown as 0.0000.
fn clean(x: f64) -> f64 {
    if x.abs() < 5e-5 {
        0.0
    } else {
        x
    }
}

pub(crate) fn format_amplitude(z: C64) -> String {
    format!("({:.4}{:+.4}i)", clean(z.re), clean(z.im))
}

/// Binary basis label with one digit per qubit, qubit 0 leftmost.
pub fn basis_label(index: usize, qubits: usize) -> String {
    format!("{index:0qubits$b}")
}

pub fn render_state(amplitudes: &[C64], qubits: usize) -> String {
    let terms: Vec<String> = amplitudes
        .iter()
        .enumerate()
        .map(|(i, z)| format!("{}|{}>", format_amplitude(*z), basis_label(i, qubits)))
        .collect();
    format!("|Ψ> = {}", terms.join(" + "))
}
