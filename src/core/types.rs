//! Shared numeric types and the invariant checks every state and operator goes through.
use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

use crate::core::error::{QuantumError, QuantumResult};

/// Tolerance for both the normalization (Σ|aᵢ|² = 1) and unitarity (MᴴM = I) checks.
pub const TOLERANCE: f64 = 1e-10;

#[cfg(not(test))]
#[inline]
pub(crate) fn tolerance() -> f64 {
    TOLERANCE
}

#[cfg(test)]
thread_local! {
    static TOLERANCE_OVERRIDE: std::cell::Cell<f64> = const { std::cell::Cell::new(TOLERANCE) };
}

#[cfg(test)]
pub(crate) fn tolerance() -> f64 {
    TOLERANCE_OVERRIDE.with(|t| t.get())
}

/// Run `f` with a loosened (or tightened) tolerance on the current thread.
#[cfg(test)]
pub(crate) fn with_tolerance<T>(tol: f64, f: impl FnOnce() -> T) -> T {
    let previous = TOLERANCE_OVERRIDE.with(|t| t.replace(tol));
    let out = f();
    TOLERANCE_OVERRIDE.with(|t| t.set(previous));
    out
}

/// Values usable as a single amplitude: complex numbers, and real floats or integers
/// (imaginary part zero), so `Qubit::new(1, 0)` works as well as `Qubit::new(1.0, 0.0)`.
pub trait IntoAmplitude {
    fn into_amplitude(self) -> C64;
}

impl IntoAmplitude for C64 {
    fn into_amplitude(self) -> C64 {
        self
    }
}

macro_rules! real_amplitude {
    ($($t:ty),*) => {
        $(impl IntoAmplitude for $t {
            fn into_amplitude(self) -> C64 {
                C64::new(f64::from(self), 0.0)
            }
        })*
    };
}

real_amplitude!(f64, f32, i32, i16, i8, u32, u16, u8);

/// Σ|aᵢ|² over a sequence of amplitudes.
pub fn norm_sqr<'a>(amplitudes: impl IntoIterator<Item = &'a C64>) -> f64 {
    amplitudes.into_iter().map(|z| z.norm_sqr()).sum()
}

/// Reject NaN / infinite components; those are not usable amplitudes.
pub(crate) fn ensure_finite<'a>(amplitudes: impl IntoIterator<Item = &'a C64>) -> QuantumResult<()> {
    for (i, z) in amplitudes.into_iter().enumerate() {
        if !z.is_finite() {
            return Err(QuantumError::type_mismatch(format!(
                "amplitude {i} is not a finite number ({z})"
            )));
        }
    }
    Ok(())
}

pub(crate) fn ensure_normalized(amplitudes: &[C64]) -> QuantumResult<()> {
    ensure_finite(amplitudes)?;
    let total = norm_sqr(amplitudes);
    if (total - 1.0).abs() > tolerance() {
        return Err(QuantumError::InvalidAmplitude { norm_sqr: total });
    }
    Ok(())
}

/// `true` for 2, 4, 8, … (a state or operator must cover at least one qubit).
#[inline]
pub fn is_qubit_dimension(n: usize) -> bool {
    n >= 2 && n.is_power_of_two()
}

pub(crate) fn ensure_operator_shape(m: &DMatrix<C64>) -> QuantumResult<()> {
    if m.nrows() != m.ncols() || !is_qubit_dimension(m.nrows()) {
        return Err(QuantumError::InvalidDimension { rows: m.nrows(), cols: m.ncols() });
    }
    Ok(())
}

/// Largest elementwise deviation of MᴴM from the identity.
pub fn unitary_deviation(m: &DMatrix<C64>) -> f64 {
    let u_dag_u = m.adjoint() * m;
    let i = DMatrix::<C64>::identity(m.nrows(), m.ncols());
    (u_dag_u - i).iter().map(|z| z.norm()).fold(0.0_f64, f64::max)
}

pub(crate) fn ensure_unitary(m: &DMatrix<C64>) -> QuantumResult<()> {
    ensure_operator_shape(m)?;
    ensure_finite(m.iter())?;
    let deviation = unitary_deviation(m);
    if deviation > tolerance() {
        return Err(QuantumError::NotUnitary { deviation });
    }
    Ok(())
}
