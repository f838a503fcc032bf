//! Kronecker products, matrix powers and permutation builders.
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;

#[inline]
pub(crate) fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

/// Kronecker product A ⊗ B. `A` occupies the most significant block.
pub fn kron(a: &DMatrix<C64>, b: &DMatrix<C64>) -> DMatrix<C64> {
    let (ar, ac) = (a.nrows(), a.ncols());
    let (br, bc) = (b.nrows(), b.ncols());
    let mut out = DMatrix::<C64>::from_element(ar * br, ac * bc, c(0.0, 0.0));
    for i in 0..ar {
        for j in 0..ac {
            let aij = a[(i, j)];
            if aij == c(0.0, 0.0) {
                continue;
            }
            for k in 0..br {
                for l in 0..bc {
                    out[(i * br + k, j * bc + l)] = aij * b[(k, l)];
                }
            }
        }
    }
    out
}

/// Kronecker product of two state vectors, `a` most significant.
pub fn kron_vec(a: &DVector<C64>, b: &DVector<C64>) -> DVector<C64> {
    DVector::from_iterator(
        a.len() * b.len(),
        a.iter().flat_map(|x| b.iter().map(move |y| x * y)),
    )
}

/// `m^exp` by repeated squaring; `exp == 0` gives the identity.
pub fn matrix_power(m: &DMatrix<C64>, mut exp: u64) -> DMatrix<C64> {
    let mut result = DMatrix::<C64>::identity(m.nrows(), m.ncols());
    let mut base = m.clone();
    while exp > 0 {
        if exp & 1 == 1 {
            result = &result * &base;
        }
        exp >>= 1;
        if exp > 0 {
            base = &base * &base;
        }
    }
    result
}

/// Permutation matrix sending basis state `i` to `map(i)`.
///
/// `map` must be a bijection on `0..dim`.
pub fn permutation(dim: usize, map: impl Fn(usize) -> usize) -> DMatrix<C64> {
    let mut m = DMatrix::<C64>::from_element(dim, dim, c(0.0, 0.0));
    for basis in 0..dim {
        m[(map(basis), basis)] = c(1.0, 0.0);
    }
    m
}

/// Bit of qubit `q` in basis index `index` of an `n`-qubit register (qubit 0 most significant).
#[inline]
pub fn qubit_bit(index: usize, q: usize, n: usize) -> usize {
    (index >> (n - 1 - q)) & 1
}
