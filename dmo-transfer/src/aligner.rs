use crate::{Kernel, TransferError};
use nalgebra::{Cholesky, DMatrix, SymmetricEigen};

#[derive(Debug, Copy, Clone)]
pub struct AlignOptions {
    /// Dimensionality of the shared representation. Output rows have this
    /// many columns regardless of the input decision-space width.
    pub target_dim: usize,
    pub kernel: Kernel,
    /// Ridge regularizer for the kernel smoothing step.
    pub lambda: f64,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            target_dim: 10,
            kernel: Kernel::Rbf { gamma: 0.5 },
            lambda: 1.0,
        }
    }
}

/// Projects `source` rows into the aligned subspace shared with `target`.
///
/// Steps: stack source over target, build the Gram matrix K, build the MMD
/// block matrix L over domain membership, smooth Kc = (K + λI)⁻¹K, take
/// the `target_dim` eigenvectors of Kc·L·Kc with the *largest* eigenvalues,
/// and return the first `ns` rows of K·W.
///
/// Retaining the largest eigenvalues of a quantity structured as a mismatch
/// penalty is inherited from the reference technique and deliberately not
/// inverted here.
pub fn align(
    source: &[Vec<f64>],
    target: &[Vec<f64>],
    opts: &AlignOptions,
) -> Result<Vec<Vec<f64>>, TransferError> {
    let ns = source.len();
    let nt = target.len();
    if ns == 0 || nt == 0 {
        return Err(TransferError::Config(format!(
            "both domains must be non-empty (source: {}, target: {})",
            ns, nt
        )));
    }
    let n = ns + nt;
    if opts.target_dim == 0 || opts.target_dim > n {
        return Err(TransferError::Config(format!(
            "target_dim must be in 1..={}, got {}",
            n, opts.target_dim
        )));
    }
    if !(opts.lambda > 0.0) || !opts.lambda.is_finite() {
        return Err(TransferError::Config(format!(
            "lambda must be positive and finite, got {}",
            opts.lambda
        )));
    }
    let width = source[0].len();
    let stacked: Vec<&Vec<f64>> = source.iter().chain(target.iter()).collect();
    if stacked.iter().any(|row| row.len() != width) {
        return Err(TransferError::Config(
            "all rows must have the same width".to_string(),
        ));
    }
    if stacked
        .iter()
        .any(|row| row.iter().any(|v| !v.is_finite()))
    {
        return Err(TransferError::NumericalInstability(
            "non-finite input values".to_string(),
        ));
    }

    let rows: Vec<Vec<f64>> = stacked.into_iter().cloned().collect();
    let k = opts.kernel.gram(&rows);

    // MMD block matrix over domain membership.
    let ss = 1.0 / (ns * ns) as f64;
    let tt = 1.0 / (nt * nt) as f64;
    let st = -1.0 / (ns * nt) as f64;
    let l = DMatrix::from_fn(n, n, |i, j| match (i < ns, j < ns) {
        (true, true) => ss,
        (false, false) => tt,
        _ => st,
    });

    // Kc = (K + λI)⁻¹ K via Cholesky of the ridge system.
    let ridged = &k + DMatrix::identity(n, n) * opts.lambda;
    let chol = Cholesky::new(ridged).ok_or_else(|| {
        TransferError::NumericalInstability("ridge system is not positive definite".to_string())
    })?;
    let kc = chol.solve(&k);

    let mut m = &kc * &l * &kc;
    // Symmetrize against rounding before the symmetric eigensolver.
    m = (&m + m.transpose()) * 0.5;
    let eigen = SymmetricEigen::try_new(m, 1.0e-12, 500).ok_or_else(|| {
        TransferError::NumericalInstability("eigendecomposition did not converge".to_string())
    })?;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[b]
            .partial_cmp(&eigen.eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut w = DMatrix::zeros(n, opts.target_dim);
    for (col, &idx) in order.iter().take(opts.target_dim).enumerate() {
        w.set_column(col, &eigen.eigenvectors.column(idx));
    }

    let z = &k * &w;
    let transformed: Vec<Vec<f64>> = (0..ns)
        .map(|i| z.row(i).iter().cloned().collect())
        .collect();
    if transformed
        .iter()
        .any(|row| row.iter().any(|v| !v.is_finite()))
    {
        return Err(TransferError::NumericalInstability(
            "non-finite values in transformed output".to_string(),
        ));
    }
    Ok(transformed)
}
