use dmo_transfer::{align, AlignOptions, Kernel, TransferError};

fn grid(rows: usize, width: usize, offset: f64) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|i| (0..width).map(|j| offset + i as f64 * 0.37 + j as f64 * 0.11).collect())
        .collect()
}

#[test]
fn test_output_shape_matches_target_dim() {
    let source = grid(8, 10, 0.0);
    let target = grid(12, 10, 0.5);
    let opts = AlignOptions {
        target_dim: 10,
        kernel: Kernel::Rbf { gamma: 0.5 },
        lambda: 1.0,
    };
    let z = align(&source, &target, &opts).unwrap();
    assert_eq!(z.len(), 8);
    assert!(z.iter().all(|row| row.len() == 10));
    assert!(z.iter().flatten().all(|v| v.is_finite()));
}

#[test]
fn test_output_dim_independent_of_input_width() {
    let source = grid(6, 4, 0.0);
    let target = grid(6, 4, 1.0);
    let opts = AlignOptions {
        target_dim: 3,
        kernel: Kernel::Linear,
        lambda: 1.0,
    };
    let z = align(&source, &target, &opts).unwrap();
    assert_eq!(z.len(), 6);
    assert!(z.iter().all(|row| row.len() == 3));
}

#[test]
fn test_empty_domain_is_config_error() {
    let opts = AlignOptions::default();
    assert!(matches!(
        align(&[], &grid(4, 3, 0.0), &opts),
        Err(TransferError::Config(_))
    ));
    assert!(matches!(
        align(&grid(4, 3, 0.0), &[], &opts),
        Err(TransferError::Config(_))
    ));
}

#[test]
fn test_bad_target_dim_is_config_error() {
    let source = grid(3, 2, 0.0);
    let target = grid(3, 2, 1.0);
    for target_dim in [0, 7] {
        let opts = AlignOptions {
            target_dim,
            ..AlignOptions::default()
        };
        assert!(matches!(
            align(&source, &target, &opts),
            Err(TransferError::Config(_))
        ));
    }
}

#[test]
fn test_mismatched_widths_is_config_error() {
    let source = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let target = vec![vec![0.0, 1.0, 2.0]];
    assert!(matches!(
        align(&source, &target, &AlignOptions { target_dim: 1, ..AlignOptions::default() }),
        Err(TransferError::Config(_))
    ));
}

#[test]
fn test_non_finite_input_is_instability() {
    let source = vec![vec![0.0, f64::NAN], vec![1.0, 0.0]];
    let target = vec![vec![0.5, 0.5], vec![0.2, 0.8]];
    let opts = AlignOptions {
        target_dim: 2,
        ..AlignOptions::default()
    };
    assert!(matches!(
        align(&source, &target, &opts),
        Err(TransferError::NumericalInstability(_))
    ));
}

#[test]
fn test_nonpositive_lambda_is_config_error() {
    // Without the ridge the kernel system of identical points is rank one;
    // align refuses to run unregularized rather than relying on the
    // factorization to notice.
    let source = vec![vec![1.0, 1.0]; 4];
    let target = vec![vec![1.0, 1.0]; 4];
    for lambda in [0.0, -1.0, f64::NAN] {
        let opts = AlignOptions {
            target_dim: 2,
            kernel: Kernel::Linear,
            lambda,
        };
        assert!(matches!(
            align(&source, &target, &opts),
            Err(TransferError::Config(_))
        ));
    }
}

#[test]
fn test_rbf_gram_unit_diagonal() {
    let kernel = Kernel::Rbf { gamma: 2.0 };
    let rows = grid(5, 3, 0.0);
    let k = kernel.gram(&rows);
    for i in 0..5 {
        assert!((k[(i, i)] - 1.0).abs() < 1e-12);
    }
    assert!((k[(0, 1)] - k[(1, 0)]).abs() < 1e-15);
}
