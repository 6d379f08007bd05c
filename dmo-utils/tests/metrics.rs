use dmo_utils::{igd, maximum_spread, spacing};

#[test]
fn test_igd_zero_for_identical_sets() {
    let front = vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]];
    assert_eq!(igd(&front, &front), 0.0);
}

#[test]
fn test_igd_known_offset() {
    let truth = vec![vec![0.0, 0.0]];
    let achieved = vec![vec![3.0, 4.0], vec![6.0, 8.0]];
    assert!((igd(&achieved, &truth) - 5.0).abs() < 1e-12);
}

#[test]
fn test_igd_empty_inputs_are_sentinel() {
    assert_eq!(igd(&[], &[vec![0.0, 0.0]]), 0.0);
    assert_eq!(igd(&[vec![0.0, 0.0]], &[]), 0.0);
}

#[test]
fn test_spacing_degenerate() {
    assert_eq!(spacing(&[]), 0.0);
    assert_eq!(spacing(&[vec![1.0, 2.0]]), 0.0);
}

#[test]
fn test_spacing_equally_spaced_is_zero() {
    let front: Vec<Vec<f64>> = (0..5).map(|i| vec![i as f64, -(i as f64)]).collect();
    assert!(spacing(&front) < 1e-12);
}

#[test]
fn test_spacing_uneven_is_positive() {
    let front = vec![vec![0.0, 0.0], vec![0.1, 0.1], vec![5.0, 5.0]];
    assert!(spacing(&front) > 0.0);
}

#[test]
fn test_maximum_spread_full_coverage() {
    let truth = vec![vec![0.0, 1.0], vec![0.5, 0.5], vec![1.0, 0.0]];
    assert!((maximum_spread(&truth, &truth) - 1.0).abs() < 1e-12);
}

#[test]
fn test_maximum_spread_partial_coverage() {
    let truth = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let achieved = vec![vec![0.0, 1.0], vec![0.5, 0.5]];
    let ms = maximum_spread(&achieved, &truth);
    assert!(ms > 0.0 && ms < 1.0);
}

#[test]
fn test_maximum_spread_degenerate() {
    assert_eq!(maximum_spread(&[], &[vec![0.0, 1.0]]), 0.0);
    // Zero range in every objective of the true front.
    let truth = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
    assert_eq!(maximum_spread(&[vec![1.0, 1.0]], &truth), 0.0);
}
