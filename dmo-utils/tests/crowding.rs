use dmo_utils::{crowding_distance, most_crowded_indices};

#[test]
fn test_endpoints_are_infinite() {
    let front = vec![vec![0.0, 5.0], vec![1.0, 1.0], vec![5.0, 0.0]];
    let d = crowding_distance(&front);
    assert!(d[0].is_infinite());
    assert!(d[2].is_infinite());
    assert!(d[1].is_finite());
    assert!(d[1] > 0.0);
}

#[test]
fn test_two_points_both_infinite() {
    let front = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let d = crowding_distance(&front);
    assert!(d.iter().all(|v| v.is_infinite()));
}

#[test]
fn test_zero_range_objective_is_noop() {
    // Second objective is constant; only the first contributes.
    let front = vec![
        vec![0.0, 1.0],
        vec![1.0, 1.0],
        vec![2.0, 1.0],
        vec![4.0, 1.0],
    ];
    let d = crowding_distance(&front);
    assert!(d[1].is_finite() && d[2].is_finite());
    assert!((d[1] - 0.5).abs() < 1e-12);
    assert!((d[2] - 0.75).abs() < 1e-12);
}

#[test]
fn test_isolated_point_ranks_first() {
    let front = vec![
        vec![0.0, 10.0],
        vec![1.0, 9.0],
        vec![1.5, 8.5],
        vec![8.0, 1.0],
        vec![10.0, 0.0],
    ];
    let picked = most_crowded_indices(&front, 3);
    assert_eq!(picked.len(), 3);
    // The interior point far from its neighbours beats the bunched ones.
    assert!(picked.contains(&3));
}
