/// Crowding distance of each point on a front, summed over objectives.
///
/// Per objective the points are sorted by value, the two extremes get an
/// infinite distance, and interior points accumulate the normalized gap
/// between their neighbours. An objective with zero range contributes
/// nothing. Higher means more isolated.
pub fn crowding_distance(objectives: &[Vec<f64>]) -> Vec<f64> {
    let n = objectives.len();
    if n == 0 {
        return Vec::new();
    }
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }
    let n_obj = objectives[0].len();
    let mut distances = vec![0.0f64; n];
    for m in 0..n_obj {
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            objectives[a][m]
                .partial_cmp(&objectives[b][m])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let min_v = objectives[order[0]][m];
        let max_v = objectives[order[n - 1]][m];
        let range = max_v - min_v;
        distances[order[0]] = f64::INFINITY;
        distances[order[n - 1]] = f64::INFINITY;
        if range <= 0.0 {
            continue;
        }
        for w in order.windows(3) {
            let (prev, mid, next) = (w[0], w[1], w[2]);
            if distances[mid].is_finite() {
                distances[mid] += (objectives[next][m] - objectives[prev][m]) / range;
            }
        }
    }
    distances
}

/// Indices of the `count` points with the largest crowding distance,
/// in descending distance order. Ties keep input order.
pub fn most_crowded_indices(objectives: &[Vec<f64>], count: usize) -> Vec<usize> {
    let distances = crowding_distance(objectives);
    let mut order: Vec<usize> = (0..objectives.len()).collect();
    order.sort_by(|&a, &b| {
        distances[b]
            .partial_cmp(&distances[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(count);
    order
}
