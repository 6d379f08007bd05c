use rand::seq::SliceRandom;
use rand::Rng;

/// Samples one point uniformly within componentwise bounds.
pub fn uniform_point<R: Rng>(rng: &mut R, lower: &[f64], upper: &[f64]) -> Vec<f64> {
    lower
        .iter()
        .zip(upper)
        .map(|(&lo, &hi)| if hi > lo { rng.gen_range(lo..hi) } else { lo })
        .collect()
}

/// Samples `count` points uniformly within componentwise bounds.
pub fn uniform_population<R: Rng>(
    rng: &mut R,
    lower: &[f64],
    upper: &[f64],
    count: usize,
) -> Vec<Vec<f64>> {
    (0..count).map(|_| uniform_point(rng, lower, upper)).collect()
}

/// Latin hypercube sample: `count` points, each dimension stratified into
/// `count` equal intervals with exactly one point per interval, interval
/// assignment shuffled independently per dimension.
pub fn latin_hypercube<R: Rng>(
    rng: &mut R,
    lower: &[f64],
    upper: &[f64],
    count: usize,
) -> Vec<Vec<f64>> {
    let n_var = lower.len();
    if count == 0 {
        return Vec::new();
    }
    let mut points = vec![vec![0.0f64; n_var]; count];
    let mut strata: Vec<usize> = (0..count).collect();
    for d in 0..n_var {
        strata.shuffle(rng);
        let width = (upper[d] - lower[d]) / count as f64;
        for (i, &s) in strata.iter().enumerate() {
            let offset = if width > 0.0 {
                (s as f64 + rng.gen::<f64>()) * width
            } else {
                0.0
            };
            points[i][d] = lower[d] + offset;
        }
    }
    points
}

/// Uniform random subset of `count` indices from `0..len`, without
/// replacement. Returns all indices when `count >= len`.
pub fn random_subset_indices<R: Rng>(rng: &mut R, len: usize, count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    if count >= len {
        return indices;
    }
    indices.shuffle(rng);
    indices.truncate(count);
    indices
}
