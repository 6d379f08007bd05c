fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Inverted generational distance: mean distance from each true-front point
/// to its nearest achieved point. Lower is better. Returns 0.0 when either
/// set is empty rather than propagating NaN.
pub fn igd(achieved: &[Vec<f64>], true_front: &[Vec<f64>]) -> f64 {
    if achieved.is_empty() || true_front.is_empty() {
        return 0.0;
    }
    let total: f64 = true_front
        .iter()
        .map(|p| {
            achieved
                .iter()
                .map(|q| euclidean(p, q))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();
    total / true_front.len() as f64
}

/// Spacing (SP): standard deviation of nearest-neighbour distances within
/// the achieved set. Near 0 for uniformly spread fronts. Fewer than 2
/// points yields 0.0.
pub fn spacing(achieved: &[Vec<f64>]) -> f64 {
    let n = achieved.len();
    if n < 2 {
        return 0.0;
    }
    let nearest: Vec<f64> = achieved
        .iter()
        .enumerate()
        .map(|(i, p)| {
            achieved
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, q)| euclidean(p, q))
                .fold(f64::INFINITY, f64::min)
        })
        .collect();
    let mean = nearest.iter().sum::<f64>() / n as f64;
    let var = nearest.iter().map(|d| (mean - d) * (mean - d)).sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}

/// Maximum spread (MS): per-objective overlap of the achieved extent with
/// the true-front extent, aggregated over objectives. 1.0 means the
/// achieved set covers the full true front in every objective. Objectives
/// with zero true-front range are skipped; if none remain, returns 0.0.
pub fn maximum_spread(achieved: &[Vec<f64>], true_front: &[Vec<f64>]) -> f64 {
    if achieved.is_empty() || true_front.is_empty() {
        return 0.0;
    }
    let n_obj = true_front[0].len();
    let mut sum = 0.0;
    let mut used = 0;
    for m in 0..n_obj {
        let (pf_min, pf_max) = min_max(true_front, m);
        let range = pf_max - pf_min;
        if range <= 0.0 || !range.is_finite() {
            continue;
        }
        let (f_min, f_max) = min_max(achieved, m);
        let overlap = (f_max.min(pf_max) - f_min.max(pf_min)).max(0.0) / range;
        sum += overlap * overlap;
        used += 1;
    }
    if used == 0 {
        return 0.0;
    }
    (sum / used as f64).sqrt()
}

fn min_max(points: &[Vec<f64>], m: usize) -> (f64, f64) {
    points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p[m]), hi.max(p[m]))
    })
}
