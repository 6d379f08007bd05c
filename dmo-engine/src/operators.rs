use rand::Rng;

/// Simulated binary crossover. Produces two children; each gene pair is
/// recombined with probability 0.5, otherwise copied through.
pub fn sbx_crossover<R: Rng>(
    rng: &mut R,
    p1: &[f64],
    p2: &[f64],
    lower: &[f64],
    upper: &[f64],
    eta: f64,
) -> (Vec<f64>, Vec<f64>) {
    let n = p1.len();
    let mut c1 = p1.to_vec();
    let mut c2 = p2.to_vec();
    for i in 0..n {
        if rng.gen::<f64>() > 0.5 || (p1[i] - p2[i]).abs() < 1e-14 {
            continue;
        }
        let u: f64 = rng.gen();
        let beta = if u <= 0.5 {
            (2.0 * u).powf(1.0 / (eta + 1.0))
        } else {
            (1.0 / (2.0 * (1.0 - u))).powf(1.0 / (eta + 1.0))
        };
        let v1 = 0.5 * ((1.0 + beta) * p1[i] + (1.0 - beta) * p2[i]);
        let v2 = 0.5 * ((1.0 - beta) * p1[i] + (1.0 + beta) * p2[i]);
        c1[i] = v1.clamp(lower[i], upper[i]);
        c2[i] = v2.clamp(lower[i], upper[i]);
    }
    (c1, c2)
}

/// Polynomial mutation with per-gene probability `prob`.
pub fn polynomial_mutation<R: Rng>(
    rng: &mut R,
    x: &mut [f64],
    lower: &[f64],
    upper: &[f64],
    eta: f64,
    prob: f64,
) {
    for i in 0..x.len() {
        if rng.gen::<f64>() >= prob {
            continue;
        }
        let range = upper[i] - lower[i];
        if range <= 0.0 {
            continue;
        }
        let u: f64 = rng.gen();
        let delta = if u < 0.5 {
            (2.0 * u).powf(1.0 / (eta + 1.0)) - 1.0
        } else {
            1.0 - (2.0 * (1.0 - u)).powf(1.0 / (eta + 1.0))
        };
        x[i] = (x[i] + delta * range).clamp(lower[i], upper[i]);
    }
}

/// Clamps every component into the problem bounds.
pub fn clamp_into_bounds(x: &mut [f64], lower: &[f64], upper: &[f64]) {
    for i in 0..x.len() {
        x[i] = x[i].clamp(lower[i], upper[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_sbx_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let lower = vec![0.0; 4];
        let upper = vec![1.0; 4];
        for _ in 0..100 {
            let (c1, c2) = sbx_crossover(
                &mut rng,
                &[0.1, 0.9, 0.5, 0.0],
                &[0.9, 0.1, 0.5, 1.0],
                &lower,
                &upper,
                15.0,
            );
            for c in [&c1, &c2] {
                assert!(c.iter().all(|&v| (0.0..=1.0).contains(&v)));
            }
        }
    }

    #[test]
    fn test_mutation_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let lower = vec![-1.0; 5];
        let upper = vec![1.0; 5];
        let mut x = vec![0.99, -0.99, 0.0, 0.5, -0.5];
        for _ in 0..100 {
            polynomial_mutation(&mut rng, &mut x, &lower, &upper, 20.0, 1.0);
            assert!(x.iter().all(|&v| (-1.0..=1.0).contains(&v)));
        }
    }

    #[test]
    fn test_clamp() {
        let mut x = vec![-2.0, 0.5, 3.0];
        clamp_into_bounds(&mut x, &[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]);
        assert_eq!(x, vec![0.0, 0.5, 1.0]);
    }
}
