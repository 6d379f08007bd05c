use crate::{ElitePool, TransferSettings};
use dmo_problems::DynamicProblem;
use dmo_transfer::{align, AlignOptions, Kernel, TransferError};
use dmo_utils::{
    most_crowded_indices, non_dominated_indices, random_subset_indices, uniform_point,
    uniform_population,
};
use rand::Rng;

/// Bounds an oversized archive to `max_elements` candidates for transfer.
///
/// Ranking is by ascending sum of objective values under the current
/// environment. This is a crude scalarization, not a dominance-respecting
/// selection; it exists only to cap the aligner's input size cheaply.
pub fn select_transfer_subset(
    archive: &[Vec<f64>],
    problem: &dyn DynamicProblem,
    max_elements: usize,
) -> Vec<Vec<f64>> {
    if archive.is_empty() || archive.len() <= max_elements {
        return archive.to_vec();
    }
    let mut order: Vec<usize> = (0..archive.len()).collect();
    let sums: Vec<f64> = archive
        .iter()
        .map(|x| problem.evaluate(x).iter().sum())
        .collect();
    order.sort_by(|&a, &b| {
        sums[a]
            .partial_cmp(&sums[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
        .into_iter()
        .take(max_elements)
        .map(|i| archive[i].clone())
        .collect()
}

/// Assembles the seed population for a non-initial environment from
/// transferred, random, and crowding-selected elite individuals, padding
/// with uniform samples to exactly `population_size`.
///
/// Transfer is skipped when the archive is empty or the aligner reports
/// numerical instability; the seed then falls back to random + elite.
pub fn build_seed_population<R: Rng>(
    pool: &ElitePool,
    problem: &dyn DynamicProblem,
    population_size: usize,
    settings: &TransferSettings,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    let lower = problem.lower_bounds();
    let upper = problem.upper_bounds();
    let mut seeds: Vec<Vec<f64>> = Vec::with_capacity(population_size);

    let transferred = transfer_candidates(pool, problem, settings, rng);
    for i in random_subset_indices(rng, transferred.len(), settings.transfer_count) {
        let mut x = transferred[i].clone();
        // Transformed vectors live in the aligned space; clamping them into
        // the decision bounds is the documented re-embedding policy.
        for (v, (lo, hi)) in x.iter_mut().zip(lower.iter().zip(upper)) {
            *v = v.clamp(*lo, *hi);
        }
        seeds.push(x);
    }

    seeds.extend(uniform_population(rng, lower, upper, settings.random_count));

    if !pool.is_empty() {
        let objectives: Vec<Vec<f64>> = pool
            .members()
            .iter()
            .map(|x| problem.evaluate(x))
            .collect();
        let front = non_dominated_indices(&objectives);
        let front_objectives: Vec<Vec<f64>> =
            front.iter().map(|&i| objectives[i].clone()).collect();
        for pos in most_crowded_indices(&front_objectives, settings.elite_count) {
            seeds.push(pool.members()[front[pos]].clone());
        }
    }

    seeds.truncate(population_size);
    while seeds.len() < population_size {
        seeds.push(uniform_point(rng, lower, upper));
    }
    seeds
}

fn transfer_candidates<R: Rng>(
    pool: &ElitePool,
    problem: &dyn DynamicProblem,
    settings: &TransferSettings,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    let subset = select_transfer_subset(pool.members(), problem, settings.subset_cap);
    if subset.is_empty() {
        return Vec::new();
    }
    let target = uniform_population(
        rng,
        problem.lower_bounds(),
        problem.upper_bounds(),
        settings.pool_size,
    );
    let opts = AlignOptions {
        // Pinned to the decision-space width so transferred vectors have
        // the right arity for direct reuse.
        target_dim: problem.n_var(),
        kernel: Kernel::Rbf {
            gamma: settings.gamma,
        },
        lambda: settings.lambda,
    };
    match align(&subset, &target, &opts) {
        Ok(transformed) => transformed,
        Err(TransferError::NumericalInstability(_)) | Err(TransferError::Config(_)) => Vec::new(),
    }
}
