use dmo_utils::{latin_hypercube, random_subset_indices, uniform_population};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_uniform_population_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let lower = vec![-1.0, 0.0, 5.0];
    let upper = vec![1.0, 2.0, 6.0];
    let pop = uniform_population(&mut rng, &lower, &upper, 200);
    assert_eq!(pop.len(), 200);
    for p in &pop {
        assert_eq!(p.len(), 3);
        for ((x, lo), hi) in p.iter().zip(&lower).zip(&upper) {
            assert!(x >= lo && x <= hi);
        }
    }
}

#[test]
fn test_latin_hypercube_stratification() {
    let mut rng = StdRng::seed_from_u64(11);
    let lower = vec![0.0, 0.0];
    let upper = vec![1.0, 10.0];
    let n = 10;
    let pop = latin_hypercube(&mut rng, &lower, &upper, n);
    assert_eq!(pop.len(), n);
    for d in 0..2 {
        let width = (upper[d] - lower[d]) / n as f64;
        let mut occupied: Vec<usize> = pop
            .iter()
            .map(|p| (((p[d] - lower[d]) / width) as usize).min(n - 1))
            .collect();
        occupied.sort();
        assert_eq!(occupied, (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn test_random_subset_without_replacement() {
    let mut rng = StdRng::seed_from_u64(3);
    let picked = random_subset_indices(&mut rng, 100, 40);
    assert_eq!(picked.len(), 40);
    let mut unique = picked.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 40);

    assert_eq!(random_subset_indices(&mut rng, 5, 10), vec![0, 1, 2, 3, 4]);
}
