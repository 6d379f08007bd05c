use crate::{clamp_into_bounds, polynomial_mutation, sbx_crossover};
use anyhow::{anyhow, Result};
use dmo_problems::DynamicProblem;
use dmo_utils::{crowding_distance, pareto_compare, uniform_point, ParetoCompare};
use rand::Rng;

const DEFAULT_CROSSOVER_PROB: f64 = 0.9;
const DEFAULT_CROSSOVER_ETA: f64 = 15.0;
const DEFAULT_MUTATION_ETA: f64 = 20.0;

#[derive(Debug, Copy, Clone)]
pub struct EngineConfig {
    pub population_size: usize,
    pub crossover_prob: f64,
    pub crossover_eta: f64,
    pub mutation_eta: f64,
}

impl EngineConfig {
    pub fn new(population_size: usize) -> Result<Self> {
        if population_size < 4 {
            return Err(anyhow!(
                "population_size must be at least 4, got {}",
                population_size
            ));
        }
        Ok(Self {
            population_size,
            crossover_prob: DEFAULT_CROSSOVER_PROB,
            crossover_eta: DEFAULT_CROSSOVER_ETA,
            mutation_eta: DEFAULT_MUTATION_ETA,
        })
    }
}

/// Final population of one optimization run. `objectives[i]` is the image
/// of `decisions[i]` under the environment the run was given.
#[derive(Debug, Clone)]
pub struct FinalPopulation {
    pub decisions: Vec<Vec<f64>>,
    pub objectives: Vec<Vec<f64>>,
}

#[derive(Debug, Clone)]
struct Individual {
    x: Vec<f64>,
    f: Vec<f64>,
    rank: usize,
    crowd: f64,
}

/// Dominance-based genetic optimizer (NSGA-II): fast non-dominated sort,
/// binary tournament on (rank, crowding), SBX crossover, polynomial
/// mutation, (μ+λ) truncation selection.
pub struct Nsga2 {
    config: EngineConfig,
}

impl Nsga2 {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Runs `generations` generations starting from `initial`. The seed
    /// population is padded with uniform samples or truncated to the
    /// configured size, and clamped into the environment bounds.
    pub fn run<R: Rng>(
        &self,
        problem: &dyn DynamicProblem,
        initial: Vec<Vec<f64>>,
        generations: usize,
        rng: &mut R,
    ) -> FinalPopulation {
        let n = self.config.population_size;
        let lower = problem.lower_bounds().to_vec();
        let upper = problem.upper_bounds().to_vec();

        let mut seeds = initial;
        seeds.truncate(n);
        while seeds.len() < n {
            seeds.push(uniform_point(rng, &lower, &upper));
        }

        let mut population: Vec<Individual> = seeds
            .into_iter()
            .map(|mut x| {
                clamp_into_bounds(&mut x, &lower, &upper);
                let f = problem.evaluate(&x);
                Individual {
                    x,
                    f,
                    rank: 0,
                    crowd: 0.0,
                }
            })
            .collect();
        assign_rank_and_crowding(&mut population);

        let mutation_prob = 1.0 / problem.n_var() as f64;
        for _ in 0..generations {
            let mut offspring = Vec::with_capacity(n);
            while offspring.len() < n {
                let p1 = tournament(rng, &population);
                let p2 = tournament(rng, &population);
                let (mut c1, mut c2) = if rng.gen::<f64>() < self.config.crossover_prob {
                    sbx_crossover(
                        rng,
                        &population[p1].x,
                        &population[p2].x,
                        &lower,
                        &upper,
                        self.config.crossover_eta,
                    )
                } else {
                    (population[p1].x.clone(), population[p2].x.clone())
                };
                for c in [&mut c1, &mut c2] {
                    polynomial_mutation(
                        rng,
                        c,
                        &lower,
                        &upper,
                        self.config.mutation_eta,
                        mutation_prob,
                    );
                }
                for x in [c1, c2] {
                    if offspring.len() < n {
                        let f = problem.evaluate(&x);
                        offspring.push(Individual {
                            x,
                            f,
                            rank: 0,
                            crowd: 0.0,
                        });
                    }
                }
            }
            population.extend(offspring);
            assign_rank_and_crowding(&mut population);
            population.sort_by(|a, b| {
                a.rank.cmp(&b.rank).then(
                    b.crowd
                        .partial_cmp(&a.crowd)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
            });
            population.truncate(n);
        }

        FinalPopulation {
            decisions: population.iter().map(|ind| ind.x.clone()).collect(),
            objectives: population.iter().map(|ind| ind.f.clone()).collect(),
        }
    }
}

fn tournament<R: Rng>(rng: &mut R, population: &[Individual]) -> usize {
    let a = rng.gen_range(0..population.len());
    let b = rng.gen_range(0..population.len());
    let better = match population[a].rank.cmp(&population[b].rank) {
        std::cmp::Ordering::Less => a,
        std::cmp::Ordering::Greater => b,
        std::cmp::Ordering::Equal => {
            if population[a].crowd >= population[b].crowd {
                a
            } else {
                b
            }
        }
    };
    better
}

/// Fast non-dominated sort plus per-front crowding distances.
fn assign_rank_and_crowding(population: &mut [Individual]) {
    let n = population.len();
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut domination_count = vec![0usize; n];
    for i in 0..n {
        for j in (i + 1)..n {
            match pareto_compare(&population[i].f, &population[j].f) {
                ParetoCompare::ADominatesB => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                ParetoCompare::BDominatesA => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                ParetoCompare::Equal => {}
            }
        }
    }
    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    let mut rank = 0;
    while !current.is_empty() {
        let objectives: Vec<Vec<f64>> = current.iter().map(|&i| population[i].f.clone()).collect();
        let crowd = crowding_distance(&objectives);
        for (pos, &i) in current.iter().enumerate() {
            population[i].rank = rank;
            population[i].crowd = crowd[pos];
        }
        let mut next = Vec::new();
        for &i in &current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        current = next;
        rank += 1;
    }
}
