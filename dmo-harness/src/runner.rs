use crate::{build_seed_population, ElitePool, RunSettings};
use anyhow::Result;
use dmo_engine::{EngineConfig, Nsga2};
use dmo_problems::instantiate;
use dmo_utils::{igd, latin_hypercube, maximum_spread, non_dominated_indices, spacing};
use rand::rngs::StdRng;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct StepReport {
    pub step: usize,
    pub t: f64,
    pub igd: f64,
    pub sp: f64,
    pub ms: f64,
    pub archive_len: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct RunReport {
    pub settings: RunSettings,
    pub steps: Vec<StepReport>,
    pub mean_igd: f64,
    pub mean_sp: f64,
    pub mean_ms: f64,
}

/// Runs the full environment-change loop: one optimization per time step,
/// metrics against the analytic front, archive update after every step.
///
/// The first step seeds with Latin-hypercube samples; every later step
/// seeds through the transfer/random/elite builder. Steps are strictly
/// ordered because each seed construction depends on the fully updated
/// archive from the previous step.
pub fn run_experiment(settings: &RunSettings, rng: &mut StdRng) -> Result<RunReport> {
    settings.validate()?;
    let engine = Nsga2::new(EngineConfig::new(settings.population_size)?);
    let mut pool = ElitePool::new(settings.max_per_step, settings.max_archive);
    let mut steps = Vec::with_capacity(settings.num_changes + 1);

    for step in 0..=settings.num_changes {
        let t = step as f64 / settings.severity as f64;
        let problem = instantiate(settings.problem, t, settings.n_var)?;

        let seed_population = if step == 0 {
            latin_hypercube(
                rng,
                problem.lower_bounds(),
                problem.upper_bounds(),
                settings.population_size,
            )
        } else {
            build_seed_population(
                &pool,
                problem.as_ref(),
                settings.population_size,
                &settings.transfer,
                rng,
            )
        };

        let result = engine.run(
            problem.as_ref(),
            seed_population,
            settings.generations_per_change,
            rng,
        );

        let truth = problem.true_front(settings.true_front_points);
        let front: Vec<Vec<f64>> = non_dominated_indices(&result.objectives)
            .into_iter()
            .map(|i| result.objectives[i].clone())
            .collect();
        let (igd_value, sp_value, ms_value) = (
            igd(&front, &truth),
            spacing(&front),
            maximum_spread(&front, &truth),
        );

        pool.update(result.decisions, rng);
        let report = StepReport {
            step,
            t,
            igd: igd_value,
            sp: sp_value,
            ms: ms_value,
            archive_len: pool.len(),
        };
        println!(
            "step {:>3}  t {:.3}  igd {:.6}  sp {:.6}  ms {:.6}  archive {}",
            report.step, report.t, report.igd, report.sp, report.ms, report.archive_len
        );
        steps.push(report);
    }

    let n = steps.len() as f64;
    Ok(RunReport {
        settings: settings.clone(),
        mean_igd: steps.iter().map(|s| s.igd).sum::<f64>() / n,
        mean_sp: steps.iter().map(|s| s.sp).sum::<f64>() / n,
        mean_ms: steps.iter().map(|s| s.ms).sum::<f64>() / n,
        steps,
    })
}
