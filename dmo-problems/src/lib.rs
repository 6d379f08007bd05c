use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

pub mod dmop2;
pub mod fda1;
pub mod fda2;

pub use dmop2::Dmop2;
pub use fda1::Fda1;
pub use fda2::Fda2;

/// A time-varying multi-objective problem frozen at one time value.
///
/// One instance represents one environment: the loop constructs a fresh
/// instance at every change step and never reuses objective values across
/// instances.
pub trait DynamicProblem {
    fn name(&self) -> &'static str;
    fn time(&self) -> f64;
    fn n_var(&self) -> usize;
    fn n_obj(&self) -> usize;
    fn lower_bounds(&self) -> &[f64];
    fn upper_bounds(&self) -> &[f64];
    fn evaluate(&self, x: &[f64]) -> Vec<f64>;
    /// Samples `n_points` points from the analytic Pareto front at this
    /// instance's time value.
    fn true_front(&self, n_points: usize) -> Vec<Vec<f64>>;
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProblemId {
    Fda1,
    Fda2,
    Dmop2,
}

impl std::str::FromStr for ProblemId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fda1" => Ok(ProblemId::Fda1),
            "fda2" => Ok(ProblemId::Fda2),
            "dmop2" => Ok(ProblemId::Dmop2),
            _ => Err(anyhow!("Unknown problem id: {}", s)),
        }
    }
}

/// Instantiates the benchmark `id` at time `t` with `n_var` decision
/// variables.
pub fn instantiate(id: ProblemId, t: f64, n_var: usize) -> Result<Box<dyn DynamicProblem>> {
    Ok(match id {
        ProblemId::Fda1 => Box::new(Fda1::at_time(t, n_var)?),
        ProblemId::Fda2 => Box::new(Fda2::at_time(t, n_var)?),
        ProblemId::Dmop2 => Box::new(Dmop2::at_time(t, n_var)?),
    })
}

pub(crate) fn linspace(n_points: usize) -> Vec<f64> {
    if n_points == 0 {
        return Vec::new();
    }
    if n_points == 1 {
        return vec![0.0];
    }
    (0..n_points)
        .map(|i| i as f64 / (n_points - 1) as f64)
        .collect()
}
