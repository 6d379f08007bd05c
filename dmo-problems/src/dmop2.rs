use crate::{linspace, DynamicProblem};
use anyhow::{anyhow, Result};
use std::f64::consts::PI;

/// dMOP2 benchmark (Goh & Tan). Both the Pareto set and the front shape
/// change over time: G(t) shifts the optimum of g, H(t) bends the front.
#[derive(Debug, Clone)]
pub struct Dmop2 {
    t: f64,
    g_t: f64,
    h_t: f64,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Dmop2 {
    pub fn at_time(t: f64, n_var: usize) -> Result<Self> {
        if n_var < 2 {
            return Err(anyhow!(
                "dMOP2 requires at least 2 variables, got {}",
                n_var
            ));
        }
        Ok(Self {
            t,
            g_t: (0.5 * PI * t).sin(),
            h_t: 1.25 + 0.75 * (0.5 * PI * t).sin(),
            lower: vec![0.0; n_var],
            upper: vec![1.0; n_var],
        })
    }
}

impl DynamicProblem for Dmop2 {
    fn name(&self) -> &'static str {
        "dmop2"
    }

    fn time(&self) -> f64 {
        self.t
    }

    fn n_var(&self) -> usize {
        self.lower.len()
    }

    fn n_obj(&self) -> usize {
        2
    }

    fn lower_bounds(&self) -> &[f64] {
        &self.lower
    }

    fn upper_bounds(&self) -> &[f64] {
        &self.upper
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        let f1 = x[0];
        let g = 1.0
            + 9.0
                * x[1..]
                    .iter()
                    .map(|xi| (xi - self.g_t) * (xi - self.g_t))
                    .sum::<f64>();
        let h = 1.0 - (f1 / g).powf(self.h_t);
        vec![f1, g * h]
    }

    fn true_front(&self, n_points: usize) -> Vec<Vec<f64>> {
        linspace(n_points)
            .into_iter()
            .map(|f1| vec![f1, 1.0 - f1.powf(self.h_t)])
            .collect()
    }
}
