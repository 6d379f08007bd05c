use crate::{linspace, DynamicProblem};
use anyhow::{anyhow, Result};
use std::f64::consts::PI;

/// FDA1 benchmark (Farina, Deb, Amato). Two objectives; the Pareto set
/// shifts with G(t) = sin(0.5πt) while the front stays f2 = 1 − √f1.
#[derive(Debug, Clone)]
pub struct Fda1 {
    t: f64,
    g_t: f64,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Fda1 {
    pub fn at_time(t: f64, n_var: usize) -> Result<Self> {
        if n_var < 2 {
            return Err(anyhow!("FDA1 requires at least 2 variables, got {}", n_var));
        }
        let mut lower = vec![-1.0; n_var];
        let mut upper = vec![1.0; n_var];
        lower[0] = 0.0;
        upper[0] = 1.0;
        Ok(Self {
            t,
            g_t: (0.5 * PI * t).sin(),
            lower,
            upper,
        })
    }
}

impl DynamicProblem for Fda1 {
    fn name(&self) -> &'static str {
        "fda1"
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
            + x[1..]
                .iter()
                .map(|xi| (xi - self.g_t) * (xi - self.g_t))
                .sum::<f64>();
        let h = 1.0 - (f1 / g).sqrt();
        vec![f1, g * h]
    }

    fn true_front(&self, n_points: usize) -> Vec<Vec<f64>> {
        linspace(n_points)
            .into_iter()
            .map(|f1| vec![f1, 1.0 - f1.sqrt()])
            .collect()
    }
}
