use crate::{linspace, DynamicProblem};
use anyhow::{anyhow, Result};
use std::f64::consts::PI;

/// FDA2 benchmark. The front's curvature changes with
/// H(t) = 0.75 + 0.7·sin(0.5πt): f2 = 1 − f1^H(t).
///
/// Variables split three ways: x1 drives f1, the second group drives g,
/// the third group shapes the exponent (optimal at H(t)/4).
#[derive(Debug, Clone)]
pub struct Fda2 {
    t: f64,
    h_t: f64,
    split: usize,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Fda2 {
    pub fn at_time(t: f64, n_var: usize) -> Result<Self> {
        if n_var < 3 {
            return Err(anyhow!("FDA2 requires at least 3 variables, got {}", n_var));
        }
        let mut lower = vec![-1.0; n_var];
        let mut upper = vec![1.0; n_var];
        lower[0] = 0.0;
        upper[0] = 1.0;
        Ok(Self {
            t,
            h_t: 0.75 + 0.7 * (0.5 * PI * t).sin(),
            split: 1 + (n_var - 1) / 2,
            lower,
            upper,
        })
    }
}

impl DynamicProblem for Fda2 {
    fn name(&self) -> &'static str {
        "fda2"
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
        let g = 1.0 + x[1..self.split].iter().map(|xi| xi * xi).sum::<f64>();
        let exponent = self.h_t
            + x[self.split..]
                .iter()
                .map(|xi| {
                    let d = xi - self.h_t / 4.0;
                    d * d
                })
                .sum::<f64>();
        let h = 1.0 - (f1 / g).powf(exponent);
        vec![f1, g * h]
    }

    fn true_front(&self, n_points: usize) -> Vec<Vec<f64>> {
        linspace(n_points)
            .into_iter()
            .map(|f1| vec![f1, 1.0 - f1.powf(self.h_t)])
            .collect()
    }
}
