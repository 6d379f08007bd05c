use anyhow::{anyhow, Result};
use dmo_problems::ProblemId;
use serde::{Deserialize, Serialize};

fn default_n_var() -> usize {
    10
}
fn default_population_size() -> usize {
    100
}
fn default_num_changes() -> usize {
    20
}
fn default_severity() -> usize {
    10
}
fn default_generations_per_change() -> usize {
    30
}
fn default_max_archive() -> usize {
    1000
}
fn default_max_per_step() -> usize {
    40
}
fn default_true_front_points() -> usize {
    500
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunSettings {
    pub problem: ProblemId,
    #[serde(default = "default_n_var")]
    pub n_var: usize,
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Number of environment changes after the initial environment.
    #[serde(default = "default_num_changes")]
    pub num_changes: usize,
    /// Change severity n_t: the time value advances by 1/severity per step.
    #[serde(default = "default_severity")]
    pub severity: usize,
    /// Generation budget per environment (frequency of change).
    #[serde(default = "default_generations_per_change")]
    pub generations_per_change: usize,
    #[serde(default = "default_max_archive")]
    pub max_archive: usize,
    #[serde(default = "default_max_per_step")]
    pub max_per_step: usize,
    #[serde(default = "default_true_front_points")]
    pub true_front_points: usize,
    #[serde(default)]
    pub transfer: TransferSettings,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone)]
pub struct TransferSettings {
    /// Freshly sampled target-domain points fed to the aligner.
    pub pool_size: usize,
    /// Archive subset bound before alignment.
    pub subset_cap: usize,
    /// Transferred individuals placed into the seed population.
    pub transfer_count: usize,
    /// Fresh uniform individuals placed into the seed population.
    pub random_count: usize,
    /// Crowding-selected elites placed into the seed population.
    pub elite_count: usize,
    /// RBF kernel bandwidth.
    pub gamma: f64,
    /// Ridge regularizer for the kernel smoothing step.
    pub lambda: f64,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            pool_size: 50,
            subset_cap: 100,
            transfer_count: 40,
            random_count: 20,
            elite_count: 40,
            gamma: 0.5,
            lambda: 1.0,
        }
    }
}

impl RunSettings {
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 4 {
            return Err(anyhow!(
                "population_size must be at least 4, got {}",
                self.population_size
            ));
        }
        if self.n_var == 0 {
            return Err(anyhow!("n_var must be positive"));
        }
        if self.severity == 0 {
            return Err(anyhow!("severity must be positive"));
        }
        if self.max_archive == 0 || self.max_per_step == 0 {
            return Err(anyhow!("archive caps must be positive"));
        }
        if self.transfer.pool_size == 0 {
            return Err(anyhow!("transfer.pool_size must be positive"));
        }
        if self.transfer.lambda <= 0.0 {
            return Err(anyhow!(
                "transfer.lambda must be positive, got {}",
                self.transfer.lambda
            ));
        }
        Ok(())
    }
}
