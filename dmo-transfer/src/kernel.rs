use nalgebra::DMatrix;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Kernel {
    /// exp(-gamma * ||a - b||^2)
    Rbf { gamma: f64 },
    /// <a, b>
    Linear,
}

impl Kernel {
    pub fn apply(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Kernel::Rbf { gamma } => {
                let sq_dist: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
                (-gamma * sq_dist).exp()
            }
            Kernel::Linear => a.iter().zip(b).map(|(x, y)| x * y).sum(),
        }
    }

    /// Gram matrix over `rows`.
    pub fn gram(&self, rows: &[Vec<f64>]) -> DMatrix<f64> {
        let n = rows.len();
        let mut k = DMatrix::zeros(n, n);
        for i in 0..n {
            for j in i..n {
                let v = self.apply(&rows[i], &rows[j]);
                k[(i, j)] = v;
                k[(j, i)] = v;
            }
        }
        k
    }
}
