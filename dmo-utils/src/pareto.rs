pub type Objectives = Vec<f64>;

#[derive(Debug, Clone, PartialEq)]
pub enum ParetoCompare {
    ADominatesB,
    Equal,
    BDominatesA,
}

/// Compares two objective vectors under minimization.
pub fn pareto_compare(a: &[f64], b: &[f64]) -> ParetoCompare {
    let mut a_dominate_b = false;
    let mut b_dominate_a = false;
    for (a_val, b_val) in a.iter().zip(b) {
        if a_val < b_val {
            a_dominate_b = true;
        } else if a_val > b_val {
            b_dominate_a = true;
        }
    }
    if a_dominate_b == b_dominate_a {
        ParetoCompare::Equal
    } else if a_dominate_b {
        ParetoCompare::ADominatesB
    } else {
        ParetoCompare::BDominatesA
    }
}

/// Indices of objective vectors not dominated by any other row.
///
/// Order of the returned indices follows the input order.
pub fn non_dominated_indices(objectives: &[Objectives]) -> Vec<usize> {
    let mut indices = Vec::new();
    'outer: for (i, a) in objectives.iter().enumerate() {
        for (j, b) in objectives.iter().enumerate() {
            if i != j && pareto_compare(b, a) == ParetoCompare::ADominatesB {
                continue 'outer;
            }
        }
        indices.push(i);
    }
    indices
}

/// Filters rows of `objectives` (and the matching `decisions`) down to the
/// non-dominated subset.
pub fn non_dominated_filter(
    decisions: &[Vec<f64>],
    objectives: &[Objectives],
) -> (Vec<Vec<f64>>, Vec<Objectives>) {
    let indices = non_dominated_indices(objectives);
    (
        indices.iter().map(|&i| decisions[i].clone()).collect(),
        indices.iter().map(|&i| objectives[i].clone()).collect(),
    )
}
