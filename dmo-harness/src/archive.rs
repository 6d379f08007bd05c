use dmo_utils::random_subset_indices;
use rand::seq::SliceRandom;
use rand::Rng;

/// Bounded archive of decision vectors carried across environment changes.
///
/// Eviction is uniform-random over the union of old and new members, not
/// priority-based. New members are first capped at `max_per_step` per
/// update, so no single environment dominates the archive's composition.
#[derive(Debug, Clone)]
pub struct ElitePool {
    members: Vec<Vec<f64>>,
    max_per_step: usize,
    max_archive: usize,
}

impl ElitePool {
    pub fn new(max_per_step: usize, max_archive: usize) -> Self {
        Self {
            members: Vec::new(),
            max_per_step,
            max_archive,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Vec<f64>] {
        &self.members
    }

    /// Merges one environment's result population into the archive.
    pub fn update<R: Rng>(&mut self, new_members: Vec<Vec<f64>>, rng: &mut R) {
        let contribution = if new_members.len() > self.max_per_step {
            random_subset_indices(rng, new_members.len(), self.max_per_step)
                .into_iter()
                .map(|i| new_members[i].clone())
                .collect()
        } else {
            new_members
        };
        self.members.extend(contribution);
        if self.members.len() > self.max_archive {
            self.members.shuffle(rng);
            self.members.truncate(self.max_archive);
        }
    }
}
