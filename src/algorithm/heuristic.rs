use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::algorithm::assignment::{IngredientAssigner, Solution};
use crate::algorithm::feasibility::{CapacityCheck, PlacementSet};

/// Randomized multi-start greedy search for large candidate spaces
///
/// Each trial shuffles the candidates and accepts every one that keeps the
/// set feasible. The largest set the assigner can complete wins. Not
/// guaranteed optimal; runtime is bounded by the trial count.
pub struct PlacementHeuristic<'a> {
    check: CapacityCheck<'a>,
    assigner: IngredientAssigner<'a>,
    trials: usize,
}

impl<'a> PlacementHeuristic<'a> {
    /// Create a heuristic running `trials` greedy constructions
    pub const fn new(
        check: CapacityCheck<'a>,
        assigner: IngredientAssigner<'a>,
        trials: usize,
    ) -> Self {
        Self {
            check,
            assigner,
            trials,
        }
    }

    /// Build one greedy set from the candidates in the given order
    pub fn construct(&self, order: &[usize]) -> PlacementSet {
        let mut set = PlacementSet::new(self.check.geometry().cell_count());
        for &candidate in order {
            if let Some(next) = self.check.try_place(&set, candidate) {
                set = next;
            }
        }
        set
    }

    /// Run every trial, drawing shuffles from `rng`
    pub fn solve<R: Rng + ?Sized>(&self, candidates: &[usize], rng: &mut R) -> Solution {
        let mut best: Option<Solution> = None;
        let mut order = candidates.to_vec();

        for trial in 0..self.trials {
            order.shuffle(rng);
            let set = self.construct(&order);

            let improves = best
                .as_ref()
                .is_none_or(|current| set.len() > current.count());
            if !improves {
                continue;
            }
            if let Some(layout) = self.assigner.assign(set.spots()) {
                debug!("trial {trial} found {} placements", set.len());
                best = Some(Solution {
                    spots: set.into_spots(),
                    layout,
                });
            }
        }

        best.unwrap_or_default()
    }
}
