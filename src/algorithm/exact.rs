use log::{debug, trace};

use crate::algorithm::assignment::{IngredientAssigner, Solution};
use crate::algorithm::feasibility::{CapacityCheck, PlacementSet};

/// One pending node of the inclusion/exclusion search
struct Frame {
    /// Position in the candidate array of the next decision
    next: usize,
    /// Placements chosen on the path to this node
    set: PlacementSet,
}

/// Exact branch-and-bound search for the largest assignable placement set
///
/// Candidates are decided in array order, each either included (when the
/// capacity check allows it) or excluded. Nodes that cannot beat the best set
/// found so far are skipped. The traversal keeps its own stack, so search
/// depth never grows the call stack. Ties keep the first set found.
pub struct PlacementEnumerator<'a> {
    check: CapacityCheck<'a>,
    assigner: IngredientAssigner<'a>,
}

impl<'a> PlacementEnumerator<'a> {
    /// Create an enumerator from a feasibility check and an assigner
    pub const fn new(check: CapacityCheck<'a>, assigner: IngredientAssigner<'a>) -> Self {
        Self { check, assigner }
    }

    /// Search every subset of `candidates` reachable through feasible inclusions
    pub fn solve(&self, candidates: &[usize]) -> Solution {
        let mut best: Option<Solution> = None;
        let mut explored = 0usize;
        let mut stack = vec![Frame {
            next: 0,
            set: PlacementSet::new(self.check.geometry().cell_count()),
        }];

        while let Some(frame) = stack.pop() {
            explored += 1;

            let remaining = candidates.len().saturating_sub(frame.next);
            let best_count = best.as_ref().map(Solution::count);
            if best_count.is_some_and(|count| frame.set.len() + remaining <= count) {
                continue;
            }

            let Some(&candidate) = candidates.get(frame.next) else {
                if best_count.is_none_or(|count| frame.set.len() > count)
                    && let Some(layout) = self.assigner.assign(frame.set.spots())
                {
                    trace!("exact search improved to {} placements", frame.set.len());
                    best = Some(Solution {
                        spots: frame.set.into_spots(),
                        layout,
                    });
                }
                continue;
            };

            let included = self.check.try_place(&frame.set, candidate);
            stack.push(Frame {
                next: frame.next + 1,
                set: frame.set,
            });
            if let Some(set) = included {
                stack.push(Frame {
                    next: frame.next + 1,
                    set,
                });
            }
        }

        let solution = best.unwrap_or_default();
        debug!(
            "exact search visited {explored} nodes, best has {} placements",
            solution.count()
        );
        solution
    }
}
