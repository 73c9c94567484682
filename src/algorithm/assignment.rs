use log::trace;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::algorithm::requirements::RequirementSpec;
use crate::catalog::ItemDefinition;
use crate::spatial::{CellSet, Grid, PatternGeometry};

/// Filler assignment: cell index to the item placed there
pub type Layout = BTreeMap<usize, Arc<ItemDefinition>>;

/// A placement set together with the layout that supplies it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    /// Top-left indices in discovery order
    pub spots: Vec<usize>,
    /// Filler assignment for every placement
    pub layout: Layout,
}

impl Solution {
    /// Number of placements
    pub const fn count(&self) -> usize {
        self.spots.len()
    }
}

/// Working state for one placement during assignment
struct PendingSpot {
    spot: usize,
    /// Ring cells that are available and outside every footprint
    eligible: Vec<usize>,
    /// Units this placement has not yet placed itself
    needs: Vec<usize>,
}

impl PendingSpot {
    fn is_pending(&self) -> bool {
        !self.needs.is_empty()
    }

    fn empty_cells(&self, fills: &BTreeMap<usize, usize>) -> usize {
        self.eligible
            .iter()
            .filter(|&&cell| !fills.contains_key(&cell))
            .count()
    }

    /// Full requirement minus whatever already sits on this placement's ring
    fn unmet(&self, units: &[usize], fills: &BTreeMap<usize, usize>) -> Vec<usize> {
        let mut unmet = units.to_vec();
        for cell in &self.eligible {
            if let Some(item) = fills.get(cell)
                && let Some(position) = unmet.iter().position(|unit| unit == item)
            {
                unmet.remove(position);
            }
        }
        unmet
    }

    fn consume(&mut self, unit: usize) {
        if let Some(position) = self.needs.iter().position(|&need| need == unit) {
            self.needs.remove(position);
        }
    }
}

/// Greedy filler assignment shared between neighboring placements
///
/// One filler cell counts toward every placement whose ring contains it. The
/// most constrained placement (fewest empty eligible cells) is served first,
/// and each unit goes to the empty cell bordering the most other pending
/// placements. Ties resolve to the lowest top-left index and then to ring
/// order, so the outcome depends only on the set of placements.
///
/// The policy is incomplete: it can report failure for a placement set that
/// does admit a layout.
#[derive(Clone, Copy, Debug)]
pub struct IngredientAssigner<'a> {
    grid: &'a Grid,
    geometry: PatternGeometry,
    requirements: &'a RequirementSpec,
    iteration_cap: usize,
}

impl<'a> IngredientAssigner<'a> {
    /// Create an assigner for one pattern shape and requirement spec
    pub const fn new(
        grid: &'a Grid,
        geometry: PatternGeometry,
        requirements: &'a RequirementSpec,
        iteration_cap: usize,
    ) -> Self {
        Self {
            grid,
            geometry,
            requirements,
            iteration_cap,
        }
    }

    /// Iteration budget for a set of `placements` placements
    ///
    /// Each placement needs at most one iteration per unit plus one to be
    /// marked satisfied, so the configured cap is raised to that bound. The
    /// cap-exhausted check in [`Self::assign`] is a safety valve that this
    /// bound keeps from firing.
    pub fn iteration_budget(&self, placements: usize) -> usize {
        self.iteration_cap
            .max(placements.saturating_mul(self.requirements.total() + 1))
    }

    /// Assign fillers for every placement, or `None` if the greedy fill gets stuck
    pub fn assign(&self, spots: &[usize]) -> Option<Layout> {
        let footprints = spots
            .iter()
            .map(|&spot| self.geometry.occupied_cells(spot))
            .collect::<Option<Vec<_>>>()?
            .concat();
        let occupied = CellSet::from_indices(self.geometry.cell_count(), &footprints);

        let units = self.requirements.units();
        let mut pending: Vec<PendingSpot> = spots
            .iter()
            .map(|&spot| PendingSpot {
                spot,
                eligible: self
                    .geometry
                    .neighbor_ring(spot)
                    .into_iter()
                    .filter(|&cell| self.grid.is_available(cell) && !occupied.contains(cell))
                    .collect(),
                needs: units.clone(),
            })
            .collect();
        let mut fills: BTreeMap<usize, usize> = BTreeMap::new();

        for _ in 0..self.iteration_budget(spots.len()) {
            let target = pending
                .iter()
                .enumerate()
                .filter(|(_, state)| state.is_pending())
                .min_by_key(|(_, state)| (state.empty_cells(&fills), state.spot))
                .map(|(position, _)| position);
            let Some(target) = target else {
                break;
            };
            let state = pending.get(target)?;

            let unmet = state.unmet(&units, &fills);
            let Some(&unit) = unmet.first() else {
                if let Some(state) = pending.get_mut(target) {
                    state.needs.clear();
                }
                continue;
            };

            let cell = state
                .eligible
                .iter()
                .copied()
                .filter(|cell| !fills.contains_key(cell))
                .min_by_key(|cell| {
                    Reverse(
                        pending
                            .iter()
                            .enumerate()
                            .filter(|&(other, other_state)| {
                                other != target
                                    && other_state.is_pending()
                                    && other_state.eligible.contains(cell)
                            })
                            .count(),
                    )
                });
            let Some(cell) = cell else {
                trace!("placement {} has no empty neighbor left", state.spot);
                return None;
            };

            fills.insert(cell, unit);
            if let Some(state) = pending.get_mut(target) {
                state.consume(unit);
            }
        }

        // Safety valve; the budget covers the worst case
        if pending.iter().any(PendingSpot::is_pending) {
            trace!("assignment of {} placements hit the iteration cap", spots.len());
            return None;
        }

        Some(
            fills
                .into_iter()
                .filter_map(|(cell, unit)| {
                    self.requirements
                        .item(unit)
                        .map(|item| (cell, Arc::clone(item)))
                })
                .collect(),
        )
    }
}
