use crate::spatial::{CellSet, Grid, PatternGeometry};

/// Placements chosen so far, with the union of their footprints
///
/// Both search strategies treat a set as an immutable snapshot: extending it
/// produces a new set and leaves the original untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementSet {
    spots: Vec<usize>,
    occupied: CellSet,
}

impl PlacementSet {
    /// Create an empty set for a board of `cell_count` cells
    pub fn new(cell_count: usize) -> Self {
        Self {
            spots: Vec::new(),
            occupied: CellSet::new(cell_count),
        }
    }

    /// Top-left indices in insertion order
    pub const fn spots(&self) -> &[usize] {
        self.spots.as_slice()
    }

    /// Union of every placement's footprint
    pub const fn occupied(&self) -> &CellSet {
        &self.occupied
    }

    /// Number of placements
    pub const fn len(&self) -> usize {
        self.spots.len()
    }

    /// True if nothing has been placed
    pub const fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Consume the set, keeping only the top-left indices
    pub fn into_spots(self) -> Vec<usize> {
        self.spots
    }

    fn with_placement(&self, top_left: usize, footprint: &[usize]) -> Self {
        let mut next = self.clone();
        next.spots.push(top_left);
        for &cell in footprint {
            next.occupied.insert(cell);
        }
        next
    }
}

/// Necessary-condition test for adding a placement to a set
///
/// A placement is acceptable when its footprint is on the board, available,
/// and clear of the set, and every placement in the extended set still has at
/// least `total_required` cells in its ring that are available and outside all
/// footprints. This is cheaper than a full filler assignment and never rejects
/// a set the assigner could complete.
#[derive(Clone, Copy, Debug)]
pub struct CapacityCheck<'a> {
    grid: &'a Grid,
    geometry: PatternGeometry,
    total_required: usize,
}

impl<'a> CapacityCheck<'a> {
    /// Create a check for one pattern shape and requirement total
    pub const fn new(grid: &'a Grid, geometry: PatternGeometry, total_required: usize) -> Self {
        Self {
            grid,
            geometry,
            total_required,
        }
    }

    /// Pattern shape
    pub const fn geometry(&self) -> PatternGeometry {
        self.geometry
    }

    /// Ring cells of `spot` that could hold a filler given the occupied mask
    pub fn free_neighbors(&self, spot: usize, occupied: &CellSet) -> usize {
        self.geometry
            .neighbor_ring(spot)
            .into_iter()
            .filter(|&cell| self.grid.is_available(cell) && !occupied.contains(cell))
            .count()
    }

    /// Whether `spot` keeps enough free ring cells under the occupied mask
    pub fn has_capacity(&self, spot: usize, occupied: &CellSet) -> bool {
        self.total_required == 0 || self.free_neighbors(spot, occupied) >= self.total_required
    }

    /// Footprint of `top_left` if it is on the board, available, and clear of `set`
    pub fn footprint(&self, set: &PlacementSet, top_left: usize) -> Option<Vec<usize>> {
        let cells = self.geometry.occupied_cells(top_left)?;
        let usable = cells
            .iter()
            .all(|&cell| self.grid.is_available(cell) && !set.occupied.contains(cell));
        usable.then_some(cells)
    }

    /// Extend `set` with a placement at `top_left`, or `None` if that breaks feasibility
    ///
    /// The new placement is checked first, then every previously accepted
    /// placement is re-validated against the enlarged occupied mask.
    pub fn try_place(&self, set: &PlacementSet, top_left: usize) -> Option<PlacementSet> {
        let footprint = self.footprint(set, top_left)?;
        let next = set.with_placement(top_left, &footprint);

        if !self.has_capacity(top_left, &next.occupied) {
            return None;
        }
        set.spots
            .iter()
            .all(|&spot| self.has_capacity(spot, &next.occupied))
            .then_some(next)
    }
}
