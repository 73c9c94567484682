use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over board cell indices
///
/// Uses the same 0-based, row-major indexing as the board. Indices outside
/// the capacity are ignored on insert and report absent on lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellSet {
    bits: BitVec,
}

impl CellSet {
    /// Create an empty set able to hold indices `0..capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Create a set from a list of indices
    pub fn from_indices(capacity: usize, indices: &[usize]) -> Self {
        let mut set = Self::new(capacity);
        for &index in indices {
            set.insert(index);
        }
        set
    }

    /// Insert a cell index
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Remove a cell index
    pub fn remove(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, false);
        }
    }

    /// Test cell membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test whether any of the given indices are present
    pub fn intersects(&self, indices: &[usize]) -> bool {
        indices.iter().any(|&index| self.contains(index))
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate present indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<usize> = self.iter().collect();
        write!(f, "CellSet({} cells: {cells:?})", cells.len())
    }
}
