use std::fmt;

use crate::algorithm::assignment::Layout;
use crate::algorithm::requirements::RequirementSpec;
use crate::spatial::{CellSet, Grid, PatternGeometry};

/// First broken invariant found in a solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Placement footprint leaves the board
    OutOfBounds {
        /// Top-left index of the placement
        spot: usize,
    },
    /// Placement covers a locked cell
    UnavailableFootprint {
        /// Top-left index of the placement
        spot: usize,
        /// The locked cell
        cell: usize,
    },
    /// Two placements share a cell
    Overlap {
        /// Top-left index of the later placement
        spot: usize,
        /// The shared cell
        cell: usize,
    },
    /// Filler sits on a locked cell
    UnavailableFiller {
        /// The locked cell
        cell: usize,
    },
    /// Filler sits inside a placement footprint
    FillerOnFootprint {
        /// The covered cell
        cell: usize,
    },
    /// Filler borders no placement
    OrphanFiller {
        /// The filler cell
        cell: usize,
    },
    /// Placement ring lacks required units
    UnmetRequirement {
        /// Top-left index of the placement
        spot: usize,
        /// Identifier of the missing item
        item: String,
        /// Units still missing
        missing: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { spot } => write!(f, "placement {spot} leaves the board"),
            Self::UnavailableFootprint { spot, cell } => {
                write!(f, "placement {spot} covers locked cell {cell}")
            }
            Self::Overlap { spot, cell } => {
                write!(f, "placement {spot} overlaps another placement at cell {cell}")
            }
            Self::UnavailableFiller { cell } => write!(f, "filler on locked cell {cell}"),
            Self::FillerOnFootprint { cell } => {
                write!(f, "filler on cell {cell} inside a placement")
            }
            Self::OrphanFiller { cell } => write!(f, "filler on cell {cell} borders no placement"),
            Self::UnmetRequirement {
                spot,
                item,
                missing,
            } => write!(f, "placement {spot} is missing {missing}x '{item}'"),
        }
    }
}

/// Check a solution against the placement invariants
///
/// Footprints must be on the board, available, and pairwise disjoint. Every
/// filler must sit on an available cell outside all footprints and border at
/// least one placement. Every placement's ring must carry its full requirement
/// (extra units from shared fillers are fine).
///
/// # Errors
///
/// Returns the first violation found
pub fn verify_solution(
    spots: &[usize],
    layout: &Layout,
    grid: &Grid,
    geometry: PatternGeometry,
    requirements: &RequirementSpec,
) -> Result<(), Violation> {
    let mut occupied = CellSet::new(geometry.cell_count());
    for &spot in spots {
        let cells = geometry
            .occupied_cells(spot)
            .ok_or(Violation::OutOfBounds { spot })?;
        for cell in cells {
            if !grid.is_available(cell) {
                return Err(Violation::UnavailableFootprint { spot, cell });
            }
            if occupied.contains(cell) {
                return Err(Violation::Overlap { spot, cell });
            }
            occupied.insert(cell);
        }
    }

    let rings: Vec<Vec<usize>> = spots
        .iter()
        .map(|&spot| geometry.neighbor_ring(spot))
        .collect();

    for &cell in layout.keys() {
        if !grid.is_available(cell) {
            return Err(Violation::UnavailableFiller { cell });
        }
        if occupied.contains(cell) {
            return Err(Violation::FillerOnFootprint { cell });
        }
        if !rings.iter().any(|ring| ring.contains(&cell)) {
            return Err(Violation::OrphanFiller { cell });
        }
    }

    for (&spot, ring) in spots.iter().zip(&rings) {
        let mut tallies = vec![0; requirements.entries().len()];
        for cell in ring {
            if let Some(position) = layout
                .get(cell)
                .and_then(|item| requirements.position_of(item))
                && let Some(tally) = tallies.get_mut(position)
            {
                *tally += 1;
            }
        }
        for (requirement, &present) in requirements.entries().iter().zip(&tallies) {
            if present < requirement.count {
                return Err(Violation::UnmetRequirement {
                    spot,
                    item: requirement.item.id.clone(),
                    missing: requirement.count - present,
                });
            }
        }
    }

    Ok(())
}
