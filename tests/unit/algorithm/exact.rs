//! Tests for the exhaustive branch-and-bound placement search

#[cfg(test)]
mod tests {
    use mutation_planner::algorithm::assignment::IngredientAssigner;
    use mutation_planner::algorithm::exact::PlacementEnumerator;
    use mutation_planner::algorithm::feasibility::CapacityCheck;
    use mutation_planner::algorithm::requirements::{Requirement, RequirementSpec};
    use mutation_planner::catalog::ItemDefinition;
    use mutation_planner::spatial::{Grid, PatternGeometry};
    use std::sync::Arc;

    fn spec(count: usize) -> RequirementSpec {
        RequirementSpec::new(vec![Requirement {
            item: Arc::new(ItemDefinition::new("wheat", "Wheat")),
            count,
        }])
    }

    fn enumerate(grid: &Grid, requirements: &RequirementSpec) -> (Vec<usize>, usize) {
        let geometry = PatternGeometry::for_grid(1, grid);
        let check = CapacityCheck::new(grid, geometry, requirements.total());
        let assigner = IngredientAssigner::new(grid, geometry, requirements, 100);
        let solution = PlacementEnumerator::new(check, assigner).solve(&grid.available_indices());
        (solution.spots, solution.layout.len())
    }

    // Tests every cell but the centre is placed when the centre can serve all
    // Verified by stopping at the first complete branch
    #[test]
    fn test_full_three_by_three() {
        let grid = Grid::filled(3, 3).expect("valid dimensions");
        let (spots, fillers) = enumerate(&grid, &spec(1));
        assert_eq!(spots, vec![0, 1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(fillers, 1);
    }

    // Tests a refused inclusion falls through to the exclude branch
    // Verified by abandoning the subtree when an inclusion is refused
    #[test]
    fn test_refused_inclusion_continues() {
        let grid = Grid::filled(4, 1).expect("valid dimensions");
        let (spots, fillers) = enumerate(&grid, &spec(1));
        assert_eq!(spots, vec![0, 2]);
        assert_eq!(fillers, 1);
    }

    // Tests requirements too large for any ring yield an empty solution
    // Verified by returning the best unassigned set
    #[test]
    fn test_infeasible_requirements() {
        let grid = Grid::filled(3, 3).expect("valid dimensions");
        let (spots, fillers) = enumerate(&grid, &spec(9));
        assert!(spots.is_empty());
        assert_eq!(fillers, 0);
    }

    // Tests no candidates yields an empty solution
    // Verified by returning None for an empty candidate list
    #[test]
    fn test_no_candidates() {
        let grid = Grid::new(3, 3).expect("valid dimensions");
        let (spots, fillers) = enumerate(&grid, &spec(1));
        assert!(spots.is_empty());
        assert_eq!(fillers, 0);
    }

    // Tests repeated searches return the same placements
    // Verified by iterating candidates from a hash set
    #[test]
    fn test_deterministic() {
        let grid = Grid::reference().expect("reference board");
        let requirements = spec(2);
        let first = enumerate(&grid, &requirements);
        let second = enumerate(&grid, &requirements);
        assert_eq!(first, second);
    }

    // Tests zero requirements place every candidate
    // Verified by keeping a free neighbor per placement regardless of requirements
    #[test]
    fn test_zero_requirements() {
        let grid = Grid::filled(3, 2).expect("valid dimensions");
        let (spots, fillers) = enumerate(&grid, &RequirementSpec::default());
        assert_eq!(spots, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(fillers, 0);
    }
}
