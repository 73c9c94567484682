//! Tests for solution invariant checks

#[cfg(test)]
mod tests {
    use mutation_planner::algorithm::assignment::Layout;
    use mutation_planner::algorithm::requirements::{Requirement, RequirementSpec};
    use mutation_planner::algorithm::validation::{Violation, verify_solution};
    use mutation_planner::catalog::ItemDefinition;
    use mutation_planner::spatial::{Grid, PatternGeometry};
    use std::sync::Arc;

    fn wheat() -> Arc<ItemDefinition> {
        Arc::new(ItemDefinition::new("wheat", "Wheat"))
    }

    fn spec(count: usize) -> RequirementSpec {
        RequirementSpec::new(vec![Requirement {
            item: wheat(),
            count,
        }])
    }

    fn layout(cells: &[usize]) -> Layout {
        cells.iter().map(|&cell| (cell, wheat())).collect()
    }

    fn check(grid: &Grid, size: usize, spots: &[usize], fills: &[usize]) -> Result<(), Violation> {
        verify_solution(
            spots,
            &layout(fills),
            grid,
            PatternGeometry::for_grid(size, grid),
            &spec(1),
        )
    }

    // Tests a correct shared-filler solution passes
    // Verified by requiring one filler per placement
    #[test]
    fn test_valid_solution() {
        let grid = Grid::filled(3, 1).expect("valid dimensions");
        assert_eq!(check(&grid, 1, &[0, 2], &[1]), Ok(()));
        assert_eq!(check(&grid, 1, &[], &[]), Ok(()));
    }

    // Tests footprint violations are detected
    // Verified by skipping the availability check on footprints
    #[test]
    fn test_footprint_violations() {
        let grid = Grid::with_available(4, 4, &[0, 1, 2, 3, 4, 5, 6, 8]).expect("valid dimensions");

        assert_eq!(
            check(&grid, 2, &[3], &[]),
            Err(Violation::OutOfBounds { spot: 3 })
        );
        assert_eq!(
            check(&grid, 2, &[2], &[]),
            Err(Violation::UnavailableFootprint { spot: 2, cell: 7 })
        );
        assert_eq!(
            check(&grid, 2, &[0, 1], &[2]),
            Err(Violation::Overlap { spot: 1, cell: 1 })
        );
    }

    // Tests filler placement violations are detected
    // Verified by accepting fillers inside footprints
    #[test]
    fn test_filler_violations() {
        let grid = Grid::with_available(5, 1, &[0, 1, 2, 4]).expect("valid dimensions");

        assert_eq!(
            check(&grid, 1, &[0], &[1, 3]),
            Err(Violation::UnavailableFiller { cell: 3 })
        );
        assert_eq!(
            check(&grid, 1, &[0, 2], &[1, 2]),
            Err(Violation::FillerOnFootprint { cell: 2 })
        );
        assert_eq!(
            check(&grid, 1, &[0], &[1, 4]),
            Err(Violation::OrphanFiller { cell: 4 })
        );
    }

    // Tests missing units are reported per placement
    // Verified by counting fillers across all rings
    #[test]
    fn test_unmet_requirement() {
        let grid = Grid::filled(5, 1).expect("valid dimensions");
        let result = verify_solution(
            &[0, 4],
            &layout(&[1, 3]),
            &grid,
            PatternGeometry::for_grid(1, &grid),
            &spec(2),
        );
        assert_eq!(
            result,
            Err(Violation::UnmetRequirement {
                spot: 0,
                item: "wheat".to_string(),
                missing: 1,
            })
        );
    }

    // Tests violation messages name the offending cells
    // Verified by omitting the cell index
    #[test]
    fn test_violation_display() {
        let message = Violation::Overlap { spot: 4, cell: 9 }.to_string();
        assert!(message.contains('4'));
        assert!(message.contains('9'));

        let message = Violation::UnmetRequirement {
            spot: 2,
            item: "wheat".to_string(),
            missing: 3,
        }
        .to_string();
        assert!(message.contains("3x 'wheat'"));
    }
}
