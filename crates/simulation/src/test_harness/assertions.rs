//! Assertion helpers for `TestCity` integration tests.

use std::collections::HashSet;

use crate::buildings::BuildingType;
use crate::grid::GridCell;

use super::TestCity;

impl TestCity {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_building(&self, x: i32, z: i32, kind: BuildingType) {
        let found = self.building_at(x, z).map(|b| b.kind);
        assert_eq!(
            found,
            Some(kind),
            "Expected {kind:?} at ({x}, {z}), found {found:?}"
        );
    }

    pub fn assert_empty_cell(&self, x: i32, z: i32) {
        let found = self.building_at(x, z);
        assert!(found.is_none(), "Expected ({x}, {z}) empty, found {found:?}");
    }

    pub fn assert_building_count(&self, expected: usize) {
        let count = self.building_count();
        assert_eq!(count, expected, "Expected {expected} buildings, got {count}");
    }

    /// No two registered buildings share a cell.
    pub fn assert_unique_cells(&self) {
        let cells: HashSet<GridCell> = self
            .controller()
            .registry()
            .iter()
            .map(|b| b.cell)
            .collect();
        assert_eq!(
            cells.len(),
            self.building_count(),
            "Registry holds more buildings than distinct cells"
        );
    }

    pub fn assert_last_success(&self) {
        let last = self.last_result();
        assert!(
            matches!(last, Some((_, result)) if result.is_success()),
            "Expected last action to succeed, got {last:?}"
        );
    }
}
