use std::collections::HashMap;

use crate::buildings::{BuildingType, PlacedBuilding};
use crate::grid::{GridCell, GridConfig};

/// Placed buildings keyed by exact grid cell.
#[derive(Debug, Clone, Default)]
pub struct BuildingRegistry {
    buildings: HashMap<GridCell, PlacedBuilding>,
    next_serial: u64,
}

impl BuildingRegistry {
    pub fn get(&self, cell: GridCell) -> Option<&PlacedBuilding> {
        self.buildings.get(&cell)
    }

    pub fn is_occupied(&self, cell: GridCell) -> bool {
        self.buildings.contains_key(&cell)
    }

    /// Register a new building. When the cell is already taken the registry
    /// is left untouched and the occupant is returned as the error.
    pub fn insert(
        &mut self,
        kind: BuildingType,
        cell: GridCell,
        config: &GridConfig,
    ) -> Result<PlacedBuilding, PlacedBuilding> {
        if let Some(existing) = self.buildings.get(&cell) {
            return Err(*existing);
        }
        let building = PlacedBuilding::new(kind, cell, config, self.next_serial);
        self.next_serial += 1;
        self.buildings.insert(cell, building);
        Ok(building)
    }

    pub fn remove(&mut self, cell: GridCell) -> Option<PlacedBuilding> {
        self.buildings.remove(&cell)
    }

    /// Empty the registry, returning every building most-recent first.
    pub fn drain_newest_first(&mut self) -> Vec<PlacedBuilding> {
        let mut drained: Vec<PlacedBuilding> = self.buildings.drain().map(|(_, b)| b).collect();
        drained.sort_by(|a, b| b.serial.cmp(&a.serial));
        drained
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedBuilding> {
        self.buildings.values()
    }

    pub fn count_of(&self, kind: BuildingType) -> usize {
        self.buildings.values().filter(|b| b.kind == kind).count()
    }
}
