use bevy::prelude::*;

use crate::buildings::BuildingType;
use crate::grid::{GridCell, GridConfig, GridSizeError};

use super::effects::{GridEffect, PlacementDecision, PlacementEffect};
use super::registry::BuildingRegistry;

/// Owns every piece of placement state: the registry, the grid config, and
/// the selected tool. Every operation is a single atomic step over this state.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlacementController {
    registry: BuildingRegistry,
    grid: GridConfig,
    selected_tool: BuildingType,
}

impl PlacementController {
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            ..Default::default()
        }
    }

    pub fn registry(&self) -> &BuildingRegistry {
        &self.registry
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn selected_tool(&self) -> BuildingType {
        self.selected_tool
    }

    /// Returns `true` if the tool actually changed.
    pub fn select_tool(&mut self, tool: BuildingType) -> bool {
        let changed = self.selected_tool != tool;
        self.selected_tool = tool;
        changed
    }

    /// Resolve a click on `cell`.
    ///
    /// Empty cell: place the selected type, modifier or not. Occupied cell:
    /// remove with `modifier`, otherwise leave the existing building alone.
    pub fn place_or_remove(&mut self, cell: GridCell, modifier: bool) -> PlacementDecision {
        if let Some(existing) = self.registry.get(cell).copied() {
            if !modifier {
                return PlacementDecision::Occupied(existing);
            }
            self.registry.remove(cell);
            return PlacementDecision::Removed(existing);
        }

        match self.registry.insert(self.selected_tool, cell, &self.grid) {
            Ok(added) => PlacementDecision::Added(added),
            Err(existing) => PlacementDecision::Occupied(existing),
        }
    }

    /// Remove every building; one `Remove` effect per building, newest first.
    pub fn reset_all(&mut self) -> Vec<PlacementEffect> {
        self.registry
            .drain_newest_first()
            .into_iter()
            .map(PlacementEffect::Remove)
            .collect()
    }

    /// Resize the grid. Rejected sizes leave all state untouched. Existing
    /// buildings keep their cells even if they now fall outside the ground.
    pub fn set_grid_config(&mut self, width: i64, depth: i64) -> Result<GridEffect, GridSizeError> {
        let resized = self.grid.resized(width, depth)?;
        self.grid = resized;
        Ok(GridEffect::Resized {
            config: self.grid.clone(),
            camera_home: self.grid.camera_home(),
            ground_size: self.grid.ground_size(),
        })
    }

    pub fn toggle_grid_visibility(&mut self) -> GridEffect {
        self.grid.visible = !self.grid.visible;
        GridEffect::VisibilityChanged {
            visible: self.grid.visible,
        }
    }
}
