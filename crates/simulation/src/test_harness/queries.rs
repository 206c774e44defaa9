//! Query methods for `TestCity`.

use bevy::prelude::*;

use crate::buildings::{BuildingType, PlacedBuilding};
use crate::game_actions::{ActionResult, ActionResultLog, GameAction};
use crate::grid::{GridCell, GridConfig};
use crate::placement::PlacementController;

use super::{RecordedEffects, TestCity};

impl TestCity {
    /// Access the ECS world mutably.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn controller(&self) -> &PlacementController {
        self.resource::<PlacementController>()
    }

    pub fn grid(&self) -> &GridConfig {
        self.controller().grid()
    }

    pub fn selected_tool(&self) -> BuildingType {
        self.controller().selected_tool()
    }

    pub fn building_count(&self) -> usize {
        self.controller().registry().len()
    }

    pub fn building_at(&self, x: i32, z: i32) -> Option<PlacedBuilding> {
        self.controller().registry().get(GridCell::new(x, z)).copied()
    }

    pub fn effects(&self) -> &RecordedEffects {
        self.resource::<RecordedEffects>()
    }

    /// Result of the most recently executed action.
    pub fn last_result(&self) -> Option<&(GameAction, ActionResult)> {
        self.resource::<ActionResultLog>().last_n(1).first()
    }
}
