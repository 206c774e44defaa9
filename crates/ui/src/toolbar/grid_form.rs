use bevy::prelude::*;

use simulation::game_actions::GameAction;
use simulation::grid::{parse_integer, GridAxis, GridConfig, GridSizeError};
use simulation::placement::{GridEffect, PlacementController};

/// Text currently typed into the width/depth fields.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct GridSizeForm {
    pub width: String,
    pub depth: String,
}

impl GridSizeForm {
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            width: config.width.to_string(),
            depth: config.depth.to_string(),
        }
    }

    /// Turn the typed text into a resize action. Text that isn't an integer
    /// is rejected here; range checks happen when the action executes.
    pub fn submit(&self) -> Result<GameAction, GridSizeError> {
        let width = parse_integer(GridAxis::Width, &self.width)?;
        let depth = parse_integer(GridAxis::Depth, &self.depth)?;
        Ok(GameAction::SetGridSize { width, depth })
    }
}

pub fn init_grid_form(mut commands: Commands, controller: Res<PlacementController>) {
    commands.insert_resource(GridSizeForm::from_config(controller.grid()));
}

/// After an accepted resize, show the applied size.
pub fn sync_grid_form(mut grid_events: EventReader<GridEffect>, mut form: ResMut<GridSizeForm>) {
    for effect in grid_events.read() {
        if let GridEffect::Resized { config, .. } = effect {
            *form = GridSizeForm::from_config(config);
        }
    }
}
