use bevy::prelude::*;

use simulation::grid::OverlayLine;
use simulation::placement::{GridEffect, PlacementController};

/// Cached cell boundary lines, rebuilt only when the grid is resized.
#[derive(Resource, Debug, Default)]
pub struct GridOverlay {
    pub lines: Vec<OverlayLine>,
    pub visible: bool,
}

pub fn init_grid_overlay(mut commands: Commands, controller: Res<PlacementController>) {
    let grid = controller.grid();
    commands.insert_resource(GridOverlay {
        lines: grid.overlay_lines(),
        visible: grid.visible,
    });
}

pub fn apply_grid_effects(
    mut grid_events: EventReader<GridEffect>,
    mut overlay: ResMut<GridOverlay>,
) {
    for effect in grid_events.read() {
        match effect {
            GridEffect::Resized { config, .. } => {
                overlay.lines = config.overlay_lines();
                overlay.visible = config.visible;
            }
            GridEffect::VisibilityChanged { visible } => {
                overlay.visible = *visible;
            }
        }
    }
}

pub fn draw_grid_overlay(mut gizmos: Gizmos, overlay: Res<GridOverlay>) {
    if !overlay.visible {
        return;
    }
    let color = Color::srgba(0.1, 0.1, 0.1, 0.35);
    for line in &overlay.lines {
        gizmos.line(line.start, line.end, color);
    }
}
