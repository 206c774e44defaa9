use bevy::prelude::*;

use simulation::simulation_sets::PlacementSet;

pub mod building_render;
pub mod camera;
pub mod cursor_preview;
pub mod egui_input_guard;
pub mod grid_overlay;
pub mod ground;
pub mod input;

use building_render::{BuildingMeshCache, BuildingVisuals};
use camera::PointerDrags;
use input::{CursorCell, ReportedActions, StatusMessage};

/// Scene, camera, and pointer/keyboard input. Reads placement state and
/// effect events; every mutation goes through the action queue.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerDrags>()
            .init_resource::<CursorCell>()
            .init_resource::<StatusMessage>()
            .init_resource::<ReportedActions>()
            .init_resource::<BuildingMeshCache>()
            .init_resource::<BuildingVisuals>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    ground::setup_lighting,
                    ground::spawn_ground,
                    grid_overlay::init_grid_overlay,
                    cursor_preview::spawn_cursor_preview,
                ),
            );

        // Pointer and keyboard input
        app.add_systems(
            Update,
            (
                (
                    camera::update_pointer_drags,
                    input::update_cursor_cell,
                    input::handle_placement_clicks,
                )
                    .chain(),
                camera::camera_orbit_drag.after(camera::update_pointer_drags),
                camera::camera_pan_drag.after(camera::update_pointer_drags),
                camera::camera_zoom,
                camera::recenter_camera,
                input::keyboard_shortcuts,
            )
                .in_set(PlacementSet::Input),
        );

        // Effects and per-frame scene updates
        app.add_systems(
            Update,
            (
                building_render::apply_placement_effects,
                ground::resize_ground,
                grid_overlay::apply_grid_effects,
                grid_overlay::draw_grid_overlay.after(grid_overlay::apply_grid_effects),
                camera::rehome_on_resize,
                camera::apply_orbit_camera
                    .after(camera::rehome_on_resize)
                    .after(camera::recenter_camera),
                cursor_preview::update_cursor_preview,
                input::report_action_results,
                input::tick_status_message.after(input::report_action_results),
            )
                .in_set(PlacementSet::Apply),
        );
    }
}
