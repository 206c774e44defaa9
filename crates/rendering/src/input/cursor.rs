use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::picking::resolve_ground_hit;
use simulation::placement::PlacementController;

use crate::egui_input_guard::egui_wants_pointer;

use super::types::{CursorCell, StatusMessage};

pub fn tick_status_message(time: Res<Time>, mut status: ResMut<StatusMessage>) {
    if status.timer > 0.0 {
        status.timer -= time.delta_secs();
    }
}

/// Resolve the pointer to a ground cell each frame. The pointer over the
/// toolbar, outside the window, or off the ground plane yields no cell.
pub fn update_cursor_cell(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    controller: Res<PlacementController>,
    mut contexts: EguiContexts,
    mut cursor: ResMut<CursorCell>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };

    let cell = match window.cursor_position() {
        Some(_) if egui_wants_pointer(&mut contexts) => None,
        Some(pointer) => resolve_ground_hit(
            pointer,
            Vec2::new(window.width(), window.height()),
            cam_transform.compute_matrix(),
            camera.clip_from_view(),
            controller.grid(),
        ),
        None => None,
    };

    if cursor.cell != cell {
        cursor.cell = cell;
    }
}
