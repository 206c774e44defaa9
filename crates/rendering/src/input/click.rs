use bevy::prelude::*;

use simulation::game_actions::{ActionQueue, ActionSource, GameAction};
use simulation::grid::GridCell;
use simulation::keybindings::shift_held;

use crate::camera::PointerDrags;

use super::types::CursorCell;

/// The action for a click this frame. A right click, or a left click with
/// Shift held, carries the remove modifier.
pub fn click_action(
    left_click: bool,
    right_click: bool,
    shift: bool,
    cell: Option<GridCell>,
) -> Option<GameAction> {
    if !left_click && !right_click {
        return None;
    }
    let cell = cell?;
    Some(GameAction::PlaceOrRemove {
        cell,
        modifier: right_click || shift,
    })
}

pub fn handle_placement_clicks(
    drags: Res<PointerDrags>,
    cursor: Res<CursorCell>,
    keys: Res<ButtonInput<KeyCode>>,
    mut queue: ResMut<ActionQueue>,
) {
    if let Some(action) = click_action(
        drags.left.clicked,
        drags.right.clicked,
        shift_held(&keys),
        cursor.cell,
    ) {
        queue.push(ActionSource::Pointer, action);
    }
}
