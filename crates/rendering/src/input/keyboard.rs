use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::game_actions::{
    ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction,
};
use simulation::keybindings::KeyBindings;

use crate::egui_input_guard::egui_wants_keyboard;

use super::types::{ReportedActions, StatusMessage};

/// Tool, grid, and reset shortcuts. Ignored while a toolbar text field has
/// focus so typing a grid size doesn't switch tools.
pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut contexts: EguiContexts,
    mut queue: ResMut<ActionQueue>,
) {
    if egui_wants_keyboard(&mut contexts) {
        return;
    }

    if let Some(tool) = bindings.pressed_tool(&keys) {
        queue.push(ActionSource::Keyboard, GameAction::SelectTool { tool });
    }
    if bindings.toggle_grid.just_pressed(&keys) {
        queue.push(ActionSource::Keyboard, GameAction::ToggleGrid);
    }
    if bindings.reset_all.just_pressed(&keys) {
        queue.push(ActionSource::Keyboard, GameAction::ResetAll);
    }
}

/// Status bar text for an executed action: `(text, is_error)`. Placement
/// successes are visible in the scene and produce no message.
pub fn status_text(action: &GameAction, result: &ActionResult) -> Option<(String, bool)> {
    match result {
        ActionResult::Error(err) => Some((err.message(), true)),
        ActionResult::NoOp(reason) => Some((reason.clone(), false)),
        ActionResult::Success => match action {
            GameAction::SetGridSize { width, depth } => {
                Some((format!("Grid resized to {width} x {depth}"), false))
            }
            GameAction::ResetAll => Some(("All buildings removed".to_string(), false)),
            GameAction::SelectTool { .. }
            | GameAction::PlaceOrRemove { .. }
            | GameAction::ToggleGrid => None,
        },
    }
}

/// Surface new action results in the status bar.
pub fn report_action_results(
    log: Res<ActionResultLog>,
    mut reported: ResMut<ReportedActions>,
    mut status: ResMut<StatusMessage>,
) {
    if log.total() == reported.seen_total {
        return;
    }
    for (action, result) in log.since(reported.seen_total) {
        if let Some((text, is_error)) = status_text(action, result) {
            status.set(text, is_error);
        }
    }
    reported.seen_total = log.total();
}
