//! Action executor system: drains the [`ActionQueue`] each frame, applies
//! every queued [`GameAction`] to the [`PlacementController`], forwards the
//! resulting effects as events, and records results in the [`ActionResultLog`].

use bevy::prelude::*;

use crate::placement::{GridEffect, PlacementController, PlacementDecision, PlacementEffect};

use super::result_log::ActionResultLog;
use super::{ActionError, ActionQueue, ActionResult, GameAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut controller: ResMut<PlacementController>,
    mut placement_events: EventWriter<PlacementEffect>,
    mut grid_events: EventWriter<GridEffect>,
) {
    if queue.is_empty() {
        return;
    }
    for queued in queue.drain() {
        let mut effects = Vec::new();
        let result = execute_single(&queued.action, &mut controller, &mut effects);
        if !result.is_success() {
            info!(
                "{} from {}: {}",
                queued.action.label(),
                queued.source.label(),
                result.reason().unwrap_or_default()
            );
        }
        for effect in effects {
            match effect {
                Effect::Placement(e) => {
                    placement_events.send(e);
                }
                Effect::Grid(e) => {
                    grid_events.send(e);
                }
            }
        }
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Effects collected while executing one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Placement(PlacementEffect),
    Grid(GridEffect),
}

/// Apply one action. Effects are appended to `effects` in emission order.
pub fn execute_single(
    action: &GameAction,
    controller: &mut PlacementController,
    effects: &mut Vec<Effect>,
) -> ActionResult {
    match action {
        GameAction::SelectTool { tool } => {
            if controller.select_tool(*tool) {
                info!("Selected tool: {}", tool.label());
            }
            ActionResult::Success
        }
        GameAction::PlaceOrRemove { cell, modifier } => {
            let decision = controller.place_or_remove(*cell, *modifier);
            if let Some(effect) = decision.effect() {
                effects.push(Effect::Placement(effect));
            }
            match decision {
                PlacementDecision::Added(b) => {
                    info!("Placed {} at {}", b.kind.label(), b.cell);
                    ActionResult::Success
                }
                PlacementDecision::Removed(b) => {
                    info!("Removed {} at {}", b.kind.label(), b.cell);
                    ActionResult::Success
                }
                PlacementDecision::Occupied(b) => ActionResult::NoOp(format!(
                    "{} already at {} (Shift-click or right-click to remove)",
                    b.kind.label(),
                    b.cell
                )),
            }
        }
        GameAction::ResetAll => {
            let removed = controller.reset_all();
            info!("Reset: removed {} buildings", removed.len());
            effects.extend(removed.into_iter().map(Effect::Placement));
            ActionResult::Success
        }
        GameAction::SetGridSize { width, depth } => {
            match controller.set_grid_config(*width, *depth) {
                Ok(effect) => {
                    info!("Grid resized to {}x{}", width, depth);
                    effects.push(Effect::Grid(effect));
                    ActionResult::Success
                }
                Err(err) => {
                    warn!("Ignoring grid size {}x{}: {}", width, depth, err);
                    ActionResult::Error(ActionError::InvalidGridSize(err))
                }
            }
        }
        GameAction::ToggleGrid => {
            let effect = controller.toggle_grid_visibility();
            effects.push(Effect::Grid(effect));
            ActionResult::Success
        }
    }
}
