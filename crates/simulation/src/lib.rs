use bevy::prelude::*;

pub mod buildings;
pub mod config;
pub mod game_actions;
pub mod grid;
pub mod keybindings;
pub mod picking;
pub mod placement;
pub mod simulation_sets;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

use placement::PlacementController;

/// Placement state, the action pipeline, and frame ordering. Contains no
/// rendering, so it runs headless under `MinimalPlugins`.
///
/// A `PlacementController` inserted before this plugin (e.g. from launch
/// options) is kept; otherwise the default grid is used.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        simulation_sets::configure_sets(app);

        app.init_resource::<PlacementController>()
            .init_resource::<keybindings::KeyBindings>()
            .add_plugins(game_actions::GameActionsPlugin);
    }
}
