//! # TestCity — headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` so the whole action pipeline
//! (queue → executor → effect events) can be driven without a window or
//! renderer. Emitted effects are captured into [`RecordedEffects`] so tests can
//! check exactly what the rendering layer would have been told to do.

mod assertions;
mod queries;
mod setup;

use bevy::app::App;
use bevy::prelude::*;

use crate::grid::GridConfig;
use crate::placement::{GridEffect, PlacementController, PlacementEffect};
use crate::simulation_sets::PlacementSet;
use crate::SimulationPlugin;

/// Every effect event seen since the harness started, in emission order.
#[derive(Resource, Default, Debug)]
pub struct RecordedEffects {
    pub placement: Vec<PlacementEffect>,
    pub grid: Vec<GridEffect>,
}

fn record_effects(
    mut placement: EventReader<PlacementEffect>,
    mut grid: EventReader<GridEffect>,
    mut recorded: ResMut<RecordedEffects>,
) {
    recorded.placement.extend(placement.read().copied());
    recorded.grid.extend(grid.read().cloned());
}

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
pub struct TestCity {
    app: App,
}

impl TestCity {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create an empty city on the default grid.
    pub fn new() -> Self {
        Self::with_grid_config(GridConfig::default())
    }

    /// Create an empty city on a grid of the given size.
    ///
    /// Panics if the size is invalid; tests should pass valid sizes here and
    /// exercise rejection through `act`.
    pub fn with_grid(width: i64, depth: i64) -> Self {
        let config = match GridConfig::with_size(width, depth) {
            Ok(config) => config,
            Err(err) => panic!("invalid test grid {width}x{depth}: {err}"),
        };
        Self::with_grid_config(config)
    }

    fn with_grid_config(config: GridConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Inserted before the plugin so init_resource keeps it.
        app.insert_resource(PlacementController::new(config));
        app.add_plugins(SimulationPlugin);
        app.init_resource::<RecordedEffects>();
        app.add_systems(Update, record_effects.in_set(PlacementSet::Apply));

        // Run one update so Startup systems execute.
        app.update();

        Self { app }
    }
}

impl Default for TestCity {
    fn default() -> Self {
        Self::new()
    }
}
