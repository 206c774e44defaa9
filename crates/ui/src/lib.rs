use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use simulation::simulation_sets::PlacementSet;

pub mod toolbar;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, toolbar::init_grid_form)
            .add_systems(Update, toolbar::toolbar_ui.in_set(PlacementSet::Input))
            .add_systems(Update, toolbar::sync_grid_form.in_set(PlacementSet::Apply));
    }
}
