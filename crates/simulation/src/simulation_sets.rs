//! Frame ordering via `SystemSet` phases.
//!
//! ```text
//! Input  →  Execute  →  Apply
//! ```
//!
//! * **Input** – Pointer, keyboard, and toolbar systems turn raw input into
//!   `GameAction`s on the `ActionQueue`. They never touch placement state.
//! * **Execute** – The executor drains the queue against the
//!   `PlacementController` and emits `PlacementEffect` / `GridEffect` events.
//! * **Apply** – Rendering mirrors the effects into the scene graph (spawn or
//!   despawn meshes, rebuild the ground, move the camera home).

use bevy::prelude::*;

/// Ordered phases for placement systems in the `Update` schedule.
///
/// Configured as a chain by `SimulationPlugin`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlacementSet {
    Input,
    Execute,
    Apply,
}

pub(crate) fn configure_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            PlacementSet::Input,
            PlacementSet::Execute,
            PlacementSet::Apply,
        )
            .chain(),
    );
}
