//! Building placement: the cell registry, the controller that owns it, and
//! the effects it emits for the rendering layer.
//!
//! - `registry`: `BuildingRegistry`, at most one building per `GridCell`
//! - `controller`: `PlacementController` resource (registry + grid + tool)
//! - `effects`: `PlacementEffect` / `GridEffect` events and `PlacementDecision`

mod controller;
mod effects;
mod registry;

#[cfg(test)]
mod tests;

pub use controller::PlacementController;
pub use effects::{GridEffect, PlacementDecision, PlacementEffect};
pub use registry::BuildingRegistry;
