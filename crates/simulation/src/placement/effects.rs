use bevy::prelude::*;

use crate::buildings::PlacedBuilding;
use crate::grid::GridConfig;

/// A scene-graph change the rendering layer must mirror.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PlacementEffect {
    /// Spawn a visual for this building.
    Add(PlacedBuilding),
    /// Despawn the visual at this building's cell.
    Remove(PlacedBuilding),
}

impl PlacementEffect {
    pub fn building(&self) -> &PlacedBuilding {
        match self {
            PlacementEffect::Add(b) | PlacementEffect::Remove(b) => b,
        }
    }
}

/// What a click on a cell resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementDecision {
    Added(PlacedBuilding),
    Removed(PlacedBuilding),
    /// The cell is taken and no modifier was held. Nothing changes.
    Occupied(PlacedBuilding),
}

impl PlacementDecision {
    pub fn effect(&self) -> Option<PlacementEffect> {
        match *self {
            PlacementDecision::Added(b) => Some(PlacementEffect::Add(b)),
            PlacementDecision::Removed(b) => Some(PlacementEffect::Remove(b)),
            PlacementDecision::Occupied(_) => None,
        }
    }
}

/// Grid changes that require the ground, overlay, or camera to be rebuilt.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum GridEffect {
    Resized {
        config: GridConfig,
        camera_home: Vec3,
        ground_size: Vec2,
    },
    VisibilityChanged {
        visible: bool,
    },
}
