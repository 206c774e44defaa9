use bevy::prelude::*;

use crate::grid::{GridCell, GridConfig};

/// The closed set of placeable building kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildingType {
    #[default]
    Residential,
    Commercial,
    Industrial,
    Road,
    Park,
}

impl BuildingType {
    /// All building types in toolbar order.
    pub const ALL: [BuildingType; 5] = [
        Self::Residential,
        Self::Commercial,
        Self::Industrial,
        Self::Road,
        Self::Park,
    ];

    /// Box dimensions as (width, height, depth) in world units.
    pub fn dimensions(self) -> Vec3 {
        match self {
            Self::Residential => Vec3::new(0.8, 1.0, 0.8),
            Self::Commercial => Vec3::new(0.8, 1.5, 0.8),
            Self::Industrial => Vec3::new(0.8, 0.8, 0.8),
            Self::Road => Vec3::new(0.9, 0.1, 0.9),
            Self::Park => Vec3::new(0.8, 0.2, 0.8),
        }
    }

    pub fn height(self) -> f32 {
        self.dimensions().y
    }

    pub fn color(self) -> Color {
        match self {
            Self::Residential => Color::srgb(0.30, 0.69, 0.31),
            Self::Commercial => Color::srgb(0.13, 0.59, 0.95),
            Self::Industrial => Color::srgb(1.0, 0.76, 0.03),
            Self::Road => Color::srgb(0.33, 0.33, 0.33),
            Self::Park => Color::srgb(0.55, 0.76, 0.29),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Industrial => "Industrial",
            Self::Road => "Road",
            Self::Park => "Park",
        }
    }

    /// Stable lowercase identifier for the tool.
    pub fn tool_id(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Road => "road",
            Self::Park => "park",
        }
    }

    /// Resolve a tool id. Unrecognized ids fall back to residential, which
    /// also carries the default 0.8x1.0x0.8 box.
    pub fn from_tool_id(id: &str) -> Self {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.tool_id().eq_ignore_ascii_case(id))
            .unwrap_or_default()
    }
}

/// A building registered at a grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedBuilding {
    pub kind: BuildingType,
    pub cell: GridCell,
    /// Center of the visual box: the cell's world position raised by half
    /// the building height so the box sits on the ground.
    pub world_position: Vec3,
    /// Monotonic placement counter, used to order bulk removal.
    pub serial: u64,
}

impl PlacedBuilding {
    pub fn new(kind: BuildingType, cell: GridCell, config: &GridConfig, serial: u64) -> Self {
        let ground = config.cell_to_world(cell);
        Self {
            kind,
            cell,
            world_position: Vec3::new(ground.x, kind.height() / 2.0, ground.y),
            serial,
        }
    }
}
